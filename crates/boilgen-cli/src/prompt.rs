// Interactive prompts and user notifications

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crate::{
    error::CliResult,
    output::{self, OutputStyle},
};

/// Asks the user to choose or type a value
///
/// `Ok(None)` means the user cancelled.
pub trait Prompter {
    /// Pick one of `options`
    fn pick(&mut self, placeholder: &str, options: &[&str]) -> CliResult<Option<String>>;

    /// Free-text input; an empty answer counts as cancelled
    fn input(&mut self, prompt: &str, placeholder: &str) -> CliResult<Option<String>>;
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Sink for user-facing messages
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn warning(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

/// Prints notifications to the terminal
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => output::print_info(message),
            Severity::Success => output::print_success(message),
            Severity::Warning => output::print_warning(message),
            Severity::Error => output::print_error(message),
        }
    }
}

/// Line-based prompter over any reader and writer
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
    style: OutputStyle,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter reading stdin and writing stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), OutputStyle::default())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W, style: OutputStyle) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    /// Consume the prompter, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one trimmed line; `None` on EOF
    fn read_answer(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn pick(&mut self, placeholder: &str, options: &[&str]) -> CliResult<Option<String>> {
        if options.is_empty() {
            return Ok(None);
        }

        writeln!(self.output, "{}", self.style.header(placeholder))?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}", self.style.numbered_item(i + 1, option))?;
        }

        loop {
            write!(
                self.output,
                "{}",
                self.style.prompt(&format!("Select [1-{}]:", options.len()))
            )?;
            self.output.flush()?;

            let answer = match self.read_answer()? {
                Some(answer) if !answer.is_empty() => answer,
                _ => return Ok(None),
            };

            match parse_choice(&answer, options) {
                Some(choice) => return Ok(Some(choice.to_string())),
                None => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}",
                    options.len()
                )?,
            }
        }
    }

    fn input(&mut self, prompt: &str, placeholder: &str) -> CliResult<Option<String>> {
        let question = if placeholder.is_empty() {
            format!("{}:", prompt)
        } else {
            format!("{} ({}):", prompt, placeholder)
        };
        write!(self.output, "{}", self.style.prompt(&question))?;
        self.output.flush()?;

        Ok(self.read_answer()?.filter(|answer| !answer.is_empty()))
    }
}

/// Match an answer against a pick list by 1-based number or exact name
pub fn parse_choice<'a>(answer: &str, options: &[&'a str]) -> Option<&'a str> {
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    options.iter().find(|option| **option == answer).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            OutputStyle::plain(),
        )
    }

    #[test]
    fn test_parse_choice() {
        let options = ["Component", "Page"];
        assert_eq!(parse_choice("1", &options), Some("Component"));
        assert_eq!(parse_choice("2", &options), Some("Page"));
        assert_eq!(parse_choice("Page", &options), Some("Page"));
        assert_eq!(parse_choice("0", &options), None);
        assert_eq!(parse_choice("3", &options), None);
        assert_eq!(parse_choice("page", &options), None);
    }

    #[test]
    fn test_pick_by_number() {
        let mut p = prompter("2\n");
        let choice = p.pick("What do you want to generate?", &["Component", "Page"]).unwrap();
        assert_eq!(choice.as_deref(), Some("Page"));

        let shown = String::from_utf8(p.into_output()).unwrap();
        assert!(shown.contains("What do you want to generate?"));
        assert!(shown.contains("  1. Component"));
        assert!(shown.contains("  2. Page"));
    }

    #[test]
    fn test_pick_retries_after_bad_answer() {
        let mut p = prompter("9\nComponent\n");
        let choice = p.pick("Pick", &["Component", "Page"]).unwrap();
        assert_eq!(choice.as_deref(), Some("Component"));

        let shown = String::from_utf8(p.into_output()).unwrap();
        assert!(shown.contains("Please enter a number between 1 and 2"));
    }

    #[test]
    fn test_pick_empty_answer_cancels() {
        let mut p = prompter("\n");
        assert_eq!(p.pick("Pick", &["Component"]).unwrap(), None);
    }

    #[test]
    fn test_pick_eof_cancels() {
        let mut p = prompter("");
        assert_eq!(p.pick("Pick", &["Component"]).unwrap(), None);
    }

    #[test]
    fn test_pick_without_options_cancels() {
        let mut p = prompter("1\n");
        assert_eq!(p.pick("Pick", &[]).unwrap(), None);
    }

    #[test]
    fn test_input_trims_answer() {
        let mut p = prompter("  Button  \n");
        let name = p.input("Enter Component name", "MyComponent").unwrap();
        assert_eq!(name.as_deref(), Some("Button"));

        let shown = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(shown, "Enter Component name (MyComponent): ");
    }

    #[test]
    fn test_input_empty_cancels() {
        let mut p = prompter("   \n");
        assert_eq!(p.input("Enter name", "").unwrap(), None);
    }
}
