// Output formatting and styling

use colored::Colorize;

use crate::logging::VerbosityLevel;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Style without colors, for piped output and tests
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format prompt
    pub fn prompt(&self, prompt: &str) -> String {
        if self.use_colors {
            format!("{} ", prompt.magenta().bold())
        } else {
            format!("{} ", prompt)
        }
    }

    /// Format header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format a numbered list item
    pub fn numbered_item(&self, number: usize, item: &str) -> String {
        if self.use_colors {
            format!("  {}. {}", number.to_string().cyan(), item)
        } else {
            format!("  {}. {}", number, item)
        }
    }

    /// Format a list item
    pub fn list_item(&self, item: &str) -> String {
        format!("  • {}", item)
    }
}

/// Print formatted output
pub fn print_success(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        println!("{}", OutputStyle::default().success(msg));
    }
}

pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}

pub fn print_warning(msg: &str) {
    eprintln!("{}", OutputStyle::default().warning(msg));
}

pub fn print_info(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        println!("{}", OutputStyle::default().info(msg));
    }
}
