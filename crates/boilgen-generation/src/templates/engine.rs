//! Template engine for snippet-style variable substitution
//!
//! Placeholders are a `$` sigil followed by uppercase letters and underscores
//! (`$CURRENT_YEAR`). Substitution is a single pass: values are never
//! re-scanned, unknown names become the empty string, and there is no escape
//! sequence for a literal `$NAME`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::templates::resolver::VariableSet;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([A-Z_]+)").expect("placeholder pattern is valid"));

/// Template engine bound to the variable set of one run
pub struct TemplateEngine<'a> {
    variables: &'a VariableSet,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine over a resolved variable set
    pub fn new(variables: &'a VariableSet) -> Self {
        Self { variables }
    }

    /// Substitute every placeholder in `text`
    pub fn render(&self, text: &str) -> String {
        substitute(text, self.variables)
    }

    /// Substitute each line independently and join them with `\n`
    pub fn render_lines(&self, lines: &[String]) -> String {
        lines
            .iter()
            .map(|line| self.render(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Replace every `$NAME` token in `text` with its value from `variables`
pub fn substitute(text: &str, variables: &VariableSet) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            variables.lookup(&caps[1]).unwrap_or_default().to_owned()
        })
        .into_owned()
}

/// Names of all placeholder tokens referenced in `text`, in order of appearance
pub fn placeholder_names(text: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}
