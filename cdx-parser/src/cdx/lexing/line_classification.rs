//! Content-line classification
//!
//! A content line sits exactly one indent unit deep and does not open with markup: after
//! the unit and any further whitespace it must not start with `<`, `[`, or a trait name
//! followed by `=`. Lines indented deeper than one unit are never content lines.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:<|\[|[a-z][A-Za-z0-9]*=)").unwrap());

/// Classifies lines for one indent unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLineClassifier {
    indent_unit: String,
}

impl ContentLineClassifier {
    pub fn new(indent_unit: impl Into<String>) -> Self {
        ContentLineClassifier {
            indent_unit: indent_unit.into(),
        }
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// `line` must not contain its line terminator.
    pub fn is_content_line(&self, line: &str) -> bool {
        is_content_line(line, &self.indent_unit)
    }

    pub fn classify<S: AsRef<str>>(&self, lines: &[S]) -> Vec<bool> {
        lines
            .iter()
            .map(|line| self.is_content_line(line.as_ref()))
            .collect()
    }

    /// One flag per line of `source`, split the way [`str::lines`] splits.
    pub fn classify_source(&self, source: &str) -> Vec<bool> {
        source
            .lines()
            .map(|line| self.is_content_line(line))
            .collect()
    }
}

pub fn is_content_line(line: &str, indent_unit: &str) -> bool {
    if indent_unit.is_empty() {
        return false;
    }
    let Some(rest) = line.strip_prefix(indent_unit) else {
        return false;
    };
    if rest.starts_with(indent_unit) {
        return false;
    }
    !MARKUP_PREFIX.is_match(rest.trim_start())
}

pub fn classify_lines<S: AsRef<str>>(lines: &[S], indent_unit: &str) -> Vec<bool> {
    ContentLineClassifier::new(indent_unit).classify(lines)
}
