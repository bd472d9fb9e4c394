//! Options shared by the tokenizer and the content-line classifier

use crate::cdx::classifying::{PrecedenceError, PrecedenceTable};
use thiserror::Error;

/// One level of indentation in CDX documents.
pub const DEFAULT_INDENT_UNIT: &str = "\t";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Precedence(#[from] PrecedenceError),
    #[error("indent unit must be non-empty, single-line whitespace (got {0:?})")]
    InvalidIndentUnit(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOptions {
    precedence: PrecedenceTable,
    indent_unit: String,
}

impl LexOptions {
    pub fn new(
        precedence: PrecedenceTable,
        indent_unit: impl Into<String>,
    ) -> Result<Self, OptionsError> {
        let indent_unit = indent_unit.into();
        let valid = !indent_unit.is_empty()
            && indent_unit
                .chars()
                .all(|c| c.is_whitespace() && c != '\n' && c != '\r');
        if !valid {
            return Err(OptionsError::InvalidIndentUnit(indent_unit));
        }
        Ok(LexOptions {
            precedence,
            indent_unit,
        })
    }

    pub fn precedence(&self) -> &PrecedenceTable {
        &self.precedence
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            precedence: PrecedenceTable::default(),
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }
}
