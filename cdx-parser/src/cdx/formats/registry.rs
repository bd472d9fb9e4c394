//! Format registry
//!
//! Formats register under their name; the CLI resolves `--format` through the registry,
//! so adding a format is one `register` call.

use crate::cdx::rendering::HighlightedDocument;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization failed: {0}")]
    SerializationError(String),
}

/// Serializes a highlighted document to text
pub trait Formatter: Send + Sync {
    /// Name used to select this format, e.g. `treeviz`
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn serialize(&self, document: &HighlightedDocument) -> Result<String, FormatError>;
}

pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Registers `format`, replacing any format of the same name.
    pub fn register<F: Formatter + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Registered names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn serialize(
        &self,
        document: &HighlightedDocument,
        format: &str,
    ) -> Result<String, FormatError> {
        self.get(format)?.serialize(document)
    }

    /// Registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::treeviz::TreevizFormatter::default());
        registry.register(super::token_json::TokenJsonFormatter);
        registry.register(super::lines::LinesFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
