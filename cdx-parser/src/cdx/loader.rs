//! Document loading utilities
//!
//! [`DocumentLoader`] loads CDX source from a file or a string and runs transforms on it.
//! The CLI and the integration tests both go through it.
//!
//! ```rust,ignore
//! use cdx_parser::cdx::loader::DocumentLoader;
//!
//! let loader = DocumentLoader::from_path("document.cdx")?;
//! let tokens = loader.tokenize()?;
//! let document = loader.highlight()?;
//! ```

use crate::cdx::lexing::LexOptions;
use crate::cdx::rendering::HighlightedDocument;
use crate::cdx::token::Token;
use crate::cdx::transforms::stages::Highlighting;
use crate::cdx::transforms::standard::{CLASSIFY_LINES, HIGHLIGHT, TOKENIZE};
use crate::cdx::transforms::{Runnable, Transform, TransformError};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

/// Source text with transform shortcuts
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");
        Ok(DocumentLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Runs any transform over a copy of the source. All shortcuts go through here.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Top-level token trees, default precedence.
    pub fn tokenize(&self) -> Result<Vec<Token>, LoaderError> {
        self.with(&TOKENIZE)
    }

    /// Content-line flags, tab indent unit.
    pub fn classify_lines(&self) -> Result<Vec<bool>, LoaderError> {
        self.with(&CLASSIFY_LINES)
    }

    pub fn highlight(&self) -> Result<HighlightedDocument, LoaderError> {
        self.with(&HIGHLIGHT)
    }

    /// Tokens and content-line flags using configured options.
    pub fn highlight_with(&self, options: &LexOptions) -> Result<HighlightedDocument, LoaderError> {
        Ok(Highlighting::with_options(options.clone()).run(self.source.as_str())?)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdx::classifying::PrecedenceTable;
    use crate::cdx::testing::sample_path;
    use crate::cdx::token::LiteralCategory;

    #[test]
    fn test_from_string() {
        let loader = DocumentLoader::from_string("<A/>\n");
        assert_eq!(loader.source(), "<A/>\n");
    }

    #[test]
    fn test_from_path() {
        let loader = DocumentLoader::from_path(sample_path("person.cdx")).unwrap();
        assert!(loader.source().starts_with("<Person"));
        assert!(!loader.tokenize().unwrap().is_empty());
    }

    #[test]
    fn test_from_path_nonexistent() {
        let result = DocumentLoader::from_path("nonexistent.cdx");
        assert!(matches!(result, Err(LoaderError::Io(_))));
    }

    #[test]
    fn test_loader_is_reusable() {
        let loader = DocumentLoader::from_string("<A>\n\tprose\n</A>");
        let tokens = loader.tokenize().unwrap();
        let flags = loader.classify_lines().unwrap();
        let document = loader.highlight().unwrap();
        assert_eq!(document.tokens(), tokens.as_slice());
        assert_eq!(document.content_lines(), flags.as_slice());
    }

    #[test]
    fn test_highlight_with_options() {
        let precedence = PrecedenceTable::from_names(["color-named"]).unwrap();
        let options = LexOptions::new(precedence, "  ").unwrap();
        let loader = DocumentLoader::from_string("<A c=&red n=1>\n  prose\n\tnot prose");
        let document = loader.highlight_with(&options).unwrap();
        let values: Vec<_> = document.tokens()[0]
            .traits()
            .map(|t| t.value.literal())
            .collect();
        assert_eq!(
            values,
            vec![Some(LiteralCategory::ColorNamed), Some(LiteralCategory::Opaque)]
        );
        assert_eq!(document.content_lines(), &[false, true, false]);
    }
}
