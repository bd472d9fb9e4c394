//! Content-line classification stage

use crate::cdx::lexing::{ContentLineClassifier, DEFAULT_INDENT_UNIT};
use crate::cdx::transforms::{Runnable, TransformError};

/// Source text to one content-line flag per line.
#[derive(Debug, Clone)]
pub struct LineClassification {
    classifier: ContentLineClassifier,
}

impl LineClassification {
    pub fn new() -> Self {
        Self::with_indent_unit(DEFAULT_INDENT_UNIT)
    }

    pub fn with_indent_unit(indent_unit: &str) -> Self {
        LineClassification {
            classifier: ContentLineClassifier::new(indent_unit),
        }
    }

    fn classify(&self, source: &str) -> Vec<bool> {
        let flags = self.classifier.classify_source(source);
        tracing::debug!(
            lines = flags.len(),
            content = flags.iter().filter(|flag| **flag).count(),
            "classified lines"
        );
        flags
    }
}

impl Default for LineClassification {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<bool>> for LineClassification {
    fn run(&self, input: String) -> Result<Vec<bool>, TransformError> {
        Ok(self.classify(&input))
    }
}

impl Runnable<&str, Vec<bool>> for LineClassification {
    fn run(&self, input: &str) -> Result<Vec<bool>, TransformError> {
        Ok(self.classify(input))
    }
}
