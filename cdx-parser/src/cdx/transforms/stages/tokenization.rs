//! Structural tokenization stage
//!
//! Converts source text into top-level token trees.

use crate::cdx::classifying::PrecedenceTable;
use crate::cdx::lexing::tokenize_with;
use crate::cdx::token::Token;
use crate::cdx::transforms::{Runnable, TransformError};

/// Source text to top-level tokens (markers, annotations, text, whitespace, newlines).
///
/// Trait values inside markers are classified with the stage's precedence table.
#[derive(Debug, Clone, Default)]
pub struct StructuralTokenization {
    precedence: PrecedenceTable,
}

impl StructuralTokenization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precedence(precedence: PrecedenceTable) -> Self {
        StructuralTokenization { precedence }
    }

    fn tokenize(&self, source: &str) -> Vec<Token> {
        let tokens = tokenize_with(source, &self.precedence);
        tracing::debug!(bytes = source.len(), tokens = tokens.len(), "tokenized");
        tokens
    }
}

impl Runnable<String, Vec<Token>> for StructuralTokenization {
    fn run(&self, input: String) -> Result<Vec<Token>, TransformError> {
        Ok(self.tokenize(&input))
    }
}

impl Runnable<&str, Vec<Token>> for StructuralTokenization {
    fn run(&self, input: &str) -> Result<Vec<Token>, TransformError> {
        Ok(self.tokenize(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdx::testing::assert_tiles;
    use crate::cdx::token::LiteralCategory;

    #[test]
    fn test_tokenization_covers_source() {
        let source = "<Doc a=1>\n\tprose\n</Doc>\n";
        let tokens = StructuralTokenization::new().run(source).unwrap();
        assert_tiles(source, &tokens);
    }

    #[test]
    fn test_tokenization_empty() {
        let tokens = StructuralTokenization::new().run(String::new()).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_custom_precedence_reaches_trait_values() {
        let table = PrecedenceTable::from_names(["number-integer"]).unwrap();
        let stage = StructuralTokenization::with_precedence(table);
        let tokens = stage.run("<A b=&red c=7>").unwrap();
        let values: Vec<_> = tokens[0]
            .traits()
            .map(|t| t.value.literal())
            .collect();
        assert_eq!(
            values,
            vec![
                Some(LiteralCategory::Opaque),
                Some(LiteralCategory::NumberInteger)
            ]
        );
    }
}
