//! Highlighting stage
//!
//! Runs tokenization and line classification over the same source and bundles the results
//! into a [`HighlightedDocument`] for renderers.

use crate::cdx::lexing::{tokenize_with, ContentLineClassifier, LexOptions};
use crate::cdx::rendering::HighlightedDocument;
use crate::cdx::token::Token;
use crate::cdx::transforms::{Runnable, TransformError};

#[derive(Debug, Clone, Default)]
pub struct Highlighting {
    options: LexOptions,
}

impl Highlighting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LexOptions) -> Self {
        Highlighting { options }
    }

    fn highlight(&self, source: String) -> Result<HighlightedDocument, TransformError> {
        let tokens = tokenize_with(&source, self.options.precedence());
        check_coverage(&source, &tokens)?;
        let content_lines =
            ContentLineClassifier::new(self.options.indent_unit()).classify_source(&source);
        tracing::debug!(
            tokens = tokens.len(),
            lines = content_lines.len(),
            "highlighted"
        );
        Ok(HighlightedDocument::new(source, tokens, content_lines))
    }
}

/// Top-level tokens must tile the source before anything renders from them.
fn check_coverage(source: &str, tokens: &[Token]) -> Result<(), TransformError> {
    let mut cursor = 0;
    for token in tokens {
        if token.span.start != cursor {
            return Err(TransformError::StageFailed {
                stage: "highlighting".to_string(),
                message: format!("gap or overlap at byte {}", cursor),
            });
        }
        cursor = token.span.end;
    }
    if cursor != source.len() {
        return Err(TransformError::StageFailed {
            stage: "highlighting".to_string(),
            message: format!("tokens stop at byte {} of {}", cursor, source.len()),
        });
    }
    Ok(())
}

impl Runnable<String, HighlightedDocument> for Highlighting {
    fn run(&self, input: String) -> Result<HighlightedDocument, TransformError> {
        self.highlight(input)
    }
}

impl Runnable<&str, HighlightedDocument> for Highlighting {
    fn run(&self, input: &str) -> Result<HighlightedDocument, TransformError> {
        self.highlight(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdx::token::TokenKind;

    #[test]
    fn test_highlight_bundles_tokens_and_lines() {
        let document = Highlighting::new()
            .run("<Doc>\n\tHello there.\n</Doc>")
            .unwrap();
        assert_eq!(document.content_lines(), &[false, true, false]);
        assert_eq!(document.tokens().len(), 6);
        assert_eq!(document.source(), "<Doc>\n\tHello there.\n</Doc>");
    }

    #[test]
    fn test_coverage_check_rejects_gaps() {
        let tokens = vec![
            Token::leaf(TokenKind::Text, 0..1),
            Token::leaf(TokenKind::Text, 2..3),
        ];
        let err = check_coverage("abc", &tokens).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Stage 'highlighting' failed: gap or overlap at byte 1"
        );
        assert!(check_coverage("ab", &tokens[..1]).is_err());
    }
}
