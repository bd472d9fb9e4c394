//! Standard transform definitions
//!
//! Prebuilt pipelines over the default options, as `once_cell::sync::Lazy` statics.
//! Callers with configured options build their own from the stages.

use crate::cdx::rendering::HighlightedDocument;
use crate::cdx::token::Token;
use crate::cdx::transforms::stages::{Highlighting, LineClassification, StructuralTokenization};
use crate::cdx::transforms::Transform;
use once_cell::sync::Lazy;

pub type TokenizeTransform = Transform<String, Vec<Token>>;
pub type LinesTransform = Transform<String, Vec<bool>>;
pub type HighlightTransform = Transform<String, HighlightedDocument>;

/// String → top-level token trees, default precedence.
pub static TOKENIZE: Lazy<TokenizeTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(StructuralTokenization::new()));

/// String → one content-line flag per line, tab indent unit.
pub static CLASSIFY_LINES: Lazy<LinesTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(LineClassification::new()));

/// String → tokens plus content-line flags, default options.
pub static HIGHLIGHT: Lazy<HighlightTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Highlighting::new()));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdx::token::MarkerForm;

    #[test]
    fn test_tokenize() {
        let tokens = TOKENIZE.run("<A/>".to_string()).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].marker_form(), Some(MarkerForm::SelfClosing));
    }

    #[test]
    fn test_classify_lines() {
        let flags = CLASSIFY_LINES.run("\tprose\n\t<A/>".to_string()).unwrap();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_highlight_then_count() {
        let count = Transform::from_fn(Ok)
            .then_transform(&HIGHLIGHT)
            .then(Transform::from_fn(|doc: HighlightedDocument| {
                Ok(doc.content_lines().iter().filter(|flag| **flag).count())
            }));
        assert_eq!(count.run("<A>\n\tone\n\ttwo\n</A>".to_string()).unwrap(), 2);
    }
}
