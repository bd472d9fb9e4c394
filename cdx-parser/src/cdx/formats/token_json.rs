//! Token JSON format
//!
//! Pretty-printed JSON array of token trees. Each node carries its kind name, marker form
//! (markers only), byte offsets, and source text.

use super::registry::{FormatError, Formatter};
use crate::cdx::rendering::HighlightedDocument;
use crate::cdx::token::{MarkerForm, Token};
use serde::Serialize;

#[derive(Serialize)]
struct TokenView<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    form: Option<MarkerForm>,
    start: usize,
    end: usize,
    text: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TokenView<'a>>,
}

impl<'a> TokenView<'a> {
    fn new(source: &'a str, token: &Token) -> Self {
        TokenView {
            kind: token.kind.name(),
            form: token.marker_form(),
            start: token.span.start,
            end: token.span.end,
            text: token.text(source),
            children: token
                .children
                .iter()
                .map(|child| TokenView::new(source, child))
                .collect(),
        }
    }
}

pub fn to_token_json(source: &str, tokens: &[Token]) -> Result<String, serde_json::Error> {
    let views: Vec<_> = tokens
        .iter()
        .map(|token| TokenView::new(source, token))
        .collect();
    serde_json::to_string_pretty(&views)
}

pub struct TokenJsonFormatter;

impl Formatter for TokenJsonFormatter {
    fn name(&self) -> &str {
        "token-json"
    }

    fn description(&self) -> &str {
        "Token trees as JSON with kinds, offsets and text"
    }

    fn serialize(&self, document: &HighlightedDocument) -> Result<String, FormatError> {
        to_token_json(document.source(), document.tokens())
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdx::lexing::tokenize;
    use serde_json::{json, Value};

    #[test]
    fn test_marker_json() {
        let source = "<A b=1/>";
        let output = to_token_json(source, &tokenize(source)).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["kind"], "marker");
        assert_eq!(value[0]["form"], "self-closing");
        assert_eq!(value[0]["end"], 8);
        let trait_token = &value[0]["children"][3];
        assert_eq!(trait_token["kind"], "trait");
        assert_eq!(
            trait_token["children"][2],
            json!({"kind": "number-integer", "start": 5, "end": 6, "text": "1"})
        );
    }
}
