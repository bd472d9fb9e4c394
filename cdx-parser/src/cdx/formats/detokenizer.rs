//! Detokenizer
//!
//! Goes back from tokens to source text by concatenating spans. Tokens carry no text of
//! their own, so a correct token stream always detokenizes to exactly the source it came
//! from. Used for round-trip testing.

use crate::cdx::token::Token;

/// Concatenates the spans of the top-level `tokens`.
pub fn detokenize(source: &str, tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text(source)).collect()
}

/// Concatenates the spans of every leaf, in document order.
///
/// Equals [`detokenize`] only when every container is tiled by its children.
pub fn detokenize_leaves(source: &str, tokens: &[Token]) -> String {
    tokens
        .iter()
        .flat_map(|token| token.walk())
        .filter(|token| token.children.is_empty())
        .map(|token| token.text(source))
        .collect()
}
