//! Marker scanning
//!
//!     A marker is `<` or `</`, a concept name (`[A-Z][A-Za-z0-9]*`), then any mix of
//!     whitespace, traits (`name=value`) and unrecognized runs, up to `>` or `/>`. Whitespace
//!     inside a marker may include newlines.
//!
//!     A trait value is the maximal run of characters other than whitespace and `>`, minus a
//!     `/` that directly precedes the closing `>`. Quotes and brackets get no special
//!     treatment here: `title="a b"` yields the value `"a` followed by the text `b"`, and a
//!     stray quote can never carry a marker past the next `>`.
//!
//!     A `>` directly after a backslash is escaped and does not end the marker. The marker
//!     therefore always ends at the first unescaped `>` after its concept name, or never.
//!
//!     Input that does not complete a marker is left for the caller to emit as text.

use super::trait_values::lex_value;
use crate::cdx::classifying::PrecedenceTable;
use crate::cdx::token::{MarkerForm, Token, TokenKind};

/// The marker starting at `start` (which must hold `<`), or `None` if it never completes.
pub fn scan_marker(source: &str, start: usize, table: &PrecedenceTable) -> Option<Token> {
    let closing = source[start + 1..].starts_with('/');
    let name_start = if closing { start + 2 } else { start + 1 };
    let name_end = identifier_end(source, name_start, |b| b.is_ascii_uppercase())?;
    let mut children = vec![
        Token::leaf(TokenKind::Punctuation, start..name_start),
        Token::leaf(TokenKind::ConceptName, name_start..name_end),
    ];
    let mut cursor = name_end;
    loop {
        let rest = &source[cursor..];
        let c = rest.chars().next()?;
        let terminator = if rest.starts_with("/>") {
            Some((2, MarkerForm::SelfClosing))
        } else if c == '>' {
            Some((1, MarkerForm::Open))
        } else {
            None
        };
        if let Some((width, form)) = terminator {
            children.push(Token::leaf(TokenKind::Punctuation, cursor..cursor + width));
            let form = if closing { MarkerForm::Close } else { form };
            return Some(Token::branch(
                TokenKind::Marker(form),
                start..cursor + width,
                children,
            ));
        }
        let token = if c.is_whitespace() {
            let end = cursor + rest.len() - rest.trim_start().len();
            Token::leaf(TokenKind::Whitespace, cursor..end)
        } else if let Some(trait_token) = scan_trait(source, cursor, table) {
            trait_token
        } else {
            Token::leaf(TokenKind::Text, cursor..run_end(source, cursor))
        };
        cursor = token.span.end;
        children.push(token);
    }
}

/// `name=value` at `at`, with a non-empty value.
fn scan_trait(source: &str, at: usize, table: &PrecedenceTable) -> Option<Token> {
    let name_end = identifier_end(source, at, |b| b.is_ascii_lowercase())?;
    if source.as_bytes().get(name_end) != Some(&b'=') {
        return None;
    }
    let value_start = name_end + 1;
    let value_end = value_end(source, value_start);
    if value_end == value_start {
        return None;
    }
    Some(Token::branch(
        TokenKind::Trait,
        at..value_end,
        vec![
            Token::leaf(TokenKind::TraitName, at..name_end),
            Token::leaf(TokenKind::Operator, name_end..value_start),
            lex_value(source, value_start..value_end, table),
        ],
    ))
}

/// End of an identifier at `at` whose first byte satisfies `first`, then `[A-Za-z0-9]*`.
fn identifier_end(source: &str, at: usize, first: fn(&u8) -> bool) -> Option<usize> {
    let bytes = source.as_bytes();
    if !bytes.get(at).is_some_and(first) {
        return None;
    }
    let length = bytes[at + 1..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    Some(at + 1 + length)
}

/// Whether the `>` at `at` ends a marker, i.e. is not preceded by a backslash.
pub fn is_unescaped_close(source: &str, at: usize) -> bool {
    let bytes = source.as_bytes();
    bytes.get(at) == Some(&b'>') && (at == 0 || bytes[at - 1] != b'\\')
}

fn is_value_boundary(source: &str, at: usize, c: char) -> bool {
    c.is_whitespace()
        || is_unescaped_close(source, at)
        || (c == '/' && is_unescaped_close(source, at + 1))
}

fn value_end(source: &str, start: usize) -> usize {
    source[start..]
        .char_indices()
        .find(|&(offset, c)| is_value_boundary(source, start + offset, c))
        .map_or(source.len(), |(offset, _)| start + offset)
}

/// Unrecognized run inside a marker: at least one character, then up to a boundary.
fn run_end(source: &str, at: usize) -> usize {
    let first = source[at..].chars().next().map_or(0, char::len_utf8);
    value_end(source, at + first)
}
