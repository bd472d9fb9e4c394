//! Trait Value Sub-Lexer
//!
//!     Classifies a trait's raw value and, when the value is a collection, re-tokenizes its
//!     interior so nested scalars are classified individually. Elements are split on `,`
//!     (and, inside a map, on the first `:` of each entry) at nesting depth zero; every
//!     element goes through the full precedence table again and may itself be a collection.
//!
//!     The tree is built with an explicit stack of open frames instead of recursion, so deeply
//!     nested values cannot exhaust the call stack.
//!
//! Opaque Values
//!
//!     A value that fails every rule is `Opaque`. When such a value still contains balanced
//!     collection spans (say, a list whose outer bracket was never closed), those spans are
//!     classified and attached as children, with `Text` children for the rest. A collection
//!     candidate only degrades the level it fails at.

use crate::cdx::classifying::PrecedenceTable;
use crate::cdx::scanning::{balanced_end, Lexeme, Lexemes};
use crate::cdx::token::{LiteralCategory, Token, TokenKind};
use std::ops::Range;

/// Token tree for the value at `span` of `source`. Spans in the result are absolute.
pub fn lex_value(source: &str, span: Range<usize>, table: &PrecedenceTable) -> Token {
    let category = table.classify(&source[span.clone()]);
    let mut current = match expand(source, span, category, table) {
        Expansion::Leaf(token) => return token,
        Expansion::Branch(frame) => frame,
    };
    let mut parents: Vec<Frame> = Vec::new();
    loop {
        match current.pieces.next() {
            Some(Piece::Element(span, category)) => match expand(source, span, category, table) {
                Expansion::Leaf(token) => current.token.children.push(token),
                Expansion::Branch(frame) => parents.push(std::mem::replace(&mut current, frame)),
            },
            Some(piece) => current.token.children.push(piece.into_token()),
            None => match parents.pop() {
                Some(mut parent) => {
                    parent.token.children.push(current.token);
                    current = parent;
                }
                None => return current.token,
            },
        }
    }
}

/// Token tree for a standalone literal.
pub fn lex_literal(text: &str, table: &PrecedenceTable) -> Token {
    lex_value(text, 0..text.len(), table)
}

/// A collection or salvaged value whose children are still being built.
struct Frame {
    token: Token,
    pieces: std::vec::IntoIter<Piece>,
}

enum Expansion {
    Leaf(Token),
    Branch(Frame),
}

enum Piece {
    Element(Range<usize>, LiteralCategory),
    Punctuation(Range<usize>),
    Separator(Range<usize>),
    Whitespace(Range<usize>),
    Text(Range<usize>),
}

impl Piece {
    fn into_token(self) -> Token {
        match self {
            Piece::Element(span, category) => Token::leaf(TokenKind::Literal(category), span),
            Piece::Punctuation(span) => Token::leaf(TokenKind::Punctuation, span),
            Piece::Separator(span) => Token::leaf(TokenKind::Separator, span),
            Piece::Whitespace(span) => Token::leaf(TokenKind::Whitespace, span),
            Piece::Text(span) => Token::leaf(TokenKind::Text, span),
        }
    }
}

fn expand(
    source: &str,
    span: Range<usize>,
    category: LiteralCategory,
    table: &PrecedenceTable,
) -> Expansion {
    let pieces = match category.opener_len() {
        Some(opener) => collection_pieces(source, span.clone(), opener, category, table),
        None if category == LiteralCategory::Opaque => salvage_pieces(source, span.clone(), table),
        None => Vec::new(),
    };
    let token = Token::leaf(TokenKind::Literal(category), span);
    if pieces.is_empty() {
        Expansion::Leaf(token)
    } else {
        Expansion::Branch(Frame {
            token,
            pieces: pieces.into_iter(),
        })
    }
}

fn collection_pieces(
    source: &str,
    span: Range<usize>,
    opener: usize,
    category: LiteralCategory,
    table: &PrecedenceTable,
) -> Vec<Piece> {
    let interior = span.start + opener..span.end - 1;
    let mut pieces = vec![Piece::Punctuation(span.start..interior.start)];
    let is_map = category == LiteralCategory::Map;
    let mut expected: Vec<Lexeme> = Vec::new();
    let mut segment_start = interior.start;
    let mut key_done = false;
    for (lexeme, lexeme_span) in Lexemes::new(source, interior.clone()) {
        if let Some(closer) = lexeme.closer() {
            expected.push(closer);
            continue;
        }
        if lexeme.is_closer() {
            expected.pop();
            continue;
        }
        if !expected.is_empty() {
            continue;
        }
        let separates = match lexeme {
            Lexeme::Comma => true,
            Lexeme::Colon => is_map && !key_done,
            _ => false,
        };
        if separates {
            push_segment(source, segment_start..lexeme_span.start, table, &mut pieces);
            pieces.push(Piece::Separator(lexeme_span.clone()));
            key_done = lexeme == Lexeme::Colon;
            segment_start = lexeme_span.end;
        }
    }
    push_segment(source, segment_start..interior.end, table, &mut pieces);
    pieces.push(Piece::Punctuation(interior.end..span.end));
    pieces
}

/// Splits a segment between separators into surrounding whitespace and one element.
fn push_segment(
    source: &str,
    segment: Range<usize>,
    table: &PrecedenceTable,
    pieces: &mut Vec<Piece>,
) {
    let text = &source[segment.clone()];
    if text.is_empty() {
        return;
    }
    let leading = text.len() - text.trim_start().len();
    if leading == text.len() {
        pieces.push(Piece::Whitespace(segment));
        return;
    }
    let trailing = text.len() - text.trim_end().len();
    let element = segment.start + leading..segment.end - trailing;
    if leading > 0 {
        pieces.push(Piece::Whitespace(segment.start..element.start));
    }
    let category = table.classify(&source[element.clone()]);
    pieces.push(Piece::Element(element.clone(), category));
    if trailing > 0 {
        pieces.push(Piece::Whitespace(element.end..segment.end));
    }
}

/// Balanced collection spans inside an opaque value, with the remainder as text.
///
/// Returns no pieces when nothing inside classifies as a collection.
fn salvage_pieces(source: &str, span: Range<usize>, table: &PrecedenceTable) -> Vec<Piece> {
    let bounded = &source[..span.end];
    let mut pieces = Vec::new();
    let mut text_start = span.start;
    let mut lexemes = Lexemes::new(source, span.clone());
    while let Some((lexeme, lexeme_span)) = lexemes.next() {
        if !matches!(lexeme, Lexeme::OpenBracket | Lexeme::OpenParen) {
            continue;
        }
        let Some(end) = balanced_end(bounded, lexeme_span.start) else {
            continue;
        };
        let start = collection_start(source, text_start, lexeme_span.start, lexeme);
        let category = table.classify(&source[start..end]);
        if !category.is_collection() {
            continue;
        }
        if start > text_start {
            pieces.push(Piece::Text(text_start..start));
        }
        pieces.push(Piece::Element(start..end, category));
        text_start = end;
        lexemes = Lexemes::new(source, end..span.end);
    }
    if pieces.is_empty() {
        return pieces;
    }
    if text_start < span.end {
        pieces.push(Piece::Text(text_start..span.end));
    }
    tracing::trace!(
        start = span.start,
        end = span.end,
        salvaged = pieces.len(),
        "opaque value with nested collections"
    );
    pieces
}

/// Start of the collection opened at `open`, widened over a `set`/`map` prefix.
fn collection_start(source: &str, floor: usize, open: usize, lexeme: Lexeme) -> usize {
    if lexeme != Lexeme::OpenBracket || open < floor + 3 {
        return open;
    }
    match source.get(open - 3..open) {
        Some("set") | Some("map") => open - 3,
        _ => open,
    }
}
