//! Delimiter scanning
//!
//!     Bracket-delimited constructs (set, map, list, tuple, annotation) are matched with an
//!     explicit depth-counting scan, never with a fixed-depth pattern. The scan keeps a stack
//!     of the closing delimiters it expects; a construct matches when the stack empties on a
//!     closer of the right kind, and fails on the first mismatched closer or at end of input.
//!     Nesting depth is bounded only by the input size.
//!
//!     Collection scans run over [`Lexeme`]s produced by logos. String, backtick and character
//!     literals are single lexemes, so brackets inside them never count. A quote that does not
//!     start a complete literal is a [`Lexeme::Stray`] and counts as plain text.
//!
//!     Annotation scans only count square brackets and are not literal-aware: annotation
//!     bodies are free prose where quotes and apostrophes are not reliable delimiters.

use logos::Logos;
use std::ops::Range;

/// Raw lexemes used for delimiter matching and collection splitting.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    Quoted,
    #[regex(r"`[^`]*`")]
    Backtick,
    #[regex(r"'([^'\\]|\\(.|\n))'")]
    Character,
    #[token("\"")]
    #[token("'")]
    #[token("`")]
    Stray,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[regex(r#"[^\[\](){},:"'`]+"#)]
    Run,
}

impl Lexeme {
    /// The closer expected after this opener.
    pub fn closer(self) -> Option<Lexeme> {
        match self {
            Lexeme::OpenBracket => Some(Lexeme::CloseBracket),
            Lexeme::OpenParen => Some(Lexeme::CloseParen),
            Lexeme::OpenBrace => Some(Lexeme::CloseBrace),
            _ => None,
        }
    }

    pub fn is_closer(self) -> bool {
        matches!(
            self,
            Lexeme::CloseBracket | Lexeme::CloseParen | Lexeme::CloseBrace
        )
    }
}

/// Iterator over the lexemes of a source range, with absolute byte ranges.
///
/// Input logos cannot match (an unterminated literal) is reported as a one-character
/// [`Lexeme::Stray`] and lexing resumes on the next character, so the iterator always
/// tiles the range.
pub struct Lexemes<'s> {
    source: &'s str,
    end: usize,
    offset: usize,
    inner: logos::Lexer<'s, Lexeme>,
}

impl<'s> Lexemes<'s> {
    pub fn new(source: &'s str, range: Range<usize>) -> Self {
        Lexemes {
            source,
            end: range.end,
            offset: range.start,
            inner: Lexeme::lexer(&source[range]),
        }
    }
}

impl<'s> Iterator for Lexemes<'s> {
    type Item = (Lexeme, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let start = self.offset + span.start;
        match result {
            Ok(lexeme) => Some((lexeme, start..self.offset + span.end)),
            Err(()) => {
                let width = self.source[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                let resume = start + width;
                self.offset = resume;
                self.inner = Lexeme::lexer(&self.source[resume..self.end]);
                Some((Lexeme::Stray, start..resume))
            }
        }
    }
}

/// End (exclusive) of the balanced group opened at `open`.
///
/// `open` must point at `[`, `(` or `{`. Returns `None` when the opener is missing, when a
/// closer of the wrong kind shows up first, or when input ends before the group closes.
pub fn balanced_end(source: &str, open: usize) -> Option<usize> {
    let mut lexemes = Lexemes::new(source, open..source.len());
    let (first, _) = lexemes.next()?;
    let mut expected = vec![first.closer()?];
    for (lexeme, span) in lexemes {
        if let Some(closer) = lexeme.closer() {
            expected.push(closer);
        } else if lexeme.is_closer() {
            if expected.pop() != Some(lexeme) {
                return None;
            }
            if expected.is_empty() {
                return Some(span.end);
            }
        }
    }
    None
}

/// End (exclusive) of the square-bracket group opened at `open`, counting only `[` and `]`.
pub fn bracket_end(source: &str, open: usize) -> Option<usize> {
    if source.as_bytes().get(open) != Some(&b'[') {
        return None;
    }
    let mut depth = 0usize;
    for (offset, byte) in source.bytes().enumerate().skip(open) {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}
