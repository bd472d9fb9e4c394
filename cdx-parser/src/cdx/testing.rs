//! Testing utilities for token trees
//!
//!     Token trees carry byte spans, not text, so most assertions come down to span
//!     arithmetic. The helpers here check the two structural guarantees every token tree
//!     must keep, and render trees compactly enough to compare in a single `assert_eq!`:
//!
//!         1. Top-level tokens tile the source ([assert_tiles]).
//!         2. Children tile their parent ([assert_tree_integrity]).
//!
//!     Sample documents live under `samples/` at the crate root and are loaded with
//!     [sample]. Prefer them over inline strings for anything longer than a line.

use crate::cdx::token::{Token, TokenKind};
use std::fs;
use std::path::PathBuf;

/// Asserts that `tokens` cover `source` in order, without gaps or overlaps, and that every
/// tree is internally consistent.
pub fn assert_tiles(source: &str, tokens: &[Token]) {
    let mut expected_start = 0;
    for (index, token) in tokens.iter().enumerate() {
        assert_eq!(
            token.span.start, expected_start,
            "token {} ({}) starts at {}, expected {}",
            index,
            token.kind.name(),
            token.span.start,
            expected_start
        );
        assert!(!token.is_empty(), "token {} is empty", index);
        assert_tree_integrity(token);
        expected_start = token.span.end;
    }
    assert_eq!(
        expected_start,
        source.len(),
        "tokens end at {}, source is {} bytes",
        expected_start,
        source.len()
    );
}

/// Asserts that the children of every container in `token` tile it exactly.
pub fn assert_tree_integrity(token: &Token) {
    for node in token.walk() {
        if node.children.is_empty() {
            continue;
        }
        let mut cursor = node.span.start;
        for child in &node.children {
            assert_eq!(
                child.span.start,
                cursor,
                "{} child {} at {:?} leaves a gap or overlaps in {:?}",
                node.kind.name(),
                child.kind.name(),
                child.span,
                node.span
            );
            assert!(child.span.end > child.span.start, "empty {}", child.kind.name());
            cursor = child.span.end;
        }
        assert_eq!(
            cursor,
            node.span.end,
            "children of {} end at {}, parent ends at {}",
            node.kind.name(),
            cursor,
            node.span.end
        );
    }
}

/// Kind names of `tokens`, top level only.
pub fn kinds(tokens: &[Token]) -> Vec<&'static str> {
    tokens.iter().map(|token| token.kind.name()).collect()
}

/// Compact rendering of a value tree: `list(number-integer map(string-quoted iri))`.
///
/// Punctuation, separators and whitespace are left out.
pub fn outline(source: &str, token: &Token) -> String {
    let mut out = String::new();
    write_outline(source, token, &mut out);
    out
}

fn write_outline(source: &str, token: &Token, out: &mut String) {
    out.push_str(token.kind.name());
    let shown: Vec<&Token> = token
        .children
        .iter()
        .filter(|child| {
            !matches!(
                child.kind,
                TokenKind::Punctuation | TokenKind::Separator | TokenKind::Whitespace
            )
        })
        .collect();
    if shown.is_empty() {
        return;
    }
    out.push('(');
    for (index, child) in shown.into_iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        write_outline(source, child, out);
    }
    out.push(')');
}

/// Path of a sample document under `samples/`.
pub fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

/// Contents of a sample document. Panics when the sample is missing.
pub fn sample(name: &str) -> String {
    let path = sample_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read sample {}: {}", path.display(), err))
}
