//! Structural tokenizer
//!
//!     Splits a whole document into annotations, markers, text, whitespace and newlines in
//!     one forward scan. The top-level tokens tile the source: concatenating their spans in
//!     order reproduces it exactly.
//!
//!     Annotations are only recognized at the start of a line (after indentation). Markers
//!     are recognized anywhere. A `[` or `<` that does not complete its construct is text.
//!
//!     A marker can only complete at an unescaped `>`, so the scan keeps the offset of the
//!     next one and skips marker scanning outright once none is left. Each failed `<` then
//!     costs a constant amount of work and the whole scan stays linear.

use super::markers::{is_unescaped_close, scan_marker};
use crate::cdx::classifying::PrecedenceTable;
use crate::cdx::scanning::bracket_end;
use crate::cdx::token::{Token, TokenKind};

pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, PrecedenceTable::standard())
}

pub fn tokenize_with(source: &str, table: &PrecedenceTable) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    let mut line_start = true;
    let mut next_close = next_unescaped_close(source, 0);
    while cursor < source.len() {
        let rest = &source[cursor..];
        if let Some(width) = newline_width(rest) {
            tokens.push(Token::leaf(TokenKind::Newline, cursor..cursor + width));
            cursor += width;
            line_start = true;
            continue;
        }
        if line_start {
            let indent = indent_width(rest);
            if indent > 0 {
                tokens.push(Token::leaf(TokenKind::Whitespace, cursor..cursor + indent));
                cursor += indent;
                continue;
            }
            line_start = false;
            if rest.starts_with('[') {
                if let Some(end) = bracket_end(source, cursor) {
                    tokens.push(Token::leaf(TokenKind::Annotation, cursor..end));
                    cursor = end;
                    continue;
                }
                tracing::trace!(offset = cursor, "unterminated annotation, emitting text");
            }
        }
        if rest.starts_with('<') {
            if next_close.is_some_and(|close| close < cursor) {
                next_close = next_unescaped_close(source, cursor);
            }
            if next_close.is_some() {
                if let Some(marker) = scan_marker(source, cursor, table) {
                    cursor = marker.span.end;
                    tokens.push(marker);
                    continue;
                }
            }
            tracing::trace!(offset = cursor, "incomplete marker, emitting text");
        }
        let end = text_end(source, cursor);
        tokens.push(Token::leaf(TokenKind::Text, cursor..end));
        cursor = end;
    }
    tokens
}

fn next_unescaped_close(source: &str, from: usize) -> Option<usize> {
    source.as_bytes()[from..]
        .iter()
        .enumerate()
        .filter(|&(_, &byte)| byte == b'>')
        .map(|(offset, _)| from + offset)
        .find(|&at| is_unescaped_close(source, at))
}

fn newline_width(rest: &str) -> Option<usize> {
    if rest.starts_with('\n') {
        Some(1)
    } else if rest.starts_with("\r\n") {
        Some(2)
    } else {
        None
    }
}

fn indent_width(rest: &str) -> usize {
    rest.char_indices()
        .find(|&(_, c)| !c.is_whitespace() || c == '\n' || c == '\r')
        .map_or(rest.len(), |(offset, _)| offset)
}

/// Text runs take at least one character, then stop before a newline or `<`.
fn text_end(source: &str, at: usize) -> usize {
    let mut end = at;
    for (offset, c) in source[at..].char_indices() {
        let here = at + offset;
        if offset > 0 && (c == '<' || newline_width(&source[here..]).is_some()) {
            break;
        }
        end = here + c.len_utf8();
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdx::testing::{assert_tiles, kinds};
    use crate::cdx::token::MarkerForm;

    #[test]
    fn test_marker_then_text() {
        let source = "<Foo bar=\"baz\">hello</Foo>";
        let tokens = tokenize(source);
        assert_tiles(source, &tokens);
        assert_eq!(kinds(&tokens), vec!["marker", "text", "marker"]);
        assert_eq!(tokens[0].marker_form(), Some(MarkerForm::Open));
        assert_eq!(tokens[1].text(source), "hello");
        assert_eq!(tokens[2].marker_form(), Some(MarkerForm::Close));
    }

    #[test]
    fn test_annotation_at_line_start() {
        let source = "[Note: a [nested] remark]\ntext";
        let tokens = tokenize(source);
        assert_tiles(source, &tokens);
        assert_eq!(kinds(&tokens), vec!["annotation", "newline", "text"]);
        assert_eq!(tokens[0].text(source), "[Note: a [nested] remark]");
    }

    #[test]
    fn test_indented_annotation() {
        let source = "\t[remark]";
        let tokens = tokenize(source);
        assert_eq!(kinds(&tokens), vec!["whitespace", "annotation"]);
    }

    #[test]
    fn test_bracket_mid_line_is_text() {
        let source = "see [this]";
        let tokens = tokenize(source);
        assert_eq!(kinds(&tokens), vec!["text"]);
    }

    #[test]
    fn test_annotation_spans_lines() {
        let source = "[first\nsecond]\n";
        let tokens = tokenize(source);
        assert_tiles(source, &tokens);
        assert_eq!(kinds(&tokens), vec!["annotation", "newline"]);
    }

    #[test]
    fn test_unterminated_annotation_is_text() {
        let source = "[never closed\n<A>";
        let tokens = tokenize(source);
        assert_tiles(source, &tokens);
        assert_eq!(kinds(&tokens), vec!["text", "newline", "marker"]);
    }

    #[test]
    fn test_incomplete_marker_is_text() {
        let source = "a < b <c> <D";
        let tokens = tokenize(source);
        assert_tiles(source, &tokens);
        assert_eq!(kinds(&tokens), vec!["text", "text", "text", "text"]);
        let texts: Vec<_> = tokens.iter().map(|t| t.text(source)).collect();
        assert_eq!(texts, vec!["a ", "< b ", "<c> ", "<D"]);
    }

    #[test]
    fn test_crlf_and_lone_cr() {
        let source = "a\r\nb\rc\n";
        let tokens = tokenize(source);
        assert_tiles(source, &tokens);
        assert_eq!(kinds(&tokens), vec!["text", "newline", "text", "newline"]);
        assert_eq!(tokens[1].text(source), "\r\n");
        assert_eq!(tokens[2].text(source), "b\rc");
    }

    #[test]
    fn test_stray_quote_in_value_keeps_following_lines() {
        let source = "<A note=\"oops>\n\tSome prose with \"quoted\" text.\n</A>";
        let tokens = tokenize(source);
        assert_tiles(source, &tokens);
        assert_eq!(
            kinds(&tokens),
            vec!["marker", "newline", "whitespace", "text", "newline", "marker"]
        );
        assert_eq!(tokens[0].text(source), "<A note=\"oops>");
        assert_eq!(tokens[3].text(source), "Some prose with \"quoted\" text.");
        assert_eq!(tokens[5].marker_form(), Some(MarkerForm::Close));
    }

    #[test]
    fn test_marker_ends_at_first_close() {
        let source = "<A t=\"x>y\">";
        let tokens = tokenize(source);
        assert_tiles(source, &tokens);
        assert_eq!(kinds(&tokens), vec!["marker", "text"]);
        assert_eq!(tokens[0].span, 0..8);
        assert_eq!(tokens[1].text(source), "y\">");
    }

    #[test]
    fn test_escaped_close_only_leaves_text() {
        let source = "<A b=\\> <B";
        let tokens = tokenize(source);
        assert_tiles(source, &tokens);
        assert_eq!(kinds(&tokens), vec!["text", "text"]);
    }

    #[test]
    fn test_unterminated_markers_scan_in_linear_time() {
        let source = "<A b=1 ".repeat(20_000);
        let started = std::time::Instant::now();
        let tokens = tokenize(&source);
        assert_tiles(&source, &tokens);
        assert_eq!(tokens.len(), 20_000);
        assert!(started.elapsed() < std::time::Duration::from_secs(10));

        let closed = format!("{}>", source);
        let tokens = tokenize(&closed);
        assert_tiles(&closed, &tokens);
        assert_eq!(kinds(&tokens), vec!["marker"]);
        assert_eq!(tokens[0].traits().count(), 20_000);
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_multibyte_text() {
        let source = "\tdéjà vu <Ünïcode>";
        let tokens = tokenize(source);
        assert_tiles(source, &tokens);
        assert_eq!(kinds(&tokens), vec!["whitespace", "text", "text"]);
    }
}
