//! Treeviz formatter for token trees
//!
//! One line per token, nesting drawn with box connectors:
//!
//!   ⧉ document (3 tokens)
//!   ├─ ◇ marker:open <Foo bar="baz"> 0..15
//!   │ ├─ · punctuation < 0..1
//!   │ ├─ ⊤ concept-name Foo 1..4
//!   ...
//!
//! Labels are the token's source text with control characters escaped, truncated to
//! `max_label_chars` characters. Spans are byte offsets.
//!
//! Icons
//!     Structure:
//!         Marker: ◇
//!         Annotation: '"'
//!         ConceptName: ⊤
//!         Trait: ≔
//!         TraitName: ∴
//!         Operator: =
//!     Spans:
//!         Text: ◦
//!         Whitespace: ␣
//!         Newline: ↵
//!         Punctuation: ·
//!         Separator: ,
//!     Literals:
//!         Collections: ☰
//!         Numbers: #
//!         Colors: ◐
//!         Opaque: ?
//!         Other scalars: ○

use super::registry::{FormatError, Formatter};
use crate::cdx::rendering::HighlightedDocument;
use crate::cdx::token::{LiteralCategory, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreevizOptions {
    pub max_label_chars: usize,
    pub show_spans: bool,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        TreevizOptions {
            max_label_chars: 30,
            show_spans: true,
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn get_icon(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Marker(_) => "◇",
        TokenKind::Annotation => "\"",
        TokenKind::ConceptName => "⊤",
        TokenKind::Trait => "≔",
        TokenKind::TraitName => "∴",
        TokenKind::Operator => "=",
        TokenKind::Text => "◦",
        TokenKind::Whitespace => "␣",
        TokenKind::Newline => "↵",
        TokenKind::Punctuation => "·",
        TokenKind::Separator => ",",
        TokenKind::Literal(LiteralCategory::Opaque) => "?",
        TokenKind::Literal(category) if category.is_collection() => "☰",
        TokenKind::Literal(category) if category.is_number() => "#",
        TokenKind::Literal(category) if category.is_color() => "◐",
        TokenKind::Literal(_) => "○",
    }
}

fn kind_label(kind: TokenKind) -> String {
    match kind {
        TokenKind::Marker(form) => format!("marker:{}", form.name()),
        kind => kind.name().to_string(),
    }
}

fn format_line(source: &str, token: &Token, options: &TreevizOptions) -> String {
    let label = truncate(&escape(token.text(source)), options.max_label_chars);
    let mut line = format!("{} {} {}", get_icon(token.kind), kind_label(token.kind), label);
    if options.show_spans {
        line.push_str(&format!(" {}..{}", token.span.start, token.span.end));
    }
    line
}

/// Renders `tokens` as a tree. Walks with an explicit stack, so deep values are fine.
pub fn to_treeviz_str(source: &str, tokens: &[Token], options: &TreevizOptions) -> String {
    let mut output = format!("⧉ document ({} tokens)\n", tokens.len());
    let mut stack: Vec<(&Token, String, bool)> = Vec::new();
    push_children(&mut stack, tokens, "");
    while let Some((token, prefix, is_last)) = stack.pop() {
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!(
            "{}{} {}\n",
            prefix,
            connector,
            format_line(source, token, options)
        ));
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        push_children(&mut stack, &token.children, &child_prefix);
    }
    output
}

fn push_children<'t>(
    stack: &mut Vec<(&'t Token, String, bool)>,
    children: &'t [Token],
    prefix: &str,
) {
    let last = children.len().saturating_sub(1);
    for (index, child) in children.iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), index == last));
    }
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Default)]
pub struct TreevizFormatter {
    options: TreevizOptions,
}

impl TreevizFormatter {
    pub fn new(options: TreevizOptions) -> Self {
        TreevizFormatter { options }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Token trees drawn one token per line with Unicode icons"
    }

    fn serialize(&self, document: &HighlightedDocument) -> Result<String, FormatError> {
        Ok(to_treeviz_str(
            document.source(),
            document.tokens(),
            &self.options,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdx::lexing::tokenize;

    #[test]
    fn test_marker_tree() {
        let source = "<Foo bar=[1,\"x\"]>\n";
        let output = to_treeviz_str(source, &tokenize(source), &TreevizOptions::default());
        insta::assert_snapshot!(output.trim_end(), @r#"
        ⧉ document (2 tokens)
        ├─ ◇ marker:open <Foo bar=[1,"x"]> 0..17
        │ ├─ · punctuation < 0..1
        │ ├─ ⊤ concept-name Foo 1..4
        │ ├─ ␣ whitespace   4..5
        │ ├─ ≔ trait bar=[1,"x"] 5..16
        │ │ ├─ ∴ trait-name bar 5..8
        │ │ ├─ = operator = 8..9
        │ │ └─ ☰ list [1,"x"] 9..16
        │ │   ├─ · punctuation [ 9..10
        │ │   ├─ # number-integer 1 10..11
        │ │   ├─ , separator , 11..12
        │ │   ├─ ○ string-quoted "x" 12..15
        │ │   └─ · punctuation ] 15..16
        │ └─ · punctuation > 16..17
        └─ ↵ newline \n 17..18
        "#);
    }

    #[test]
    fn test_truncation_and_hidden_spans() {
        let source = "\tA long line of prose that keeps going";
        let options = TreevizOptions {
            max_label_chars: 10,
            show_spans: false,
        };
        let output = to_treeviz_str(source, &tokenize(source), &options);
        assert_eq!(
            output,
            "⧉ document (2 tokens)\n├─ ␣ whitespace \\t\n└─ ◦ text A long lin...\n"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(
            to_treeviz_str("", &[], &TreevizOptions::default()),
            "⧉ document (0 tokens)\n"
        );
    }
}
