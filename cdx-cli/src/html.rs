//! Prism-compatible HTML output
//!
//! Emits the same `<span class="token ...">` markup the Prism grammar for CDX produces, so
//! existing Prism themes style the output unchanged. Lines flagged as content lines are
//! wrapped in `<span class="token content">`.

use cdx_parser::cdx::formats::{FormatError, Formatter};
use cdx_parser::cdx::rendering::{HighlightedDocument, Renderer};
use cdx_parser::cdx::token::{LiteralCategory, Token, TokenKind};

/// Languages accepted for the `language-*` class on the code element.
pub const LANGUAGES: [&str; 2] = ["cdx", "codex"];

#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    language: String,
}

impl HtmlRenderer {
    pub fn new(language: impl Into<String>) -> Self {
        HtmlRenderer {
            language: language.into(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("cdx")
    }
}

enum Step<'t> {
    Enter(&'t Token, bool),
    Exit(usize),
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render(&mut self, document: &HighlightedDocument) -> String {
        let source = document.source();
        let tokens = document.tokens();
        let (opens, closes) = content_wrappers(document);

        let mut body = String::new();
        for (index, token) in tokens.iter().enumerate() {
            if closes[index] {
                body.push_str("</span>");
            }
            if opens[index] {
                body.push_str("<span class=\"token content\">");
            }
            render_token(&mut body, source, token);
        }
        if closes[tokens.len()] {
            body.push_str("</span>");
        }

        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            self.language, body
        )
    }
}

/// Where content wrappers open and close, as positions in the top-level token list.
///
/// `opens[i]` opens a wrapper before token `i`; `closes[i]` closes one before token `i`, with
/// `closes[len]` closing after the last token.
fn content_wrappers(document: &HighlightedDocument) -> (Vec<bool>, Vec<bool>) {
    let tokens = document.tokens();
    let starts: Vec<usize> = tokens.iter().map(|token| token.span.start).collect();
    let mut opens = vec![false; tokens.len()];
    let mut closes = vec![false; tokens.len() + 1];

    for line in document.content_line_spans() {
        // A line starting inside a multi-line token cannot be wrapped without breaking nesting
        let Ok(first) = starts.binary_search(&line.start) else {
            continue;
        };
        let after = starts.partition_point(|&start| start < line.end);
        opens[first] = true;
        closes[after] = true;
    }
    (opens, closes)
}

fn render_token(out: &mut String, source: &str, root: &Token) {
    let mut stack = vec![Step::Enter(root, false)];
    while let Some(step) = stack.pop() {
        let (token, is_value) = match step {
            Step::Exit(spans) => {
                close_spans(out, spans);
                continue;
            }
            Step::Enter(token, is_value) => (token, is_value),
        };

        let mut spans = 0;
        if is_value {
            out.push_str("<span class=\"token value\">");
            spans += 1;
        }
        if let Some(class) = token_class(token.kind) {
            out.push_str(&format!("<span class=\"token {}\">", class));
            spans += 1;
        }

        if token.children.is_empty() {
            out.push_str(&escape(token.text(source)));
            close_spans(out, spans);
            continue;
        }

        stack.push(Step::Exit(spans));
        let in_trait = token.kind == TokenKind::Trait;
        for child in token.children.iter().rev() {
            stack.push(Step::Enter(child, in_trait && child.literal().is_some()));
        }
    }
}

fn close_spans(out: &mut String, spans: usize) {
    for _ in 0..spans {
        out.push_str("</span>");
    }
}

/// Prism class for a token kind. Plain text, whitespace and opaque values carry none.
fn token_class(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Annotation => Some("annotation"),
        TokenKind::Marker(_) => Some("marker"),
        TokenKind::Punctuation | TokenKind::Separator => Some("punctuation"),
        TokenKind::ConceptName => Some("concept-name"),
        TokenKind::Trait => Some("trait"),
        TokenKind::TraitName => Some("trait-name"),
        TokenKind::Operator => Some("operator"),
        TokenKind::Literal(LiteralCategory::StringQuoted) => Some("string"),
        TokenKind::Literal(LiteralCategory::Opaque) => None,
        TokenKind::Literal(category) => Some(category.name()),
        TokenKind::Text | TokenKind::Whitespace | TokenKind::Newline => None,
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Registers HTML output with a [`FormatRegistry`](cdx_parser::cdx::formats::FormatRegistry).
pub struct HtmlFormatter {
    language: String,
}

impl HtmlFormatter {
    pub fn new(language: impl Into<String>) -> Self {
        HtmlFormatter {
            language: language.into(),
        }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Prism-compatible highlighted HTML"
    }

    fn serialize(&self, document: &HighlightedDocument) -> Result<String, FormatError> {
        Ok(HtmlRenderer::new(self.language.clone()).render(document))
    }
}
