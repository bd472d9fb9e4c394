//! Rendering seam
//!
//!     A [`HighlightedDocument`] bundles everything a renderer needs: the source, its
//!     top-level token trees, and one content-line flag per line. Renderers implement
//!     [`Renderer`] and turn that into whatever output they produce (HTML, terminal colors,
//!     editor decorations). This crate ships no renderer of its own.

use crate::cdx::token::Token;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedDocument {
    source: String,
    tokens: Vec<Token>,
    content_lines: Vec<bool>,
}

impl HighlightedDocument {
    pub fn new(source: String, tokens: Vec<Token>, content_lines: Vec<bool>) -> Self {
        HighlightedDocument {
            source,
            tokens,
            content_lines,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn content_lines(&self) -> &[bool] {
        &self.content_lines
    }

    /// Byte range of every line, without its terminator. Lines split like [`str::lines`].
    pub fn line_spans(&self) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut start = 0;
        for segment in self.source.split_inclusive('\n') {
            let body = segment
                .strip_suffix('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .unwrap_or(segment);
            spans.push(start..start + body.len());
            start += segment.len();
        }
        spans
    }

    /// Byte ranges of the lines flagged as content lines.
    pub fn content_line_spans(&self) -> Vec<Range<usize>> {
        self.line_spans()
            .into_iter()
            .zip(&self.content_lines)
            .filter(|(_, is_content)| **is_content)
            .map(|(span, _)| span)
            .collect()
    }
}

pub trait Renderer {
    type Output;

    fn render(&mut self, document: &HighlightedDocument) -> Self::Output;
}
