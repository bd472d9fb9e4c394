//! Output formats for inspecting lexer results
//!
//! Every format serializes a [`HighlightedDocument`](crate::cdx::rendering::HighlightedDocument)
//! to a string and is looked up by name through the [`registry`]. The detokenizer is the
//! odd one out: it goes back from tokens to source and is used for round-trip checks.

pub mod detokenizer;
pub mod lines;
pub mod registry;
pub mod token_json;
pub mod treeviz;

pub use detokenizer::{detokenize, detokenize_leaves};
pub use registry::{FormatError, FormatRegistry, Formatter};
