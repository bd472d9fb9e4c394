//! Lexing
//!
//!     Turns CDX source into token trees. The layers, bottom up:
//!
//!     - [`trait_values`]: classifies a trait value and re-tokenizes collection interiors.
//!     - [`markers`]: recognizes `<Concept ...>` markers and their traits.
//!     - [`structural`]: splits a whole document into annotations, markers and text.
//!     - [`line_classification`]: flags content lines, independent of the token trees.
//!
//!     Every layer is total. Malformed input degrades to `Text` or `Opaque` tokens and never
//!     produces an error.

pub mod line_classification;
pub mod markers;
pub mod options;
pub mod structural;
pub mod trait_values;

pub use line_classification::{classify_lines, is_content_line, ContentLineClassifier};
pub use markers::scan_marker;
pub use options::{LexOptions, OptionsError, DEFAULT_INDENT_UNIT};
pub use structural::{tokenize, tokenize_with};
pub use trait_values::{lex_literal, lex_value};
