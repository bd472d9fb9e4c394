//! Token types shared across the classifier, the tokenizers, and tooling.
//!
//!     Every token is a category tag plus a byte range into the source, with an ordered list
//!     of children. Tokens never own text: use [`Token::text`] with the source they were
//!     produced from.
//!
//! Token Layers
//!
//!     Structural Tokens:
//!         Annotation, Marker, Text, Whitespace and Newline. These are the top-level tokens
//!         produced by the structural tokenizer, and together they tile the whole document.
//!         See [structural](crate::cdx::lexing::structural).
//!
//!     Marker Parts:
//!         Punctuation, ConceptName, Trait, TraitName and Operator. They only appear as
//!         children of a Marker (or of a Trait).
//!
//!     Literal Tokens:
//!         A trait value is a tree rooted at one [`LiteralCategory`]. Collections (set, map,
//!         list, tuple) carry their punctuation, separators and elements as children. See
//!         [trait_values](crate::cdx::lexing::trait_values).

pub mod category;
pub mod tree;

pub use category::{LiteralCategory, MarkerForm, TokenKind};
pub use tree::{Token, TraitView, Walk};
