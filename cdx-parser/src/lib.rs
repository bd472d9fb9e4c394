//! # cdx
//!
//! Lexical analysis for CDX, a markup notation built from concept markers
//! (`<Concept trait=value>`, `</Concept>`, `<Concept/>`), line-anchored `[annotations]`,
//! and indented prose.
//!
//! File Layout
//!
//! The crate is organized bottom up, each layer only depending on the ones before it:
//!
//!     src/cdx
//!       ├── token         Token trees and category tags
//!       ├── scanning      Delimiter matching over raw lexemes
//!       ├── classifying   Literal classification and precedence
//!       ├── lexing        Structural tokenizer, trait values, content lines
//!       ├── transforms    Composable stages and the standard pipelines
//!       ├── loader        Entry point for files and strings
//!       ├── rendering     Renderer seam over a highlighted document
//!       └── formats       Debug output (tree visualization, detokenizer)
//!
//! Everything is pure and synchronous. Nothing in the lexing layers returns an error:
//! malformed input degrades to text and opaque tokens.
//!
//! For testing helpers, see the [testing module](cdx::testing).

pub mod cdx;
