//! Literal Classifier
//!
//!     Maps a maximal non-whitespace substring to exactly one [`LiteralCategory`]. The match is
//!     anchored: a category only applies when its rule matches the whole substring.
//!
//! Precedence
//!
//!     Rules are tried in the order held by a [`PrecedenceTable`] and the first match wins.
//!     The order is an explicit, tested list ([`DEFAULT_PRECEDENCE`]), not whatever order the
//!     rules happen to be declared in. `Opaque` is never ranked: it is what classification
//!     returns when no ranked rule matches, so classification always terminates and never
//!     fails.
//!
//! Rules
//!
//!     Scalar categories are regex rules (see [rules]). Bracket-delimited categories (set,
//!     map, list, tuple) use the depth-counting scanner in
//!     [scanning](crate::cdx::scanning), so nesting depth is unbounded and an unbalanced
//!     candidate simply does not match.
//!
//!     A leading `-` is only ever part of a number, infinity or range endpoint rule.

pub mod precedence;
pub mod rules;

pub use precedence::{PrecedenceError, PrecedenceTable, DEFAULT_PRECEDENCE};

use crate::cdx::token::LiteralCategory;

/// Classify `text` with the default precedence table.
pub fn classify(text: &str) -> LiteralCategory {
    PrecedenceTable::standard().classify(text)
}
