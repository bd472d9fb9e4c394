//! Precedence tables
//!
//!     A precedence table is the ordered list of categories the classifier tries. Earlier
//!     entries win. The default order puts IRIs first (a colon-bearing token could otherwise
//!     be read as a temporal or range literal), tries the step form of a range before the
//!     plain form, orders numbers from most to least specific, and tries `set[`/`map[` before
//!     bare lists.
//!
//!     Callers may supply their own table (see the `classifier.precedence` configuration
//!     key). A table may leave categories out, which disables them.

use super::rules;
use crate::cdx::token::LiteralCategory;
use once_cell::sync::Lazy;
use std::str::FromStr;
use thiserror::Error;

/// The default classification order.
pub const DEFAULT_PRECEDENCE: [LiteralCategory; 22] = [
    LiteralCategory::Iri,
    LiteralCategory::Uuid,
    LiteralCategory::EnumToken,
    LiteralCategory::LookupToken,
    LiteralCategory::StringBacktick,
    LiteralCategory::StringQuoted,
    LiteralCategory::Character,
    LiteralCategory::Temporal,
    LiteralCategory::RangeStep,
    LiteralCategory::Range,
    LiteralCategory::NumberInfinity,
    LiteralCategory::NumberPrecision,
    LiteralCategory::NumberScientific,
    LiteralCategory::NumberDecimal,
    LiteralCategory::NumberInteger,
    LiteralCategory::ColorHex,
    LiteralCategory::ColorNamed,
    LiteralCategory::ColorFunction,
    LiteralCategory::Set,
    LiteralCategory::Map,
    LiteralCategory::List,
    LiteralCategory::Tuple,
];

static STANDARD: Lazy<PrecedenceTable> = Lazy::new(PrecedenceTable::default);

/// Errors raised when building a table from caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrecedenceError {
    #[error("unknown literal category `{0}`")]
    UnknownCategory(String),
    #[error("literal category `{0}` is ranked more than once")]
    Duplicate(LiteralCategory),
    #[error("`opaque` is the implicit fallback and cannot be ranked")]
    OpaqueRanked,
}

/// Ordered list of categories tried by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecedenceTable {
    order: Vec<LiteralCategory>,
}

impl PrecedenceTable {
    pub fn new<I>(order: I) -> Result<Self, PrecedenceError>
    where
        I: IntoIterator<Item = LiteralCategory>,
    {
        let mut table = Vec::new();
        for category in order {
            if category == LiteralCategory::Opaque {
                return Err(PrecedenceError::OpaqueRanked);
            }
            if table.contains(&category) {
                return Err(PrecedenceError::Duplicate(category));
            }
            table.push(category);
        }
        Ok(PrecedenceTable { order: table })
    }

    /// Build a table from kebab-case category names (`number-integer`, `set`, ...).
    pub fn from_names<I, S>(names: I) -> Result<Self, PrecedenceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let categories = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                LiteralCategory::from_str(name)
                    .map_err(|_| PrecedenceError::UnknownCategory(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories)
    }

    /// Shared instance of the default table.
    pub fn standard() -> &'static PrecedenceTable {
        &STANDARD
    }

    pub fn categories(&self) -> &[LiteralCategory] {
        &self.order
    }

    /// Position of `category` in the table, `None` when it is not ranked.
    pub fn rank(&self, category: LiteralCategory) -> Option<usize> {
        self.order.iter().position(|c| *c == category)
    }

    /// First ranked category whose rule matches the whole of `text`, or `Opaque`.
    pub fn classify(&self, text: &str) -> LiteralCategory {
        self.order
            .iter()
            .copied()
            .find(|category| rules::matches(*category, text))
            .unwrap_or(LiteralCategory::Opaque)
    }
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        PrecedenceTable {
            order: DEFAULT_PRECEDENCE.to_vec(),
        }
    }
}
