//! Individual transformation stages
//!
//! Each stage implements [`Runnable`](super::Runnable) for both `String` and `&str` input.

pub mod highlighting;
pub mod line_classification;
pub mod tokenization;

pub use highlighting::Highlighting;
pub use line_classification::LineClassification;
pub use tokenization::StructuralTokenization;
