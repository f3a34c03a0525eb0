//! LabelSense Pipeline — aggregation of per-item classifications into a
//! product verdict, and the end-to-end analysis flow over translated text.

pub mod aggregate;
pub mod analyzer;

pub use aggregate::{aggregate, NO_INGREDIENTS_SUMMARY, NO_MATCH_SUMMARY};
pub use analyzer::Analyzer;
