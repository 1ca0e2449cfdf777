//! Stratigraphic column summaries.
//!
//! Purpose
//! - Order a list of layers by age (youngest first) and total their thickness
//!   overall and per lithology.
//!
//! Ordering
//! - Dated layers first, by age in Ma: numeric ages, and named periods that
//!   resolve through the built-in period table (`Jurassic` → 201.4 Ma).
//! - Then layers whose age is a label outside the table, by label.
//! - Undated layers last. The sort is stable, so ties keep input order.
//!
//! Code cross-refs: `types::{Age, StratigraphicLayer}`, `summary::summarize_stratigraphy`

mod summary;
mod types;

pub use summary::{summarize_stratigraphy, LayerDescription, StratigraphicSummary};
pub use types::{period_base_ma, Age, StratigraphicLayer, PERIODS};
