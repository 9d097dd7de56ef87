//! Reconciliation of normalized HR and WFM rows.
//!
//! The join pairs each HR expectation with the WFM account it should
//! correspond to; the builder recalculates correct values per pair and
//! assembles the validation report.

mod builder;
mod join;

pub use builder::{build_report, build_row};
pub use join::join_rows;
