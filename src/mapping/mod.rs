//! Label mapping for the reconciliation engine.
//!
//! This module maps the free-text labels the source systems disagree on to
//! canonical identifiers: business-unit names to catalog keys, and absence
//! names to catalog ids via an ordered fallback chain.

mod absence_id;
mod business_unit;

pub use absence_id::{MatchStage, Resolution, resolve_absence_id};
pub use business_unit::canonical_business_unit;
