//! Balance and accrual calculation logic.
//!
//! This module recomputes the "correct" balance-in and accrued values for a
//! joined row from the declarative rule table: year-start derivation from
//! the hire date, day- and week-based proration, quarterly grants, and the
//! rule-matching calculator that ties them together.

mod calculator;
mod proration;
mod quarterly;
mod year_start;

pub use calculator::{CorrectValues, calculate_correct_values};
pub use proration::{calendar_day_ratio, iso_week_ratio, prorated};
pub use quarterly::{quarter_of, quarterly_grant, remaining_quarters};
pub use year_start::accrual_year_start;
