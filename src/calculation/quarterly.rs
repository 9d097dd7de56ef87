//! Quarterly grant calculation.
//!
//! Some absence types are granted per calendar quarter rather than accrued
//! continuously; the grant covers each quarter remaining after the quarter
//! the employee's accrual year starts in.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// The calendar quarter (1-4) a date falls in.
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month().div_ceil(3)
}

/// The number of full quarters remaining in the year after the year-start
/// date's quarter.
pub fn remaining_quarters(year_start: NaiveDate) -> u32 {
    4u32.saturating_sub(quarter_of(year_start))
}

/// The total grant: one `per_quarter` amount for each remaining quarter.
pub fn quarterly_grant(per_quarter: Decimal, year_start: NaiveDate) -> Decimal {
    Decimal::from(remaining_quarters(year_start)) * per_quarter
}
