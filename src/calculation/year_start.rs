//! Accrual year-start derivation.

use chrono::{Datelike, NaiveDate};

/// Determines the date accrual starts counting from for the current year.
///
/// Employees hired before the `as_of` year accrue from January 1; employees
/// hired during the `as_of` year accrue from their hire date. An unknown
/// reference date, or one in a future year, also falls back to January 1.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_recon::calculation::accrual_year_start;
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let hired_this_year = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
/// assert_eq!(accrual_year_start(Some(hired_this_year), as_of), hired_this_year);
///
/// let hired_earlier = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
/// assert_eq!(
///     accrual_year_start(Some(hired_earlier), as_of),
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
/// );
/// ```
pub fn accrual_year_start(reference: Option<NaiveDate>, as_of: NaiveDate) -> NaiveDate {
    let january_first = NaiveDate::from_ymd_opt(as_of.year(), 1, 1).unwrap_or(as_of);
    match reference {
        Some(date) if date.year() == as_of.year() => date,
        _ => january_first,
    }
}
