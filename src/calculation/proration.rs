//! Proration ratios for partial-year employment.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// The fraction of the `as_of` calendar year remaining from the year-start
/// date, inclusive of both the year-start date and December 31.
///
/// A year-start of January 1 yields exactly 1.
pub fn calendar_day_ratio(year_start: NaiveDate, as_of: NaiveDate) -> Decimal {
    let year = as_of.year();
    let Some(january_first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Decimal::ZERO;
    };
    let Some(december_last) = NaiveDate::from_ymd_opt(year, 12, 31) else {
        return Decimal::ZERO;
    };

    let total_days = (december_last - january_first).num_days() + 1;
    let remaining_days = ((december_last - year_start).num_days() + 1).max(0);

    Decimal::from(remaining_days) / Decimal::from(total_days)
}

/// The fraction of a 52-week year remaining from the year-start date's ISO
/// week, that week included.
///
/// A year-start falling into ISO week 53 (or into week 52/53 of the
/// previous ISO year, as early January dates can) yields zero or a full
/// ratio respectively, mirroring the reference behavior.
pub fn iso_week_ratio(year_start: NaiveDate) -> Decimal {
    let join_week = i64::from(year_start.iso_week().week());
    let remaining_weeks = (52 - join_week + 1).max(0);
    Decimal::from(remaining_weeks) / Decimal::from(52)
}

/// Prorates an amount by a ratio, flooring to whole units.
pub fn prorated(amount: Decimal, ratio: Decimal) -> Decimal {
    (amount * ratio).floor()
}
