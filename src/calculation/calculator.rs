//! Rule-driven recalculation of correct balance and accrual values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::{AbsenceRule, AccrualMethod, ProrationBasis, RuleSet};
use crate::models::JoinedRow;

use super::proration::{calendar_day_ratio, iso_week_ratio, prorated};
use super::quarterly::quarterly_grant;
use super::year_start::accrual_year_start;

/// The recalculated correct values for one joined row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectValues {
    /// The correct balance carried into the period.
    pub balance_in: i64,
    /// The correct accrued amount.
    pub accrued: i64,
}

/// The row value a rule condition is compared against.
///
/// Unknown condition fields compare against the empty string, so a rule
/// conditioned on a field the row cannot supply only matches an empty
/// expectation.
fn condition_field(row: &JoinedRow, key: &str) -> String {
    match key {
        "AbsenceType" => row.hr.absence_type.clone(),
        "ContractName" => row
            .wfm
            .as_ref()
            .map(|w| w.contract_name.clone())
            .unwrap_or_default(),
        "BusinessUnitName" => row
            .wfm
            .as_ref()
            .map(|w| w.business_unit.clone())
            .unwrap_or_default(),
        "TrackedBy" => row
            .wfm
            .as_ref()
            .map(|w| w.tracked_by.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Whether all of a rule's conditions hold for a row. Values are compared
/// trimmed and case-insensitively.
fn conditions_met(row: &JoinedRow, rule: &AbsenceRule) -> bool {
    rule.conditions.iter().all(|(key, expected)| {
        condition_field(row, key).trim().to_uppercase() == expected.trim().to_uppercase()
    })
}

fn round_to_whole(value: Decimal) -> i64 {
    value.round().to_i64().unwrap_or(0)
}

/// Recomputes the correct balance-in and accrued values for a joined row.
///
/// The beginning-year balance is first put into the absence type's tracking
/// unit via the rule table's prefix-driven conversions, then the first rule
/// (ascending priority) whose conditions all match decides the accrual. A
/// row matching no rule passes the reported HR values through unchanged:
/// a rule-free category means "trust the input", not an error.
///
/// The input row is never mutated; missing inputs behave as zero.
pub fn calculate_correct_values(
    row: &JoinedRow,
    rules: &RuleSet,
    as_of: NaiveDate,
) -> CorrectValues {
    let mut balance = row.hr.beginning_year_balance;
    if let Some(factor) = rules.unit_factor(&row.hr.absence_key) {
        balance *= factor;
    }

    let year_start = accrual_year_start(row.employment_reference_date(), as_of);

    for rule in rules.rules() {
        if !conditions_met(row, rule) {
            continue;
        }

        let accrued = match rule.accrual {
            AccrualMethod::Fixed => rule.amount.unwrap_or(Decimal::ZERO),
            AccrualMethod::Prorate => {
                let amount = rule.amount.unwrap_or(Decimal::ZERO);
                let ratio = match rule.basis.unwrap_or(ProrationBasis::CalendarDays) {
                    ProrationBasis::CalendarDays => calendar_day_ratio(year_start, as_of),
                    ProrationBasis::IsoWeeks => iso_week_ratio(year_start),
                };
                prorated(amount, ratio)
            }
            AccrualMethod::QuarterlyGrant => {
                quarterly_grant(rule.per_quarter.unwrap_or(Decimal::ZERO), year_start)
            }
        };

        if rule.clamp_negative_balance && balance.is_sign_negative() {
            balance = Decimal::ZERO;
        }

        return CorrectValues {
            balance_in: round_to_whole(balance),
            accrued: round_to_whole(accrued),
        };
    }

    CorrectValues {
        balance_in: round_to_whole(balance),
        accrued: round_to_whole(row.hr.accrued_this_year),
    }
}
