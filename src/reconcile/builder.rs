//! Validation row and report assembly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculation::calculate_correct_values;
use crate::config::RuleSet;
use crate::models::{
    HrAbsence, JoinedRow, MappingSummary, ValidationReport, ValidationRow, ValidationSummary,
    WfmAbsence,
};

use super::join::join_rows;

fn round_to_whole(value: Decimal) -> i64 {
    value.round().to_i64().unwrap_or(0)
}

/// Builds the terminal output row for one joined pair.
///
/// WFM-derived fields default to empty/zero/`None` when no WFM row matched,
/// so an unmatched HR expectation is validated against zero-default
/// reported values rather than disappearing.
pub fn build_row(joined: &JoinedRow, rules: &RuleSet, as_of: NaiveDate) -> ValidationRow {
    let correct = calculate_correct_values(joined, rules, as_of);
    let hr = &joined.hr;
    let wfm = joined.wfm.as_ref();

    let balance_in = round_to_whole(wfm.map(|w| w.balance_in).unwrap_or(Decimal::ZERO));
    let accrued = round_to_whole(wfm.map(|w| w.accrued).unwrap_or(Decimal::ZERO));

    let wfm_person_number = wfm
        .map(|w| w.employment_number.clone())
        .unwrap_or_default();
    let hr_person_number = if hr.display_number.is_empty() {
        wfm_person_number.clone()
    } else {
        hr.display_number.clone()
    };

    ValidationRow {
        hr_person_number,
        wfm_person_number,
        hr_absence_type: hr.absence_type.clone(),
        wfm_absence_type: wfm.map(|w| w.absence_name.clone()).unwrap_or_default(),
        absence_id: wfm.and_then(|w| w.absence_id.clone()),
        business_unit: wfm.map(|w| w.business_unit.clone()).unwrap_or_default(),
        start_date: wfm.and_then(|w| w.start_date),
        contract_name: wfm.map(|w| w.contract_name.clone()).unwrap_or_default(),
        balance_in,
        accrued,
        extra: round_to_whole(wfm.map(|w| w.extra).unwrap_or(Decimal::ZERO)),
        units_approved: round_to_whole(wfm.map(|w| w.units_approved).unwrap_or(Decimal::ZERO)),
        tracked_by: wfm.map(|w| w.tracked_by.clone()).unwrap_or_default(),
        person_id: wfm.map(|w| w.person_id.clone()).unwrap_or_default(),
        beginning_year_balance: hr.beginning_year_balance,
        accrued_this_year: hr.accrued_this_year,
        work_email: hr.work_email.clone(),
        employment_start_date: wfm.and_then(|w| w.employment_start_date),
        hire_date: hr.hire_date,
        correct_balance_in: correct.balance_in,
        correct_accrued: correct.accrued,
        balance_match: correct.balance_in == balance_in,
        accrual_match: correct.accrued == accrued,
        balance_difference: correct.balance_in - balance_in,
    }
}

/// Runs the full reconciliation over normalized inputs: WFM dedup, left
/// outer join, per-row recalculation, and summary assembly.
///
/// Output row *i* corresponds to HR input row *i*.
pub fn build_report(
    hr: &[HrAbsence],
    wfm: &[WfmAbsence],
    rules: &RuleSet,
    as_of: NaiveDate,
    mapping: MappingSummary,
) -> ValidationReport {
    let rows: Vec<ValidationRow> = join_rows(hr, wfm)
        .iter()
        .map(|joined| build_row(joined, rules, as_of))
        .collect();

    let summary = ValidationSummary {
        total_rows: rows.len(),
        balance_mismatches: rows.iter().filter(|r| !r.balance_match).count(),
        accrual_mismatches: rows.iter().filter(|r| !r.accrual_match).count(),
        mapping,
    };

    ValidationReport { rows, summary }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::config::{AbsenceRule, AccrualMethod, RulesConfig};
    use crate::models::AbsenceId;

    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    fn hr(number: &str, absence: &str, balance: i64, accrued: i64) -> HrAbsence {
        HrAbsence {
            employment_number: number.to_lowercase(),
            display_number: number.to_string(),
            absence_type: absence.to_string(),
            absence_key: absence.to_lowercase(),
            beginning_year_balance: Decimal::from(balance),
            accrued_this_year: Decimal::from(accrued),
            hire_date: None,
            work_email: None,
        }
    }

    fn wfm(number: &str, absence: &str, balance: &str, accrued: i64) -> WfmAbsence {
        WfmAbsence {
            employment_number: number.to_lowercase(),
            absence_name: absence.to_string(),
            absence_key: absence.to_lowercase(),
            business_unit: "Customer Care".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            contract_name: "Standard".to_string(),
            balance_in: balance.parse().unwrap(),
            accrued: Decimal::from(accrued),
            extra: Decimal::ZERO,
            units_approved: Decimal::ZERO,
            tracked_by: "Days".to_string(),
            person_id: "p-1".to_string(),
            employment_start_date: None,
            absence_id: Some(AbsenceId::new("id-sick")),
        }
    }

    fn passthrough_rules() -> RuleSet {
        RuleSet::empty()
    }

    fn fixed_rule(absence_type: &str, amount: i64) -> RuleSet {
        let mut conditions = BTreeMap::new();
        conditions.insert("AbsenceType".to_string(), absence_type.to_string());
        RuleSet::new(RulesConfig {
            rules: vec![AbsenceRule {
                name: "test".to_string(),
                priority: 10,
                conditions,
                accrual: AccrualMethod::Fixed,
                amount: Some(Decimal::from(amount)),
                basis: None,
                per_quarter: None,
                clamp_negative_balance: false,
            }],
            unit_conversions: vec![],
        })
        .unwrap()
    }

    #[test]
    fn test_matched_row_with_agreeing_values() {
        // HR expects balance 10 / accrued 2; the WFM system reports the
        // same, via a fixed accrual rule of 2.
        let hr_rows = vec![hr("A1", "Sick", 10, 0)];
        let wfm_rows = vec![wfm("a1", "sick", "10", 2)];
        let rules = fixed_rule("Sick", 2);

        let report = build_report(
            &hr_rows,
            &wfm_rows,
            &rules,
            as_of(),
            MappingSummary {
                resolved: 1,
                total: 1,
            },
        );

        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert!(row.balance_match);
        assert!(row.accrual_match);
        assert_eq!(row.balance_difference, 0);
        assert_eq!(report.summary.balance_mismatches, 0);
        assert_eq!(report.summary.accrual_mismatches, 0);
    }

    #[test]
    fn test_unmatched_hr_row_validates_against_zero_defaults() {
        let hr_rows = vec![hr("B2", "Sick", 5, 1)];

        let report = build_report(
            &hr_rows,
            &[],
            &passthrough_rules(),
            as_of(),
            MappingSummary {
                resolved: 0,
                total: 0,
            },
        );

        let row = &report.rows[0];
        assert_eq!(row.wfm_person_number, "");
        assert_eq!(row.person_id, "");
        assert_eq!(row.absence_id, None);
        assert_eq!(row.balance_in, 0);
        // Correct balance 5 against reported 0.
        assert_eq!(row.correct_balance_in, 5);
        assert!(!row.balance_match);
        assert_eq!(row.balance_difference, 5);
    }

    #[test]
    fn test_balance_difference_is_signed() {
        let hr_rows = vec![hr("A1", "Sick", 4, 0)];
        let wfm_rows = vec![wfm("a1", "sick", "10", 0)];

        let report = build_report(
            &hr_rows,
            &wfm_rows,
            &passthrough_rules(),
            as_of(),
            MappingSummary {
                resolved: 1,
                total: 1,
            },
        );

        assert_eq!(report.rows[0].balance_difference, -6);
        assert!(!report.rows[0].balance_match);
    }

    #[test]
    fn test_reported_values_are_rounded_before_comparison() {
        let hr_rows = vec![hr("A1", "Sick", 10, 0)];
        let wfm_rows = vec![wfm("a1", "sick", "10.4", 0)];

        let report = build_report(
            &hr_rows,
            &wfm_rows,
            &passthrough_rules(),
            as_of(),
            MappingSummary {
                resolved: 1,
                total: 1,
            },
        );

        assert_eq!(report.rows[0].balance_in, 10);
        assert!(report.rows[0].balance_match);
    }

    #[test]
    fn test_blank_hr_number_falls_back_to_wfm_number() {
        let mut expectation = hr("", "Sick", 0, 0);
        expectation.display_number = String::new();
        expectation.employment_number = "a1".to_string();
        let wfm_rows = vec![wfm("a1", "sick", "0", 0)];

        let report = build_report(
            &[expectation],
            &wfm_rows,
            &passthrough_rules(),
            as_of(),
            MappingSummary {
                resolved: 1,
                total: 1,
            },
        );

        assert_eq!(report.rows[0].hr_person_number, "a1");
    }

    #[test]
    fn test_summary_counts_mismatches() {
        let hr_rows = vec![
            hr("A1", "Sick", 10, 0),
            hr("A2", "Sick", 3, 7),
        ];
        let wfm_rows = vec![wfm("a1", "sick", "10", 0), wfm("a2", "sick", "4", 7)];

        let report = build_report(
            &hr_rows,
            &wfm_rows,
            &passthrough_rules(),
            as_of(),
            MappingSummary {
                resolved: 2,
                total: 2,
            },
        );

        assert_eq!(report.summary.total_rows, 2);
        assert_eq!(report.summary.balance_mismatches, 1);
        assert_eq!(report.summary.accrual_mismatches, 0);
    }
}
