//! Validation output models.
//!
//! This module contains the [`ValidationRow`] terminal output type and the
//! [`ValidationReport`] wrapper consumed by the presenter and uploader.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AbsenceId;

/// One validated (employee, absence-type) pair.
///
/// Carries both sources' values, the resolved catalog id, the recalculated
/// correct values, the two match flags, and the signed balance difference.
/// Rows are constructed once per reconciliation pass and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRow {
    /// HR person number (original case), falling back to the WFM number
    /// when the HR export left it blank.
    pub hr_person_number: String,
    /// WFM employment number, empty for unmatched rows.
    pub wfm_person_number: String,
    /// HR absence-type label in its original casing.
    pub hr_absence_type: String,
    /// WFM absence name, empty for unmatched rows.
    pub wfm_absence_type: String,
    /// Resolved catalog id, `None` when resolution failed or no WFM row
    /// matched.
    pub absence_id: Option<AbsenceId>,
    /// WFM business-unit name.
    pub business_unit: String,
    /// WFM account start date.
    pub start_date: Option<NaiveDate>,
    /// WFM contract name.
    pub contract_name: String,
    /// Reported balance-in, rounded to a whole unit.
    pub balance_in: i64,
    /// Reported accrued, rounded to a whole unit.
    pub accrued: i64,
    /// Reported extra amount, rounded to a whole unit.
    pub extra: i64,
    /// Approved units, rounded to a whole unit.
    pub units_approved: i64,
    /// WFM tracking category.
    pub tracked_by: String,
    /// WFM person id, empty when unknown.
    pub person_id: String,
    /// HR beginning-year balance, as reported.
    pub beginning_year_balance: Decimal,
    /// HR accrued-this-year, as reported.
    pub accrued_this_year: Decimal,
    /// Work email from the HR people feed.
    pub work_email: Option<String>,
    /// Employment start date from the WFM person dump.
    pub employment_start_date: Option<NaiveDate>,
    /// Hire date from the HR people feed.
    pub hire_date: Option<NaiveDate>,
    /// Recalculated correct balance-in.
    pub correct_balance_in: i64,
    /// Recalculated correct accrued.
    pub correct_accrued: i64,
    /// Whether the reported balance-in equals the correct value.
    pub balance_match: bool,
    /// Whether the reported accrued equals the correct value.
    pub accrual_match: bool,
    /// Signed difference: correct balance-in minus reported balance-in.
    pub balance_difference: i64,
}

impl ValidationRow {
    /// Returns true when either the balance or the accrual disagrees.
    pub fn is_mismatch(&self) -> bool {
        !self.balance_match || !self.accrual_match
    }
}

/// Absence-id mapping coverage over one normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSummary {
    /// Number of WFM rows that resolved to a catalog id.
    pub resolved: usize,
    /// Total number of WFM rows seen.
    pub total: usize,
}

impl MappingSummary {
    /// Resolution rate as a percentage, 0.0 for an empty pass.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.resolved as f64 / self.total as f64 * 100.0
        }
    }
}

/// Aggregate figures for one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Total number of validation rows produced.
    pub total_rows: usize,
    /// Rows whose reported balance-in disagrees with the correct value.
    pub balance_mismatches: usize,
    /// Rows whose reported accrued disagrees with the correct value.
    pub accrual_mismatches: usize,
    /// Absence-id mapping coverage.
    pub mapping: MappingSummary,
}

/// The terminal artifact of a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// One row per HR input row, in input order.
    pub rows: Vec<ValidationRow>,
    /// Aggregate figures over `rows`.
    pub summary: ValidationSummary,
}
