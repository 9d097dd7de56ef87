//! Absence row models for both source systems.
//!
//! This module defines the normalized per-absence row shapes: [`HrAbsence`]
//! for the HR master export, [`WfmAbsence`] for the WFM account dump, and
//! the [`JoinedRow`] pairing produced by the reconciler.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The canonical identifier an absence label resolves to in the WFM catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbsenceId(String);

impl AbsenceId {
    /// Creates a new absence id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbsenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One normalized HR person-account row: what HR expects the employee's
/// leave position to be.
///
/// The employment number and absence key are the join fields and are stored
/// trimmed and lower-cased; the original-case forms are kept alongside for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrAbsence {
    /// Canonical employment number (trimmed, lower-cased join key).
    pub employment_number: String,
    /// The identifier as it appeared in the export, trimmed only.
    pub display_number: String,
    /// Absence-type label as it appeared in the export, trimmed only.
    pub absence_type: String,
    /// Lower-cased absence-type join key.
    pub absence_key: String,
    /// Balance carried into the current year.
    pub beginning_year_balance: Decimal,
    /// Units accrued so far this year.
    pub accrued_this_year: Decimal,
    /// Hire date merged from the HR people feed.
    pub hire_date: Option<NaiveDate>,
    /// Work email merged from the HR people feed.
    pub work_email: Option<String>,
}

/// One normalized WFM account row: what the WFM system reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WfmAbsence {
    /// Canonical employment number (trimmed, lower-cased join key).
    pub employment_number: String,
    /// Absence name as it appeared in the dump, trimmed only.
    pub absence_name: String,
    /// Lower-cased absence-name join key.
    pub absence_key: String,
    /// Business-unit name merged from the WFM person dump.
    pub business_unit: String,
    /// Start date of the account period.
    pub start_date: Option<NaiveDate>,
    /// Contract name the account belongs to.
    pub contract_name: String,
    /// Reported balance carried into the period.
    pub balance_in: Decimal,
    /// Reported accrued amount.
    pub accrued: Decimal,
    /// Reported extra amount.
    pub extra: Decimal,
    /// Units already approved against the account.
    pub units_approved: Decimal,
    /// Tracking category ("Days", "Hours", ...).
    pub tracked_by: String,
    /// WFM person id merged from the person dump, empty when unknown.
    pub person_id: String,
    /// Employment start date merged from the person dump.
    pub employment_start_date: Option<NaiveDate>,
    /// Resolved catalog id; `None` means every resolution stage failed.
    pub absence_id: Option<AbsenceId>,
}

/// An HR row paired with the WFM row it matched, if any.
///
/// Produced by the reconciler's left outer join: the HR side is always
/// present, the WFM side is `None` for unmatched rows.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRow {
    /// The HR expectation driving this row.
    pub hr: HrAbsence,
    /// The first matching WFM row, by input order.
    pub wfm: Option<WfmAbsence>,
}

impl JoinedRow {
    /// The date employment is considered to have started, for accrual
    /// purposes: the HR hire date, falling back to the WFM employment
    /// start date.
    pub fn employment_reference_date(&self) -> Option<NaiveDate> {
        self.hr
            .hire_date
            .or_else(|| self.wfm.as_ref().and_then(|w| w.employment_start_date))
    }
}
