//! Request types for the leave reconciliation API.
//!
//! This module defines the JSON request structure for the `/validate`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::normalize::RawRow;

/// Request body for the `/validate` endpoint.
///
/// Carries the four raw row collections as the source systems deliver
/// them. The account collections are required: a request without them is
/// a contract violation and is rejected, while empty arrays are ordinary
/// sparse data. The people feeds and the `as_of` reference date are
/// optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// HR person-account rows (the expectations driving the report).
    pub hr_accounts: Vec<RawRow>,
    /// HR people rows (hire dates, work emails).
    #[serde(default)]
    pub hr_people: Vec<RawRow>,
    /// WFM account rows (the reported values under validation).
    pub wfm_accounts: Vec<RawRow>,
    /// WFM person rows (person ids, business units, start dates).
    #[serde(default)]
    pub wfm_people: Vec<RawRow>,
    /// Reference date for accrual calculations; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}
