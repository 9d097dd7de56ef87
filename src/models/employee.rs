//! Employee model shared by both data sources.
//!
//! This module defines the [`EmployeeRecord`] struct produced by normalizing
//! the HR people export and the WFM person dump.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents one person as known to either source system.
///
/// The HR people feed fills in the display name, hire date and work email;
/// the WFM person dump fills in the person id, business unit and employment
/// start date. Fields a feed does not carry are left empty or `None`.
///
/// The employment number is stored in canonical form (trimmed, lower-cased)
/// and is the only field used as a join key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Canonical employment number (trimmed, lower-cased).
    pub employment_number: String,
    /// Display name of the employee, empty when the feed has none.
    pub display_name: String,
    /// Hire date from the HR people feed.
    pub hire_date: Option<NaiveDate>,
    /// Work email from the HR people feed.
    pub work_email: Option<String>,
    /// Business-unit name, empty when the feed has none.
    pub business_unit: String,
    /// WFM person id, present only on WFM person records.
    pub person_id: Option<String>,
    /// Employment start date from the WFM person dump.
    pub employment_start_date: Option<NaiveDate>,
}
