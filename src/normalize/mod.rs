//! Record normalization for both source systems.
//!
//! This module turns the loosely-typed raw rows delivered by the HR export
//! and the WFM dumps into the engine's typed row shapes, applying the
//! coercion conventions of [`fields`] and merging the per-person feeds
//! (hire date, email, person id, business unit) into the account rows.
//!
//! Rows missing the employee identifier are retained with an empty-string
//! key so they surface as unmatched instead of vanishing; input rows are
//! never mutated.

mod fields;

use std::collections::HashMap;

use tracing::info;

use crate::config::{BusinessUnitAliases, BusinessUnitCatalog};
use crate::mapping::resolve_absence_id;
use crate::models::{EmployeeRecord, HrAbsence, MappingSummary, WfmAbsence};

pub use fields::{RawRow, date_field, decimal_field, key_field, text_field};

/// Normalizes the HR people export.
///
/// Keys consumed: `"EmployeeId"`, `"Name"`, `"Hire Date"`, `"Work Email"`,
/// `"Business Unit"`.
pub fn normalize_hr_people(rows: &[RawRow]) -> Vec<EmployeeRecord> {
    rows.iter()
        .map(|row| {
            let email = text_field(row, "Work Email");
            EmployeeRecord {
                employment_number: key_field(row, "EmployeeId"),
                display_name: text_field(row, "Name"),
                hire_date: date_field(row, "Hire Date"),
                work_email: (!email.is_empty()).then_some(email),
                business_unit: text_field(row, "Business Unit"),
                person_id: None,
                employment_start_date: None,
            }
        })
        .collect()
}

/// Normalizes the WFM person dump.
///
/// Keys consumed: `"EmploymentNumber"`, `"PersonId"`, `"BusinessUnitName"`,
/// `"EmploymentStartDate"`.
pub fn normalize_wfm_people(rows: &[RawRow]) -> Vec<EmployeeRecord> {
    rows.iter()
        .map(|row| {
            let person_id = text_field(row, "PersonId");
            EmployeeRecord {
                employment_number: key_field(row, "EmploymentNumber"),
                display_name: String::new(),
                hire_date: None,
                work_email: None,
                business_unit: text_field(row, "BusinessUnitName"),
                person_id: (!person_id.is_empty()).then_some(person_id),
                employment_start_date: date_field(row, "EmploymentStartDate"),
            }
        })
        .collect()
}

/// Indexes people by employment number, first record per number winning.
fn index_people(people: &[EmployeeRecord]) -> HashMap<&str, &EmployeeRecord> {
    let mut index: HashMap<&str, &EmployeeRecord> = HashMap::new();
    for person in people {
        index.entry(person.employment_number.as_str()).or_insert(person);
    }
    index
}

/// Normalizes the HR person-account rows, merging hire date and work email
/// from the HR people feed.
///
/// Keys consumed: `"EmployeeId"`, `"AbsenceType"`,
/// `"Beginning Year Balance"`, `"Accrued this year"`.
pub fn normalize_hr_accounts(rows: &[RawRow], people: &[EmployeeRecord]) -> Vec<HrAbsence> {
    let index = index_people(people);

    rows.iter()
        .map(|row| {
            let employment_number = key_field(row, "EmployeeId");
            let person = index.get(employment_number.as_str());
            let absence_type = text_field(row, "AbsenceType");
            HrAbsence {
                display_number: text_field(row, "EmployeeId"),
                absence_key: absence_type.to_lowercase(),
                absence_type,
                beginning_year_balance: decimal_field(row, "Beginning Year Balance"),
                accrued_this_year: decimal_field(row, "Accrued this year"),
                hire_date: person.and_then(|p| p.hire_date),
                work_email: person.and_then(|p| p.work_email.clone()),
                employment_number,
            }
        })
        .collect()
}

/// Normalizes the WFM account rows: merges person id, business unit and
/// employment start date from the WFM person dump, then resolves each
/// row's absence id against the merged business unit.
///
/// Keys consumed: `"EmploymentNumber"`, `"AbsenceName"`, `"BalanceIn"`,
/// `"Accrued"`, `"Extra"`, `"Units Approved"`, `"TrackedBy"`,
/// `"StartDate"`, `"ContractName"`.
///
/// Returns the rows plus the mapping coverage over them; resolution
/// failures stay visible as `None` ids rather than being defaulted.
pub fn normalize_wfm_accounts(
    rows: &[RawRow],
    people: &[EmployeeRecord],
    catalog: &BusinessUnitCatalog,
    aliases: &BusinessUnitAliases,
) -> (Vec<WfmAbsence>, MappingSummary) {
    let index = index_people(people);

    let entries: Vec<WfmAbsence> = rows
        .iter()
        .map(|row| {
            let employment_number = key_field(row, "EmploymentNumber");
            let person = index.get(employment_number.as_str());
            let business_unit = person
                .map(|p| p.business_unit.clone())
                .unwrap_or_default();
            let absence_name = text_field(row, "AbsenceName");
            let absence_id = resolve_absence_id(catalog, aliases, &business_unit, &absence_name)
                .map(|resolution| resolution.id);

            WfmAbsence {
                absence_key: absence_name.to_lowercase(),
                absence_name,
                business_unit,
                start_date: date_field(row, "StartDate"),
                contract_name: text_field(row, "ContractName"),
                balance_in: decimal_field(row, "BalanceIn"),
                accrued: decimal_field(row, "Accrued"),
                extra: decimal_field(row, "Extra"),
                units_approved: decimal_field(row, "Units Approved"),
                tracked_by: text_field(row, "TrackedBy"),
                person_id: person
                    .and_then(|p| p.person_id.clone())
                    .unwrap_or_default(),
                employment_start_date: person.and_then(|p| p.employment_start_date),
                absence_id,
                employment_number,
            }
        })
        .collect();

    let summary = MappingSummary {
        resolved: entries.iter().filter(|e| e.absence_id.is_some()).count(),
        total: entries.len(),
    };
    info!(
        resolved = summary.resolved,
        total = summary.total,
        percentage = summary.percentage(),
        "absence id mapping complete"
    );

    (entries, summary)
}
