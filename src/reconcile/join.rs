//! The left outer join between HR expectations and WFM accounts.

use std::collections::HashMap;

use crate::models::{HrAbsence, JoinedRow, WfmAbsence};

/// Joins HR and WFM rows on (employment number, lower-cased absence label).
///
/// The join is left outer from the HR side: every HR row yields exactly one
/// output row, in input order, with the WFM side `None` when nothing
/// matched. WFM rows are deduplicated per join key first, keeping the first
/// row in input order, so duplicate WFM accounts never fan out the join.
///
/// WFM-only rows are not emitted: the validation table is driven by what
/// the HR system expects to exist. Empty inputs are not errors.
pub fn join_rows(hr: &[HrAbsence], wfm: &[WfmAbsence]) -> Vec<JoinedRow> {
    let mut by_key: HashMap<(&str, &str), &WfmAbsence> = HashMap::new();
    for entry in wfm {
        by_key
            .entry((entry.employment_number.as_str(), entry.absence_key.as_str()))
            .or_insert(entry);
    }

    hr.iter()
        .map(|expectation| {
            let key = (
                expectation.employment_number.as_str(),
                expectation.absence_key.as_str(),
            );
            JoinedRow {
                hr: expectation.clone(),
                wfm: by_key.get(&key).map(|entry| (*entry).clone()),
            }
        })
        .collect()
}
