//! Upload formatting for the WFM write-back endpoint.
//!
//! The write-back endpoint takes tab-separated account lines keyed by
//! person id and absence id. Which rows to upload (typically the
//! mismatched ones) is the caller's policy; this module only formats.

use crate::models::ValidationRow;

/// Formats validation rows as upload lines:
/// `person_id \t absence_id \t balance_in \t accrued \t extra`.
///
/// The balance and accrued columns carry the recalculated correct values.
/// Rows with an empty person id or an unresolved absence id are skipped;
/// the endpoint requires both.
///
/// # Example
///
/// ```
/// use leave_recon::export::upload_lines;
///
/// let lines = upload_lines(&[]);
/// assert!(lines.is_empty());
/// ```
pub fn upload_lines(rows: &[ValidationRow]) -> Vec<String> {
    rows.iter()
        .filter(|row| !row.person_id.is_empty() && row.absence_id.is_some())
        .map(|row| {
            let absence_id = row
                .absence_id
                .as_ref()
                .map(|id| id.as_str())
                .unwrap_or_default();
            format!(
                "{}\t{}\t{}\t{}\t{}",
                row.person_id, absence_id, row.correct_balance_in, row.correct_accrued, row.extra
            )
        })
        .collect()
}
