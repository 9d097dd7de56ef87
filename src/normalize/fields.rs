//! Best-effort field coercion for raw source rows.
//!
//! Both source systems deliver loosely-typed rows (numbers as strings,
//! blank cells, datetime strings where dates are expected). The helpers
//! here implement the engine's coercion conventions: trim everything,
//! default failed numeric parses to zero, and map unparseable dates to an
//! explicit `None` rather than a zero-date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

/// A raw row as delivered by a source system: a JSON object keyed by the
/// source's own field names.
pub type RawRow = serde_json::Map<String, Value>;

/// Values the sources use for "no data" in text cells.
const NULL_MARKERS: [&str; 3] = ["", "nan", "N/A"];

/// Reads a text field, trimmed. Numbers and booleans are stringified the
/// way the spreadsheet export shows them; missing and null cells become
/// the empty string.
pub fn text_field(row: &RawRow, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if NULL_MARKERS.contains(&trimmed) {
                String::new()
            } else {
                trimmed.to_string()
            }
        }
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Reads a join-key field: trimmed and lower-cased.
pub fn key_field(row: &RawRow, key: &str) -> String {
    text_field(row, key).to_lowercase()
}

/// Reads a numeric field with best-effort coercion; anything that fails
/// to parse becomes zero.
pub fn decimal_field(row: &RawRow, key: &str) -> Decimal {
    match row.get(key) {
        Some(Value::Number(n)) => parse_decimal(&n.to_string()),
        Some(Value::String(s)) => parse_decimal(s.trim()),
        _ => Decimal::ZERO,
    }
}

fn parse_decimal(text: &str) -> Decimal {
    if text.is_empty() {
        return Decimal::ZERO;
    }
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(text))
        .unwrap_or(Decimal::ZERO)
}

/// Reads a date field. Accepts ISO dates and datetime strings (anything
/// from a `T` or space separator on is ignored); everything else is the
/// explicit unknown sentinel `None`, never a zero-date.
pub fn date_field(row: &RawRow, key: &str) -> Option<NaiveDate> {
    match row.get(key) {
        Some(Value::String(s)) => parse_date(s),
        _ => None,
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if NULL_MARKERS.contains(&trimmed) {
        return None;
    }
    let date_part = trimmed
        .split(['T', ' '])
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y/%m/%d"))
        .ok()
}
