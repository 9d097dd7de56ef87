//! Business-unit name canonicalization.
//!
//! Source systems spell the same business unit several ways ("Security",
//! "Global - Security", "global security"). This module maps a free-text
//! unit name onto its canonical catalog key through the alias table.

use tracing::debug;

use crate::config::BusinessUnitAliases;

/// Stripped in order when looking for a prefixed variant.
const GLOBAL_PREFIXES: [&str; 3] = ["global -", "global_", "global"];

/// Maps a business-unit name to its canonical catalog key.
///
/// Lookup order:
/// 1. exact match of the trimmed, lower-cased name against the alias table;
/// 2. the same lookup after stripping a `global -`/`global_`/`global`
///    prefix;
/// 3. a bidirectional substring match against alias keys, in table order.
///
/// Returns `None` when the name is blank or no alias matches.
///
/// # Example
///
/// ```
/// use leave_recon::config::BusinessUnitAliases;
/// use leave_recon::mapping::canonical_business_unit;
///
/// let aliases = BusinessUnitAliases::default();
/// assert_eq!(
///     canonical_business_unit("  Global - SECURITY ", &aliases).as_deref(),
///     Some("Global Security")
/// );
/// assert_eq!(canonical_business_unit("Cafeteria", &aliases), None);
/// ```
pub fn canonical_business_unit(unit: &str, aliases: &BusinessUnitAliases) -> Option<String> {
    let needle = unit.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(entry) = aliases.entries().iter().find(|e| e.from == needle) {
        return Some(entry.to.clone());
    }

    for prefix in GLOBAL_PREFIXES {
        if let Some(stripped) = needle.strip_prefix(prefix) {
            let stripped = stripped.trim();
            if let Some(entry) = aliases.entries().iter().find(|e| e.from == stripped) {
                return Some(entry.to.clone());
            }
        }
    }

    let partial = aliases
        .entries()
        .iter()
        .find(|e| needle.contains(e.from.as_str()) || e.from.contains(needle.as_str()))
        .map(|e| e.to.clone());

    if partial.is_none() {
        debug!(business_unit = unit, "no canonical business unit found");
    }
    partial
}
