//! Absence-id resolution.
//!
//! Source labels for the same absence concept diverge across systems in
//! capitalization, regional "Global -" prefixing and partial names. This
//! module resolves a (business unit, absence name) pair to a catalog id
//! through an ordered fallback chain; the stage that matched is kept on the
//! result so matches stay auditable.

use tracing::debug;

use crate::config::{BusinessUnitAliases, BusinessUnitCatalog};
use crate::models::AbsenceId;

use super::business_unit::canonical_business_unit;

/// The fallback stage that produced a resolution.
///
/// The ordering of the variants is the precedence of the chain: an earlier
/// stage always wins over a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchStage {
    /// Exact, case-sensitive name match.
    Exact,
    /// Case-insensitive exact name match.
    CaseInsensitive,
    /// The query found as a substring of a catalog name, first entry in
    /// catalog source order.
    Substring,
    /// Exact match after prepending the "Global - " prefix to the query.
    GlobalPrefix,
}

/// A successful absence-id resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved catalog id.
    pub id: AbsenceId,
    /// The stage that produced the match.
    pub stage: MatchStage,
}

/// Resolves an absence name to its catalog id within a business unit.
///
/// Stages, in order, first match wins:
/// 1. the business unit itself must be a catalog key, or canonicalize to
///    one through the alias table; otherwise resolution fails without
///    trying any name stage;
/// 2. exact, case-sensitive name match;
/// 3. case-insensitive exact match;
/// 4. case-insensitive substring match, first catalog entry in source
///    order;
/// 5. exact match against `"Global - " + name`, unless the query already
///    carries the prefix.
///
/// Blank inputs never resolve. Pure function; the only side effect is a
/// `debug!` log on failure, feeding the mapping-coverage metric upstream.
///
/// # Example
///
/// ```no_run
/// use leave_recon::config::ConfigLoader;
/// use leave_recon::mapping::{MatchStage, resolve_absence_id};
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let resolution = resolve_absence_id(
///     loader.catalog(),
///     loader.aliases(),
///     "Customer Care",
///     "Sick Leave",
/// )
/// .unwrap();
/// assert_eq!(resolution.stage, MatchStage::Substring);
/// ```
pub fn resolve_absence_id(
    catalog: &BusinessUnitCatalog,
    aliases: &BusinessUnitAliases,
    business_unit: &str,
    absence_name: &str,
) -> Option<Resolution> {
    if business_unit.is_empty() || absence_name.is_empty() {
        return None;
    }

    let unit = if catalog.contains_unit(business_unit) {
        business_unit.to_string()
    } else {
        match canonical_business_unit(business_unit, aliases) {
            Some(mapped) if catalog.contains_unit(&mapped) => mapped,
            _ => {
                debug!(business_unit, "business unit not found in catalog");
                return None;
            }
        }
    };
    let absences = catalog.absences(&unit);

    if let Some(absence) = absences.iter().find(|a| a.name == absence_name) {
        return Some(Resolution {
            id: absence.id.clone(),
            stage: MatchStage::Exact,
        });
    }

    let needle = absence_name.to_lowercase();
    if let Some(absence) = absences.iter().find(|a| a.name.to_lowercase() == needle) {
        return Some(Resolution {
            id: absence.id.clone(),
            stage: MatchStage::CaseInsensitive,
        });
    }

    if let Some(absence) = absences
        .iter()
        .find(|a| a.name.to_lowercase().contains(&needle))
    {
        return Some(Resolution {
            id: absence.id.clone(),
            stage: MatchStage::Substring,
        });
    }

    if !needle.starts_with("global -") {
        let prefixed = format!("Global - {}", absence_name);
        if let Some(absence) = absences.iter().find(|a| a.name == prefixed) {
            return Some(Resolution {
                id: absence.id.clone(),
                stage: MatchStage::GlobalPrefix,
            });
        }
    }

    debug!(
        business_unit = %unit,
        absence_name,
        "no absence id found after all stages"
    );
    None
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use crate::config::CatalogAbsence;

    use super::*;

    fn absence(name: &str, id: &str) -> CatalogAbsence {
        CatalogAbsence {
            name: name.to_string(),
            id: AbsenceId::new(id),
        }
    }

    fn test_catalog() -> BusinessUnitCatalog {
        let mut units = HashMap::new();
        units.insert(
            "Customer Care".to_string(),
            vec![
                absence("Global - Annual Leave", "id-annual"),
                absence("Global - Sick Leave", "id-sick"),
                absence("Sick", "id-sick-short"),
                absence("USA - PTO", "id-pto"),
            ],
        );
        BusinessUnitCatalog::from_units(units)
    }

    fn resolve(bu: &str, name: &str) -> Option<Resolution> {
        resolve_absence_id(
            &test_catalog(),
            &BusinessUnitAliases::default(),
            bu,
            name,
        )
    }

    #[test]
    fn test_exact_match_wins_over_substring() {
        // "Sick" is both an exact catalog name and a substring of
        // "Global - Sick Leave", which comes earlier in catalog order.
        let resolution = resolve("Customer Care", "Sick").unwrap();
        assert_eq!(resolution.id, AbsenceId::new("id-sick-short"));
        assert_eq!(resolution.stage, MatchStage::Exact);
    }

    #[test]
    fn test_case_insensitive_match() {
        let resolution = resolve("Customer Care", "usa - pto").unwrap();
        assert_eq!(resolution.id, AbsenceId::new("id-pto"));
        assert_eq!(resolution.stage, MatchStage::CaseInsensitive);
    }

    #[test]
    fn test_substring_match_takes_first_catalog_entry() {
        // "Leave" is a substring of both leave entries; the first in
        // source order wins.
        let resolution = resolve("Customer Care", "Leave").unwrap();
        assert_eq!(resolution.id, AbsenceId::new("id-annual"));
        assert_eq!(resolution.stage, MatchStage::Substring);
    }

    #[test]
    fn test_global_prefix_fallback() {
        // No exact, case-insensitive or substring hit for the full query,
        // but "Global - Annual Leave" exists.
        let mut units = HashMap::new();
        units.insert(
            "Customer Care".to_string(),
            vec![absence("Global - Annual Leave", "id-annual")],
        );
        let catalog = BusinessUnitCatalog::from_units(units);

        let resolution = resolve_absence_id(
            &catalog,
            &BusinessUnitAliases::default(),
            "Customer Care",
            "Annual Leave",
        )
        .unwrap();
        assert_eq!(resolution.id, AbsenceId::new("id-annual"));
        assert_eq!(resolution.stage, MatchStage::GlobalPrefix);
    }

    #[test]
    fn test_unknown_business_unit_fails_before_name_stages() {
        assert_eq!(resolve("Cafeteria", "Sick"), None);
    }

    #[test]
    fn test_aliased_business_unit_resolves() {
        // "care" is an alias of "Customer Care".
        let resolution = resolve("care", "Sick").unwrap();
        assert_eq!(resolution.id, AbsenceId::new("id-sick-short"));
    }

    #[test]
    fn test_blank_inputs_never_resolve() {
        assert_eq!(resolve("Customer Care", ""), None);
        assert_eq!(resolve("", "Sick"), None);
    }

    #[test]
    fn test_unresolvable_name_returns_none() {
        assert_eq!(resolve("Customer Care", "Sabbatical"), None);
    }

    proptest! {
        /// Whenever a case-insensitive match exists, resolution is
        /// case-insensitively idempotent: any casing of the name yields
        /// the same id.
        #[test]
        fn prop_resolution_is_case_insensitive(
            index in 0usize..4,
            flips in proptest::collection::vec(any::<bool>(), 24),
        ) {
            let catalog = test_catalog();
            let aliases = BusinessUnitAliases::default();
            let name = catalog.absences("Customer Care")[index].name.clone();

            let cased: String = name
                .chars()
                .zip(flips.iter().cycle())
                .map(|(c, flip)| {
                    if *flip {
                        c.to_uppercase().next().unwrap_or(c)
                    } else {
                        c.to_lowercase().next().unwrap_or(c)
                    }
                })
                .collect();

            let original = resolve_absence_id(&catalog, &aliases, "Customer Care", &name);
            let recased = resolve_absence_id(&catalog, &aliases, "Customer Care", &cased);
            prop_assert_eq!(
                original.map(|r| r.id),
                recased.map(|r| r.id)
            );
        }
    }
}
