//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the WFM
//! absence catalog, the business-unit alias table and the balance-rule
//! table from a configuration directory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::AbsenceId;

use super::types::{
    AliasesConfig, BusinessUnitAliases, BusinessUnitCatalog, CatalogAbsence, RawCatalogUnit,
    RuleSet, RulesConfig,
};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads the configuration directory once at startup and
/// exposes the catalog, alias table and rule set as immutable references.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── catalog.json   # WFM absence catalog dump, keyed by business unit
/// ├── rules.yaml     # declarative balance rules
/// └── aliases.yaml   # optional business-unit alias overrides
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_recon::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// assert!(loader.catalog().contains_unit("Customer Care"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: BusinessUnitCatalog,
    aliases: BusinessUnitAliases,
    rules: RuleSet,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when `catalog.json` or `rules.yaml` is
    /// missing, `ConfigParseError` when a file fails to parse, and
    /// `InvalidRule` when the rule table fails validation. A missing
    /// `aliases.yaml` is not an error; the built-in table is used.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let catalog_path = path.join("catalog.json");
        let raw_catalog = Self::load_json::<HashMap<String, RawCatalogUnit>>(&catalog_path)?;
        let catalog = Self::clean_catalog(raw_catalog);

        let rules_path = path.join("rules.yaml");
        let rules_config = Self::load_yaml::<RulesConfig>(&rules_path)?;
        let rules = RuleSet::new(rules_config)?;

        let aliases_path = path.join("aliases.yaml");
        let aliases = if aliases_path.exists() {
            let config = Self::load_yaml::<AliasesConfig>(&aliases_path)?;
            BusinessUnitAliases::from_entries(config.aliases)
        } else {
            BusinessUnitAliases::default()
        };

        Ok(Self {
            catalog,
            aliases,
            rules,
        })
    }

    /// Loads and parses a JSON file.
    fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Converts the raw catalog dump into the clean per-unit listing,
    /// skipping entries missing a name or id and preserving source order.
    fn clean_catalog(raw: HashMap<String, RawCatalogUnit>) -> BusinessUnitCatalog {
        let units = raw
            .into_iter()
            .map(|(unit, value)| {
                let absences = value
                    .absences
                    .map(|listing| listing.result)
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|entry| match (entry.name, entry.id) {
                        (Some(name), Some(id)) => Some(CatalogAbsence {
                            name,
                            id: AbsenceId::new(id),
                        }),
                        _ => None,
                    })
                    .collect();
                (unit, absences)
            })
            .collect();
        BusinessUnitCatalog::from_units(units)
    }

    /// Returns the absence catalog.
    pub fn catalog(&self) -> &BusinessUnitCatalog {
        &self.catalog
    }

    /// Returns the business-unit alias table.
    pub fn aliases(&self) -> &BusinessUnitAliases {
        &self.aliases
    }

    /// Returns the validated rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
