//! Configuration types for the reconciliation engine.
//!
//! This module contains the strongly-typed structures deserialized from the
//! configuration directory: the WFM absence catalog dump (JSON), the
//! business-unit alias table and the balance-rule table (YAML).

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::AbsenceId;

/// One absence as listed in the WFM configuration dump.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogAbsence {
    /// The absence name as the WFM system spells it.
    pub name: String,
    /// The canonical id behind that name.
    pub id: AbsenceId,
}

/// The per-business-unit absence catalog.
///
/// Source order of each unit's absence list is preserved: the substring
/// resolution stage depends on it.
#[derive(Debug, Clone, Default)]
pub struct BusinessUnitCatalog {
    units: HashMap<String, Vec<CatalogAbsence>>,
}

impl BusinessUnitCatalog {
    /// Builds a catalog from already-cleaned unit lists.
    pub fn from_units(units: HashMap<String, Vec<CatalogAbsence>>) -> Self {
        Self { units }
    }

    /// Returns true when the business unit is a catalog key.
    pub fn contains_unit(&self, unit: &str) -> bool {
        self.units.contains_key(unit)
    }

    /// The absences of a business unit, in source order. Unknown units
    /// yield an empty slice.
    pub fn absences(&self, unit: &str) -> &[CatalogAbsence] {
        self.units.get(unit).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Raw shape of one business unit in the catalog dump.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalogUnit {
    /// The unit's absence listing, absent for units without one.
    #[serde(default)]
    pub absences: Option<RawAbsenceListing>,
}

/// Raw shape of the `absences` envelope in the catalog dump.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAbsenceListing {
    /// The result array of the WFM listing call.
    #[serde(rename = "Result", default)]
    pub result: Vec<RawCatalogEntry>,
}

/// Raw shape of one absence entry in the catalog dump.
///
/// Entries missing a name or id are skipped during conversion, not fatal.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalogEntry {
    /// The absence name, when present.
    #[serde(rename = "Name")]
    pub name: Option<String>,
    /// The absence id, when present.
    #[serde(rename = "Id")]
    pub id: Option<String>,
}

/// One business-unit alias: a known label variant and its canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AliasEntry {
    /// The variant as it appears in source data, lower-cased.
    pub from: String,
    /// The canonical catalog key it maps to.
    pub to: String,
}

/// Alias config file structure (`aliases.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct AliasesConfig {
    /// The alias entries, in precedence order.
    pub aliases: Vec<AliasEntry>,
}

/// The ordered business-unit alias table.
///
/// Table order matters for the partial-match stage of canonicalization, so
/// entries are kept as a sequence rather than a map.
#[derive(Debug, Clone)]
pub struct BusinessUnitAliases {
    entries: Vec<AliasEntry>,
}

impl BusinessUnitAliases {
    /// Builds an alias table from explicit entries.
    pub fn from_entries(entries: Vec<AliasEntry>) -> Self {
        Self { entries }
    }

    /// The alias entries, in precedence order.
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }
}

impl Default for BusinessUnitAliases {
    /// The built-in table covering the known label variants of each
    /// business unit. Overridden entirely when `aliases.yaml` is present.
    fn default() -> Self {
        let builtin = [
            ("global security", "Global Security"),
            ("global - security", "Global Security"),
            ("security", "Global Security"),
            ("customer care", "Customer Care"),
            ("global - customer care", "Customer Care"),
            ("care", "Customer Care"),
            ("collections", "Collections"),
            ("global - collections", "Collections"),
            ("it", "IT"),
            ("information technology", "IT"),
            ("global - it", "IT"),
            ("hr", "Human Resources"),
            ("human resources", "Human Resources"),
            ("global - hr", "Human Resources"),
            ("finance", "Finance"),
            ("global - finance", "Finance"),
            ("operations", "Operations"),
            ("global - operations", "Operations"),
            ("sales", "Sales"),
            ("global - sales", "Sales"),
            ("marketing", "Marketing"),
            ("global - marketing", "Marketing"),
        ];
        Self {
            entries: builtin
                .into_iter()
                .map(|(from, to)| AliasEntry {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }
}

/// How a rule computes the accrued amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualMethod {
    /// The rule's amount, unchanged.
    Fixed,
    /// The rule's amount, prorated by the employment year-start date.
    Prorate,
    /// A per-quarter grant for each quarter remaining in the year.
    QuarterlyGrant,
}

/// The calendar basis a `prorate` rule uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProrationBasis {
    /// Remaining calendar days over days in the year.
    CalendarDays,
    /// Remaining ISO weeks over 52.
    IsoWeeks,
}

fn default_priority() -> u32 {
    999
}

/// One declarative balance rule.
#[derive(Debug, Clone, Deserialize)]
pub struct AbsenceRule {
    /// Rule name, used in logs and validation errors.
    pub name: String,
    /// Evaluation priority, ascending; unspecified rules sort last.
    #[serde(default = "default_priority")]
    pub priority: u32,
    /// Field-name to expected-value conditions, all of which must match
    /// (trimmed, case-insensitive).
    #[serde(default)]
    pub conditions: BTreeMap<String, String>,
    /// The accrual computation method.
    pub accrual: AccrualMethod,
    /// Base amount for `fixed` and `prorate` rules.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Calendar basis for `prorate` rules; defaults to calendar days.
    #[serde(default)]
    pub basis: Option<ProrationBasis>,
    /// Grant per remaining quarter for `quarterly_grant` rules.
    #[serde(default)]
    pub per_quarter: Option<Decimal>,
    /// Clip a negative beginning-year balance to zero before rounding.
    #[serde(default)]
    pub clamp_negative_balance: bool,
}

/// A label-prefix driven unit conversion applied to the HR balance before
/// rule matching (e.g. hours to minutes for absence types tracked in
/// minutes).
#[derive(Debug, Clone, Deserialize)]
pub struct UnitConversion {
    /// Lower-cased label prefix the conversion applies to.
    pub prefix: String,
    /// Multiplier applied to the beginning-year balance.
    pub factor: Decimal,
}

/// Rule config file structure (`rules.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// The balance rules.
    #[serde(default)]
    pub rules: Vec<AbsenceRule>,
    /// Unit conversions by label prefix.
    #[serde(default)]
    pub unit_conversions: Vec<UnitConversion>,
}

/// The validated, priority-sorted rule table.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<AbsenceRule>,
    unit_conversions: Vec<UnitConversion>,
}

impl RuleSet {
    /// Validates and orders a rule config.
    ///
    /// Fails fast on structurally invalid rules: a `prorate` rule without
    /// an amount or a `quarterly_grant` rule without a per-quarter grant
    /// indicates a broken config, not sparse data.
    pub fn new(config: RulesConfig) -> EngineResult<Self> {
        for rule in &config.rules {
            match rule.accrual {
                AccrualMethod::Prorate if rule.amount.is_none() => {
                    return Err(EngineError::InvalidRule {
                        rule: rule.name.clone(),
                        message: "prorate rule requires an amount".to_string(),
                    });
                }
                AccrualMethod::QuarterlyGrant if rule.per_quarter.is_none() => {
                    return Err(EngineError::InvalidRule {
                        rule: rule.name.clone(),
                        message: "quarterly_grant rule requires per_quarter".to_string(),
                    });
                }
                _ => {}
            }
        }

        let mut rules = config.rules;
        rules.sort_by_key(|r| r.priority);
        Ok(Self {
            rules,
            unit_conversions: config.unit_conversions,
        })
    }

    /// An empty rule set: every category passes through.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            unit_conversions: Vec::new(),
        }
    }

    /// The rules in ascending priority order.
    pub fn rules(&self) -> &[AbsenceRule] {
        &self.rules
    }

    /// The balance unit factor for a lower-cased absence label, if any
    /// conversion prefix matches. First matching prefix wins.
    pub fn unit_factor(&self, absence_key: &str) -> Option<Decimal> {
        self.unit_conversions
            .iter()
            .find(|c| absence_key.starts_with(c.prefix.as_str()))
            .map(|c| c.factor)
    }
}
