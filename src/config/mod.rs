//! Configuration loading and types for the reconciliation engine.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AbsenceRule, AccrualMethod, AliasEntry, AliasesConfig, BusinessUnitAliases,
    BusinessUnitCatalog, CatalogAbsence, ProrationBasis, RawAbsenceListing, RawCatalogEntry,
    RawCatalogUnit, RuleSet, RulesConfig, UnitConversion,
};
