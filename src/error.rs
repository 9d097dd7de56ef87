//! Error types for the leave reconciliation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all hard failure conditions. Soft failures (unmappable absence types,
//! unparseable fields, rule-free categories) are absorbed into the output as
//! data and never surface here.

use thiserror::Error;

/// The main error type for the leave reconciliation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_recon::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A balance rule was structurally invalid.
    #[error("Invalid balance rule '{rule}': {message}")]
    InvalidRule {
        /// The name of the invalid rule.
        rule: String,
        /// A description of what made the rule invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
