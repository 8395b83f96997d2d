//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The statutory calculator itself never fails (invalid numeric input is
//! clamped to zero); errors arise only at the configuration-loading and
//! payload-normalization boundaries.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
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

    /// The tax band table violated an ordering or contiguity invariant.
    #[error("Invalid tax band table: {message}")]
    InvalidTaxBands {
        /// A description of the violated invariant.
        message: String,
    },

    /// A salary structure record was invalid or contained inconsistent data.
    #[error("Invalid salary structure '{name}': {message}")]
    InvalidStructure {
        /// The name of the invalid structure.
        name: String,
        /// A description of what made the structure invalid.
        message: String,
    },

    /// A structure assignment record was invalid or contained inconsistent data.
    #[error("Invalid assignment field '{field}': {message}")]
    InvalidAssignment {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
