//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a statutory
//! rate configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::RateConfiguration;

/// Loads and provides access to a statutory rate configuration.
///
/// The `ConfigLoader` reads a YAML rates file, validates its tax band
/// table, and exposes the resulting [`RateConfiguration`].
///
/// # File Format
///
/// ```text
/// pension_employee_rate: "5"
/// pension_employer_rate: "5"
/// health_insurance_rate: "2"
/// pension_ceiling: "29816.67"
/// tax_bands:
///   - lower_bound: "0"
///     upper_bound: "5100"
///     rate: "0"
///   - lower_bound: "5100"
///     upper_bound: null
///     rate: "20"
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/zm/rates.yaml").unwrap();
/// println!("Health insurance rate: {}%", loader.rates().health_insurance_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: RateConfiguration,
}

impl ConfigLoader {
    /// Loads a rate configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rates file (e.g., "./config/zm/rates.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The tax band table violates an invariant (`InvalidTaxBands`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rates: RateConfiguration =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        rates.validate()?;

        debug!(path = %path_str, bands = rates.tax_bands.len(), "Loaded rate configuration");

        Ok(Self { rates })
    }

    /// Returns the loaded rate configuration.
    pub fn rates(&self) -> &RateConfiguration {
        &self.rates
    }
}
