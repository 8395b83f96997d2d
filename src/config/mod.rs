//! Rate configuration for statutory payroll calculations.
//!
//! This module provides the strongly-typed rate configuration (pension and
//! health-insurance rates, pension ceiling, progressive tax bands) and a
//! loader for reading a configuration from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/zm/rates.yaml").unwrap();
//! println!("Pension ceiling: {}", loader.rates().pension_ceiling);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateConfiguration, TaxBand};
