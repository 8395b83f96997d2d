//! Configuration types for statutory payroll calculations.
//!
//! This module contains the strongly-typed rate configuration structures
//! that are deserialized from YAML configuration files or constructed from
//! the built-in statutory defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single band in a progressive income tax table.
///
/// The band's rate applies only to the slice of taxable income falling
/// within `[lower_bound, upper_bound]`. The top band of a table has
/// `upper_bound = None` and absorbs all remaining income.
///
/// # Invariants
///
/// Within a [`RateConfiguration`], bands must be contiguous and ordered
/// ascending by `lower_bound`, and exactly the last band is unbounded.
/// These invariants are checked by [`RateConfiguration::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// The inclusive lower bound of the band.
    pub lower_bound: Decimal,
    /// The inclusive upper bound of the band, or `None` for the top band.
    pub upper_bound: Option<Decimal>,
    /// The marginal rate applied within this band, in percent.
    pub rate: Decimal,
}

/// The complete set of statutory rates used by the calculator.
///
/// This is an immutable value: rates are never mutated in place, a new
/// configuration is produced when rates change. The `Default` impl
/// reproduces the statutory Zambian rates observed in production:
/// 5%/5% employee/employer pension, 2% health insurance, a pension
/// ceiling of 29,816.67 and a four-band progressive PAYE table with a
/// tax-free band up to 5,100.
///
/// # Example
///
/// ```
/// use payroll_engine::config::RateConfiguration;
/// use rust_decimal::Decimal;
///
/// let rates = RateConfiguration::default();
/// assert_eq!(rates.pension_employee_rate, Decimal::from(5));
/// assert_eq!(rates.tax_bands.len(), 4);
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfiguration {
    /// The employee's share of the pension contribution, in percent.
    pub pension_employee_rate: Decimal,
    /// The employer's share of the pension contribution, in percent.
    pub pension_employer_rate: Decimal,
    /// The health insurance contribution rate, in percent.
    pub health_insurance_rate: Decimal,
    /// The maximum income subject to pension contribution.
    pub pension_ceiling: Decimal,
    /// The progressive tax band table, ordered ascending by lower bound.
    pub tax_bands: Vec<TaxBand>,
}

impl Default for RateConfiguration {
    fn default() -> Self {
        Self {
            pension_employee_rate: Decimal::from(5),
            pension_employer_rate: Decimal::from(5),
            health_insurance_rate: Decimal::from(2),
            // NAPSA contribution ceiling, in kwacha.
            pension_ceiling: Decimal::new(2_981_667, 2),
            tax_bands: vec![
                TaxBand {
                    lower_bound: Decimal::ZERO,
                    upper_bound: Some(Decimal::from(5_100)),
                    rate: Decimal::ZERO,
                },
                TaxBand {
                    lower_bound: Decimal::from(5_100),
                    upper_bound: Some(Decimal::from(7_100)),
                    rate: Decimal::from(20),
                },
                TaxBand {
                    lower_bound: Decimal::from(7_100),
                    upper_bound: Some(Decimal::from(9_200)),
                    rate: Decimal::from(30),
                },
                TaxBand {
                    lower_bound: Decimal::from(9_200),
                    upper_bound: None,
                    rate: Decimal::from(37),
                },
            ],
        }
    }
}

impl RateConfiguration {
    /// Checks the structural invariants of the configuration.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the configuration is valid, or
    /// [`EngineError::InvalidTaxBands`] if:
    /// - the band table is empty
    /// - any rate or bound is negative
    /// - bands are not ordered ascending and contiguous
    /// - any band other than the last is unbounded, or the last band is
    ///   bounded
    pub fn validate(&self) -> EngineResult<()> {
        if self.tax_bands.is_empty() {
            return Err(EngineError::InvalidTaxBands {
                message: "band table is empty".to_string(),
            });
        }

        if self.pension_employee_rate < Decimal::ZERO
            || self.pension_employer_rate < Decimal::ZERO
            || self.health_insurance_rate < Decimal::ZERO
            || self.pension_ceiling < Decimal::ZERO
        {
            return Err(EngineError::InvalidTaxBands {
                message: "rates and ceiling must be non-negative".to_string(),
            });
        }

        let last_index = self.tax_bands.len() - 1;
        for (i, band) in self.tax_bands.iter().enumerate() {
            if band.rate < Decimal::ZERO || band.lower_bound < Decimal::ZERO {
                return Err(EngineError::InvalidTaxBands {
                    message: format!("band {} has a negative bound or rate", i),
                });
            }

            match band.upper_bound {
                Some(upper) => {
                    if i == last_index {
                        return Err(EngineError::InvalidTaxBands {
                            message: "last band must be unbounded".to_string(),
                        });
                    }
                    if upper <= band.lower_bound {
                        return Err(EngineError::InvalidTaxBands {
                            message: format!("band {} upper bound not above lower bound", i),
                        });
                    }
                    // Contiguity: the next band starts where this one ends.
                    if self.tax_bands[i + 1].lower_bound != upper {
                        return Err(EngineError::InvalidTaxBands {
                            message: format!("gap or overlap between bands {} and {}", i, i + 1),
                        });
                    }
                }
                None => {
                    if i != last_index {
                        return Err(EngineError::InvalidTaxBands {
                            message: format!("band {} is unbounded but not last", i),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
