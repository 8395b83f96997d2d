//! Progressive income tax calculation.
//!
//! This module computes PAYE income tax by walking a progressive marginal
//! band table: each band's rate applies only to the slice of income that
//! falls within the band, and the unbounded top band absorbs everything
//! above it. This is marginal-bracket taxation, not flat-rate-on-total.

use rust_decimal::Decimal;

use crate::config::TaxBand;

use super::{MONEY_SCALE, PERCENT_DIVISOR, clamp_non_negative};

/// Calculates income tax over a progressive marginal band table.
///
/// The taxable income is clamped to zero; a zero or negative income yields
/// zero tax. For each band the taxed slice is
/// `max(0, min(income, upper) - lower)` (the top band uses the income
/// itself as its upper bound), and the band contributes
/// `slice * rate / 100`. The summed tax is rounded to two decimal places.
///
/// Income below the first band's lower bound is untaxed, which yields the
/// tax-free threshold behaviour when the table starts above zero.
///
/// # Arguments
///
/// * `taxable_income` - The base to tax, after pre-tax deductions
/// * `bands` - The band table, ordered ascending by lower bound
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use payroll_engine::config::RateConfiguration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bands = RateConfiguration::default().tax_bands;
///
/// // 9,500 = 5,100 @ 0% + 2,000 @ 20% + 2,100 @ 30% + 300 @ 37%
/// assert_eq!(
///     calculate_income_tax(Decimal::from(9_500), &bands),
///     Decimal::from_str("1141.00").unwrap()
/// );
///
/// // Entirely inside the tax-free band.
/// assert_eq!(calculate_income_tax(Decimal::from(3_000), &bands), Decimal::ZERO);
/// ```
pub fn calculate_income_tax(taxable_income: Decimal, bands: &[TaxBand]) -> Decimal {
    let income = clamp_non_negative(taxable_income);
    if income.is_zero() {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    for band in bands {
        let upper = band.upper_bound.unwrap_or(income);
        let slice = income.min(upper) - band.lower_bound;
        if slice <= Decimal::ZERO {
            continue;
        }
        tax += slice * band.rate / PERCENT_DIVISOR;
    }

    tax.round_dp(MONEY_SCALE)
}
