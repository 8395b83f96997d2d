//! Pension contribution calculation.
//!
//! This module computes the NAPSA pension contribution for one side of the
//! scheme (employee or employer). The contribution base is capped at the
//! statutory ceiling, so income above the ceiling is not pensionable.

use rust_decimal::Decimal;

use super::{MONEY_SCALE, PERCENT_DIVISOR, clamp_non_negative};

/// Calculates a pension contribution for one share of the scheme.
///
/// The contribution base is `min(gross_salary, ceiling)`, with the gross
/// clamped to zero first; the result is `base * rate / 100` rounded to
/// two decimal places. Employee and employer shares are computed by two
/// calls with their respective rates.
///
/// # Arguments
///
/// * `gross_salary` - The gross salary before any deduction
/// * `rate` - The contribution rate for this share, in percent
/// * `ceiling` - The maximum income subject to pension contribution
///
/// # Statutory Reference
///
/// NAPSA contributions are levied on earnings up to a ceiling published
/// annually; earnings above it attract no contribution.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_pension;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ceiling = Decimal::from_str("29816.67").unwrap();
/// let rate = Decimal::from(5);
///
/// // Below the ceiling the full gross is pensionable.
/// assert_eq!(
///     calculate_pension(Decimal::from(10_000), rate, ceiling),
///     Decimal::from_str("500.00").unwrap()
/// );
///
/// // Above the ceiling the contribution stops growing.
/// assert_eq!(
///     calculate_pension(Decimal::from(1_000_000), rate, ceiling),
///     calculate_pension(ceiling, rate, ceiling)
/// );
/// ```
pub fn calculate_pension(gross_salary: Decimal, rate: Decimal, ceiling: Decimal) -> Decimal {
    let gross = clamp_non_negative(gross_salary);
    let base = gross.min(ceiling);
    (base * rate / PERCENT_DIVISOR).round_dp(MONEY_SCALE)
}
