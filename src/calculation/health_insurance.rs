//! Health insurance contribution calculation.
//!
//! This module computes the NHIMA health insurance contribution. Unlike
//! the pension contribution there is no ceiling: the full gross salary is
//! always the contribution base.

use rust_decimal::Decimal;

use super::{MONEY_SCALE, PERCENT_DIVISOR, clamp_non_negative};

/// Calculates the health insurance contribution.
///
/// The gross salary is clamped to zero, then the contribution is
/// `gross * rate / 100` rounded to two decimal places. No ceiling
/// applies.
///
/// # Arguments
///
/// * `gross_salary` - The gross salary before any deduction
/// * `rate` - The contribution rate, in percent
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_health_insurance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     calculate_health_insurance(Decimal::from(10_000), Decimal::from(2)),
///     Decimal::from_str("200.00").unwrap()
/// );
/// ```
pub fn calculate_health_insurance(gross_salary: Decimal, rate: Decimal) -> Decimal {
    let gross = clamp_non_negative(gross_salary);
    (gross * rate / PERCENT_DIVISOR).round_dp(MONEY_SCALE)
}
