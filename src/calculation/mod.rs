//! Statutory calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions for statutory
//! deductions: pension contributions capped at the statutory ceiling,
//! health insurance, progressive marginal income tax, and the
//! gross-to-net orchestrator that combines them into a payroll result.
//!
//! All functions are total over valid `Decimal` input: negative figures
//! are clamped to zero rather than rejected, so a stray bad value from
//! upstream degrades to a zero result instead of a failure.

mod health_insurance;
mod income_tax;
mod payroll;
mod pension;

use rust_decimal::Decimal;

pub use health_insurance::calculate_health_insurance;
pub use income_tax::calculate_income_tax;
pub use payroll::{PayrollOptions, calculate_payroll_from_gross};
pub use pension::calculate_pension;

/// The divisor converting percent rates to fractions.
pub const PERCENT_DIVISOR: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Decimal places used for rounded currency amounts.
pub const MONEY_SCALE: u32 = 2;

/// Clamps a monetary figure to the domain's natural floor of zero.
pub(crate) fn clamp_non_negative(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}
