//! Salary structure expansion.
//!
//! This module expands a salary structure into its earning and deduction
//! line items and the gross total the statutory calculator works from.

use rust_decimal::Decimal;

use crate::calculation::clamp_non_negative;
use crate::models::{DeductionLine, EarningLine, SalaryStructure};

/// The expanded form of a salary structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureExpansion {
    /// The earning lines, unchanged from the structure.
    pub earnings: Vec<EarningLine>,
    /// The deduction lines, unchanged from the structure.
    pub deductions: Vec<DeductionLine>,
    /// The gross total: the sum of earning amounts, or the fallback
    /// gross when the structure has no earnings.
    pub gross_total: Decimal,
}

/// Expands a salary structure into line items and a gross total.
///
/// Sums `amount` across the earning lines to produce the gross total and
/// returns the line items unchanged. Amounts are already resolved;
/// `formula` strings are opaque pass-through data and are never evaluated
/// here. When the structure has no earning lines the clamped
/// `fallback_gross` is used instead, which keeps the calculator usable
/// for employees paid a flat gross without a configured structure.
///
/// # Arguments
///
/// * `structure` - The structure to expand
/// * `fallback_gross` - Flat gross to use when the structure has no
///   earning lines
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{EarningLine, SalaryStructure};
/// use payroll_engine::resolver::expand_structure;
/// use rust_decimal::Decimal;
///
/// let structure = SalaryStructure {
///     name: "Monthly Standard 2024".to_string(),
///     company: "Acme Zambia Ltd".to_string(),
///     earnings: vec![
///         EarningLine {
///             component: "Basic".to_string(),
///             amount: Decimal::from(8_000),
///             is_tax_applicable: true,
///             depends_on_payment_days: true,
///             formula: None,
///         },
///         EarningLine {
///             component: "Housing Allowance".to_string(),
///             amount: Decimal::from(2_000),
///             is_tax_applicable: true,
///             depends_on_payment_days: false,
///             formula: None,
///         },
///     ],
///     deductions: vec![],
/// };
///
/// let expansion = expand_structure(&structure, Decimal::ZERO);
/// assert_eq!(expansion.gross_total, Decimal::from(10_000));
/// ```
pub fn expand_structure(structure: &SalaryStructure, fallback_gross: Decimal) -> StructureExpansion {
    let gross_total = if structure.earnings.is_empty() {
        clamp_non_negative(fallback_gross)
    } else {
        structure.earnings.iter().map(|line| line.amount).sum()
    };

    StructureExpansion {
        earnings: structure.earnings.clone(),
        deductions: structure.deductions.clone(),
        gross_total,
    }
}
