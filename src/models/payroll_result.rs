//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated audit
//! structures that capture all outputs from a gross-to-net calculation.
//! Results are ephemeral: created fresh on each calculation and never
//! persisted by the engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DeductionLine, EarningLine};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one statutory
/// component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statutory scheme for this rule.
    pub statute_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation but may
/// require attention, such as a negative gross being clamped to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Creates an empty audit trace.
    pub fn empty() -> Self {
        Self {
            steps: vec![],
            warnings: vec![],
        }
    }
}

/// The complete result of a gross-to-net payroll calculation.
///
/// Captures the gross figure, the taxable base, each statutory component,
/// the employee-side deduction total and the resulting net pay, plus the
/// earning/deduction line items the gross was derived from (empty when the
/// calculation started from a flat gross figure).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{PayrollOptions, calculate_payroll_from_gross};
/// use rust_decimal::Decimal;
///
/// let result = calculate_payroll_from_gross(Decimal::from(10_000), &PayrollOptions::default());
/// assert_eq!(result.net_pay + result.total_deductions, result.gross_salary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for, when known.
    pub employee_id: Option<String>,
    /// The gross salary the calculation started from.
    pub gross_salary: Decimal,
    /// The base income tax was computed on.
    pub taxable_income: Decimal,
    /// The employee's pension contribution.
    pub pension_employee: Decimal,
    /// The employer's pension contribution (not an employee deduction).
    pub pension_employer: Decimal,
    /// The health insurance contribution.
    pub health_insurance: Decimal,
    /// The income tax payable.
    pub income_tax: Decimal,
    /// Total employee-side deductions (pension + health insurance + tax).
    pub total_deductions: Decimal,
    /// Net pay: gross salary minus total deductions.
    pub net_pay: Decimal,
    /// The earning lines the gross was derived from.
    pub earnings: Vec<EarningLine>,
    /// Structure-level deduction lines, echoed for display.
    pub deductions: Vec<DeductionLine>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl PayrollResult {
    /// Creates an all-zero result for an employee with no applicable
    /// salary structure.
    ///
    /// Absence is a legitimate, renderable empty state, not an error.
    pub fn empty(employee_id: Option<String>) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id,
            gross_salary: Decimal::ZERO,
            taxable_income: Decimal::ZERO,
            pension_employee: Decimal::ZERO,
            pension_employer: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            net_pay: Decimal::ZERO,
            earnings: vec![],
            deductions: vec![],
            audit_trace: AuditTrace::empty(),
        }
    }

    /// Returns true if every monetary field of the result is zero.
    pub fn is_zero(&self) -> bool {
        self.gross_salary.is_zero()
            && self.taxable_income.is_zero()
            && self.pension_employee.is_zero()
            && self.pension_employer.is_zero()
            && self.health_insurance.is_zero()
            && self.income_tax.is_zero()
            && self.total_deductions.is_zero()
            && self.net_pay.is_zero()
    }
}
