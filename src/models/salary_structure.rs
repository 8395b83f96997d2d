//! Salary structure models.
//!
//! This module defines the compensation template types: earning and
//! deduction line items, the named salary structure that owns them, and
//! the time-scoped assignment linking an employee to a structure.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single earning component within a salary structure.
///
/// Amounts are already resolved; `formula`, when present, is opaque
/// pass-through data for an external evaluator and is never interpreted
/// by this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningLine {
    /// The name of the component (e.g., "Basic", "Housing Allowance").
    pub component: String,
    /// The resolved amount for this component.
    pub amount: Decimal,
    /// Whether this component counts towards taxable income.
    pub is_tax_applicable: bool,
    /// Whether this component is prorated by days actually worked.
    pub depends_on_payment_days: bool,
    /// Optional formula string, carried through unevaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

/// A single deduction component within a salary structure.
///
/// Structure-level deductions are echoed to the caller for display; the
/// statutory deduction total is defined by the calculator, not by these
/// lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The name of the component (e.g., "Staff Loan Repayment").
    pub component: String,
    /// The resolved amount for this component.
    pub amount: Decimal,
    /// Whether this component reduces taxable income.
    pub is_tax_applicable: bool,
    /// Whether this component is prorated by days actually worked.
    pub depends_on_payment_days: bool,
    /// Optional formula string, carried through unevaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

/// A named compensation template owned by a company.
///
/// Structures are created and edited by HR configuration outside this
/// engine and arrive here as read-only inputs to the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// The unique name of the structure (e.g., "Monthly Standard 2024").
    pub name: String,
    /// The company that owns this structure.
    pub company: String,
    /// Ordered earning line items.
    pub earnings: Vec<EarningLine>,
    /// Ordered deduction line items.
    pub deductions: Vec<DeductionLine>,
}

/// Links an employee to a salary structure effective from a given date.
///
/// Multiple assignments may exist per employee over time; the resolver
/// selects the one with the most recent `from_date` on or before the
/// evaluation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureAssignment {
    /// The employee this assignment belongs to.
    pub employee_id: String,
    /// The name of the assigned salary structure.
    pub structure_name: String,
    /// The company scope of the assignment.
    pub company: String,
    /// The date from which this assignment is effective.
    pub from_date: NaiveDate,
}
