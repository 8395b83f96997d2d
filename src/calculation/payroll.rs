//! Gross-to-net payroll orchestration.
//!
//! This module combines the statutory component calculations into a single
//! [`PayrollResult`]: employee and employer pension, health insurance, and
//! income tax on the pension-reduced taxable base, with an audit step per
//! component.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::RateConfiguration;
use crate::models::{AuditStep, AuditTrace, AuditWarning, PayrollResult};

use super::{
    calculate_health_insurance, calculate_income_tax, calculate_pension, clamp_non_negative,
};

/// Options for a gross-to-net calculation.
///
/// The default carries the statutory ZM rate configuration and no taxable
/// income override. Callers override `rates` to calculate under a
/// different rate table, and set `taxable_income_override` when an
/// external salary structure already encodes a different taxable base.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PayrollOptions {
    /// The rate configuration to calculate under.
    pub rates: RateConfiguration,
    /// Overrides the computed taxable income (gross minus employee
    /// pension) when set.
    pub taxable_income_override: Option<Decimal>,
}

/// Calculates a full payroll result from a gross salary.
///
/// Computes the employee and employer pension shares, health insurance,
/// taxable income as gross minus the employee pension (the pension
/// contribution is pre-tax) unless overridden, and income tax over the
/// configured band table. Total deductions are the employee-side sum
/// (employee pension + health insurance + income tax); net pay is gross
/// minus total deductions, so the conservation law
/// `net_pay + total_deductions == gross` holds for any non-negative gross.
///
/// There are no failure modes: negative input is clamped to zero and
/// produces a degenerate all-zero result with a warning on the audit
/// trace.
///
/// # Arguments
///
/// * `gross_salary` - The gross salary to calculate from
/// * `options` - Rate configuration and optional taxable income override
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{PayrollOptions, calculate_payroll_from_gross};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_payroll_from_gross(Decimal::from(10_000), &PayrollOptions::default());
///
/// assert_eq!(result.pension_employee, Decimal::from_str("500.00").unwrap());
/// assert_eq!(result.health_insurance, Decimal::from_str("200.00").unwrap());
/// assert_eq!(result.income_tax, Decimal::from_str("1141.00").unwrap());
/// assert_eq!(result.net_pay, Decimal::from_str("8159.00").unwrap());
/// ```
pub fn calculate_payroll_from_gross(
    gross_salary: Decimal,
    options: &PayrollOptions,
) -> PayrollResult {
    let rates = &options.rates;
    let gross = clamp_non_negative(gross_salary);

    let mut warnings = Vec::new();
    if gross != gross_salary {
        warnings.push(AuditWarning {
            code: "GROSS_CLAMPED".to_string(),
            message: format!("gross salary {} clamped to zero", gross_salary),
            severity: "low".to_string(),
        });
    }

    let pension_employee =
        calculate_pension(gross, rates.pension_employee_rate, rates.pension_ceiling);
    let pension_employer =
        calculate_pension(gross, rates.pension_employer_rate, rates.pension_ceiling);
    let health_insurance = calculate_health_insurance(gross, rates.health_insurance_rate);

    // The employee pension contribution is pre-tax.
    let taxable_income = match options.taxable_income_override {
        Some(override_base) => clamp_non_negative(override_base),
        None => gross - pension_employee,
    };
    let income_tax = calculate_income_tax(taxable_income, &rates.tax_bands);

    let total_deductions = pension_employee + health_insurance + income_tax;
    let net_pay = gross - total_deductions;

    let steps = vec![
        AuditStep {
            step_number: 1,
            rule_id: "pension_contribution".to_string(),
            rule_name: "Pension Contribution".to_string(),
            statute_ref: "NAPSA".to_string(),
            input: serde_json::json!({
                "gross_salary": gross.to_string(),
                "rate": rates.pension_employee_rate.to_string(),
                "ceiling": rates.pension_ceiling.to_string()
            }),
            output: serde_json::json!({
                "employee_amount": pension_employee.to_string(),
                "employer_amount": pension_employer.to_string()
            }),
            reasoning: format!(
                "Pensionable base min({}, {}) at {}% employee share = {}",
                gross, rates.pension_ceiling, rates.pension_employee_rate, pension_employee
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "health_insurance".to_string(),
            rule_name: "Health Insurance Contribution".to_string(),
            statute_ref: "NHIMA".to_string(),
            input: serde_json::json!({
                "gross_salary": gross.to_string(),
                "rate": rates.health_insurance_rate.to_string()
            }),
            output: serde_json::json!({
                "amount": health_insurance.to_string()
            }),
            reasoning: format!(
                "Uncapped contribution {} at {}% = {}",
                gross, rates.health_insurance_rate, health_insurance
            ),
        },
        AuditStep {
            step_number: 3,
            rule_id: "income_tax".to_string(),
            rule_name: "Income Tax".to_string(),
            statute_ref: "PAYE".to_string(),
            input: serde_json::json!({
                "taxable_income": taxable_income.to_string(),
                "bands": rates.tax_bands.len(),
                "overridden": options.taxable_income_override.is_some()
            }),
            output: serde_json::json!({
                "amount": income_tax.to_string()
            }),
            reasoning: format!(
                "Progressive band walk over taxable income {} = {}",
                taxable_income, income_tax
            ),
        },
    ];

    PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: None,
        gross_salary: gross,
        taxable_income,
        pension_employee,
        pension_employer,
        health_insurance,
        income_tax,
        total_deductions,
        net_pay,
        earnings: vec![],
        deductions: vec![],
        audit_trace: AuditTrace { steps, warnings },
    }
}
