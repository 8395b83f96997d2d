//! Payroll preview composition.
//!
//! This module composes assignment resolution, structure lookup, structure
//! expansion and the statutory calculator into one call that turns an
//! employee and an evaluation date into a displayable payroll result.

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{PayrollOptions, calculate_payroll_from_gross};
use crate::models::{Employee, PayrollResult, SalaryStructure, StructureAssignment};

use super::{expand_structure, resolve_active_assignment};

/// Builds a payroll preview for an employee at a given date.
///
/// Pipeline: resolve the active assignment, fetch the named structure via
/// `structure_lookup` (the external-collaborator seam; records are
/// pre-fetched by the caller), expand it into a gross total, then run the
/// statutory calculation. The structure's earning and deduction lines are
/// echoed on the result for display.
///
/// When no assignment is active, or the lookup does not know the assigned
/// structure, the result has all-zero amounts: absence is a valid,
/// renderable state ("no salary structure assigned"), not an error.
///
/// # Arguments
///
/// * `employee` - The employee to preview payroll for
/// * `as_of` - The evaluation date
/// * `assignments` - Pre-fetched assignment records
/// * `structure_lookup` - Fetches a structure by name
/// * `options` - Rate configuration and calculator options
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::PayrollOptions;
/// use payroll_engine::models::Employee;
/// use payroll_engine::resolver::build_payroll_preview;
///
/// let employee = Employee {
///     id: "HR-EMP-00042".to_string(),
///     name: "Chileshe Mwamba".to_string(),
///     company: "Acme Zambia Ltd".to_string(),
/// };
/// let as_of = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
///
/// // No assignments: a renderable all-zero result, not an error.
/// let result = build_payroll_preview(&employee, as_of, &[], |_| None, &PayrollOptions::default());
/// assert!(result.is_zero());
/// assert_eq!(result.employee_id.as_deref(), Some("HR-EMP-00042"));
/// ```
pub fn build_payroll_preview<F>(
    employee: &Employee,
    as_of: NaiveDate,
    assignments: &[StructureAssignment],
    structure_lookup: F,
    options: &PayrollOptions,
) -> PayrollResult
where
    F: Fn(&str) -> Option<SalaryStructure>,
{
    let Some(assignment) = resolve_active_assignment(&employee.id, as_of, assignments) else {
        debug!(employee_id = %employee.id, %as_of, "No active structure assignment");
        return PayrollResult::empty(Some(employee.id.clone()));
    };

    let Some(structure) = structure_lookup(&assignment.structure_name) else {
        debug!(
            employee_id = %employee.id,
            structure = %assignment.structure_name,
            "Assigned structure not found"
        );
        return PayrollResult::empty(Some(employee.id.clone()));
    };

    let expansion = expand_structure(&structure, rust_decimal::Decimal::ZERO);

    debug!(
        employee_id = %employee.id,
        structure = %structure.name,
        gross = %expansion.gross_total,
        "Resolved salary structure"
    );

    let mut result = calculate_payroll_from_gross(expansion.gross_total, options);
    result.employee_id = Some(employee.id.clone());
    result.earnings = expansion.earnings;
    result.deductions = expansion.deductions;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeductionLine, EarningLine};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee() -> Employee {
        Employee {
            id: "HR-EMP-00042".to_string(),
            name: "Chileshe Mwamba".to_string(),
            company: "Acme Zambia Ltd".to_string(),
        }
    }

    fn assignment(structure_name: &str, from: NaiveDate) -> StructureAssignment {
        StructureAssignment {
            employee_id: "HR-EMP-00042".to_string(),
            structure_name: structure_name.to_string(),
            company: "Acme Zambia Ltd".to_string(),
            from_date: from,
        }
    }

    fn standard_structure(name: &str) -> SalaryStructure {
        SalaryStructure {
            name: name.to_string(),
            company: "Acme Zambia Ltd".to_string(),
            earnings: vec![
                EarningLine {
                    component: "Basic".to_string(),
                    amount: dec("8000.00"),
                    is_tax_applicable: true,
                    depends_on_payment_days: true,
                    formula: None,
                },
                EarningLine {
                    component: "Housing Allowance".to_string(),
                    amount: dec("2000.00"),
                    is_tax_applicable: true,
                    depends_on_payment_days: false,
                    formula: None,
                },
            ],
            deductions: vec![DeductionLine {
                component: "Staff Loan Repayment".to_string(),
                amount: dec("350.00"),
                is_tax_applicable: false,
                depends_on_payment_days: false,
                formula: None,
            }],
        }
    }

    #[test]
    fn test_full_pipeline_reference_scenario() {
        let assignments = vec![assignment("Monthly Standard 2024", date(2024, 6, 1))];

        let result = build_payroll_preview(
            &employee(),
            date(2024, 8, 1),
            &assignments,
            |name| Some(standard_structure(name)),
            &PayrollOptions::default(),
        );

        // Gross 10,000 from the two earning lines.
        assert_eq!(result.gross_salary, dec("10000.00"));
        assert_eq!(result.pension_employee, dec("500.00"));
        assert_eq!(result.health_insurance, dec("200.00"));
        assert_eq!(result.income_tax, dec("1141.00"));
        assert_eq!(result.net_pay, dec("8159.00"));
        assert_eq!(result.employee_id.as_deref(), Some("HR-EMP-00042"));
    }

    #[test]
    fn test_preview_echoes_structure_lines() {
        let assignments = vec![assignment("Monthly Standard 2024", date(2024, 6, 1))];

        let result = build_payroll_preview(
            &employee(),
            date(2024, 8, 1),
            &assignments,
            |name| Some(standard_structure(name)),
            &PayrollOptions::default(),
        );

        assert_eq!(result.earnings.len(), 2);
        assert_eq!(result.deductions.len(), 1);
        assert_eq!(result.deductions[0].component, "Staff Loan Repayment");
        // Structure-level deductions are display data, not part of the
        // statutory total.
        assert_eq!(result.total_deductions, dec("1841.00"));
    }

    #[test]
    fn test_preview_selects_latest_assignment() {
        let assignments = vec![
            assignment("Monthly Standard 2023", date(2024, 1, 1)),
            assignment("Monthly Standard 2024", date(2024, 6, 1)),
        ];

        let result = build_payroll_preview(
            &employee(),
            date(2024, 8, 1),
            &assignments,
            |name| {
                // Only the 2024 structure should ever be requested.
                assert_eq!(name, "Monthly Standard 2024");
                Some(standard_structure(name))
            },
            &PayrollOptions::default(),
        );

        assert!(!result.is_zero());
    }

    #[test]
    fn test_no_assignment_yields_zero_result() {
        let result = build_payroll_preview(
            &employee(),
            date(2023, 1, 1),
            &[assignment("Monthly Standard 2024", date(2024, 6, 1))],
            |name| Some(standard_structure(name)),
            &PayrollOptions::default(),
        );

        assert!(result.is_zero());
        assert!(result.earnings.is_empty());
    }

    #[test]
    fn test_unknown_structure_yields_zero_result() {
        let assignments = vec![assignment("Deleted Structure", date(2024, 6, 1))];

        let result = build_payroll_preview(
            &employee(),
            date(2024, 8, 1),
            &assignments,
            |_| None,
            &PayrollOptions::default(),
        );

        assert!(result.is_zero());
        assert_eq!(result.employee_id.as_deref(), Some("HR-EMP-00042"));
    }

    #[test]
    fn test_structure_without_earnings_yields_zero_gross() {
        let assignments = vec![assignment("Empty Structure", date(2024, 6, 1))];

        let result = build_payroll_preview(
            &employee(),
            date(2024, 8, 1),
            &assignments,
            |name| {
                Some(SalaryStructure {
                    name: name.to_string(),
                    company: "Acme Zambia Ltd".to_string(),
                    earnings: vec![],
                    deductions: vec![],
                })
            },
            &PayrollOptions::default(),
        );

        assert!(result.is_zero());
    }

    #[test]
    fn test_conservation_holds_through_pipeline() {
        let assignments = vec![assignment("Monthly Standard 2024", date(2024, 6, 1))];

        let result = build_payroll_preview(
            &employee(),
            date(2024, 8, 1),
            &assignments,
            |name| Some(standard_structure(name)),
            &PayrollOptions::default(),
        );

        assert_eq!(
            result.net_pay + result.total_deductions,
            result.gross_salary
        );
    }
}
