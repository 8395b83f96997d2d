//! Active assignment resolution.
//!
//! This module selects the single structure assignment that applies to an
//! employee on a given evaluation date.

use chrono::NaiveDate;

use crate::models::StructureAssignment;

/// Resolves the active structure assignment for an employee.
///
/// Filters `assignments` to those belonging to `employee_id`, then selects
/// the one with the greatest `from_date` that is on or before `as_of`.
/// Dates are compared as calendar values. When two qualifying assignments
/// share an identical `from_date` the first encountered wins, which keeps
/// the pick deterministic for a given input order.
///
/// # Arguments
///
/// * `employee_id` - The employee whose assignment is sought
/// * `as_of` - The evaluation date
/// * `assignments` - The assignment records to search
///
/// # Returns
///
/// The active assignment, or `None` if no assignment for the employee is
/// effective on or before the evaluation date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::models::StructureAssignment;
/// use payroll_engine::resolver::resolve_active_assignment;
///
/// let assignments = vec![
///     StructureAssignment {
///         employee_id: "HR-EMP-00042".to_string(),
///         structure_name: "Monthly Standard 2023".to_string(),
///         company: "Acme Zambia Ltd".to_string(),
///         from_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     },
///     StructureAssignment {
///         employee_id: "HR-EMP-00042".to_string(),
///         structure_name: "Monthly Standard 2024".to_string(),
///         company: "Acme Zambia Ltd".to_string(),
///         from_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     },
/// ];
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
/// let active = resolve_active_assignment("HR-EMP-00042", as_of, &assignments).unwrap();
/// assert_eq!(active.structure_name, "Monthly Standard 2024");
/// ```
pub fn resolve_active_assignment<'a>(
    employee_id: &str,
    as_of: NaiveDate,
    assignments: &'a [StructureAssignment],
) -> Option<&'a StructureAssignment> {
    let mut active: Option<&StructureAssignment> = None;

    for assignment in assignments {
        if assignment.employee_id != employee_id || assignment.from_date > as_of {
            continue;
        }
        // Strictly-greater comparison keeps the first encountered on ties.
        match active {
            Some(current) if assignment.from_date <= current.from_date => {}
            _ => active = Some(assignment),
        }
    }

    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assignment(employee_id: &str, structure_name: &str, from: NaiveDate) -> StructureAssignment {
        StructureAssignment {
            employee_id: employee_id.to_string(),
            structure_name: structure_name.to_string(),
            company: "Acme Zambia Ltd".to_string(),
            from_date: from,
        }
    }

    #[test]
    fn test_selects_most_recent_not_after_date() {
        let assignments = vec![
            assignment("emp_a", "structure_2023", date(2024, 1, 1)),
            assignment("emp_a", "structure_2024", date(2024, 6, 1)),
        ];

        let active = resolve_active_assignment("emp_a", date(2024, 8, 1), &assignments).unwrap();
        assert_eq!(active.structure_name, "structure_2024");
    }

    #[test]
    fn test_ignores_assignments_effective_in_future() {
        let assignments = vec![
            assignment("emp_a", "structure_2023", date(2024, 1, 1)),
            assignment("emp_a", "structure_2024", date(2024, 6, 1)),
        ];

        let active = resolve_active_assignment("emp_a", date(2024, 3, 15), &assignments).unwrap();
        assert_eq!(active.structure_name, "structure_2023");
    }

    #[test]
    fn test_none_before_any_assignment() {
        let assignments = vec![assignment("emp_a", "structure_2024", date(2024, 6, 1))];

        assert!(resolve_active_assignment("emp_a", date(2024, 1, 1), &assignments).is_none());
    }

    #[test]
    fn test_none_for_unknown_employee() {
        let assignments = vec![assignment("emp_a", "structure_2024", date(2024, 1, 1))];

        assert!(resolve_active_assignment("emp_b", date(2024, 8, 1), &assignments).is_none());
    }

    #[test]
    fn test_none_for_empty_assignments() {
        assert!(resolve_active_assignment("emp_a", date(2024, 8, 1), &[]).is_none());
    }

    #[test]
    fn test_assignment_effective_on_evaluation_date() {
        let assignments = vec![assignment("emp_a", "structure_2024", date(2024, 6, 1))];

        let active = resolve_active_assignment("emp_a", date(2024, 6, 1), &assignments).unwrap();
        assert_eq!(active.structure_name, "structure_2024");
    }

    #[test]
    fn test_filters_other_employees_assignments() {
        let assignments = vec![
            assignment("emp_a", "structure_a", date(2024, 1, 1)),
            assignment("emp_b", "structure_b", date(2024, 7, 1)),
        ];

        let active = resolve_active_assignment("emp_a", date(2024, 8, 1), &assignments).unwrap();
        assert_eq!(active.structure_name, "structure_a");
    }

    #[test]
    fn test_tie_on_from_date_keeps_first_encountered() {
        let assignments = vec![
            assignment("emp_a", "structure_first", date(2024, 6, 1)),
            assignment("emp_a", "structure_second", date(2024, 6, 1)),
        ];

        let active = resolve_active_assignment("emp_a", date(2024, 8, 1), &assignments).unwrap();
        assert_eq!(active.structure_name, "structure_first");
    }

    #[test]
    fn test_order_independent_when_dates_differ() {
        let newest_first = vec![
            assignment("emp_a", "structure_2024", date(2024, 6, 1)),
            assignment("emp_a", "structure_2023", date(2024, 1, 1)),
        ];

        let active = resolve_active_assignment("emp_a", date(2024, 8, 1), &newest_first).unwrap();
        assert_eq!(active.structure_name, "structure_2024");
    }
}
