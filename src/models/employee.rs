//! Employee model.
//!
//! This module defines the Employee struct used to identify whose payroll
//! is being calculated. Compensation data lives on the salary structure,
//! not on the employee record.

use serde::{Deserialize, Serialize};

/// Represents an employee subject to payroll calculation.
///
/// The engine only needs the identity of the employee; all compensation
/// detail comes from the salary structure assigned to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (e.g., "HR-EMP-00042").
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The company the employee belongs to.
    pub company: String,
}
