//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine,
//! plus the normalization boundary that converts untyped external payloads
//! into validated value types.

mod employee;
pub mod normalize;
mod payroll_result;
mod salary_structure;

pub use employee::Employee;
pub use payroll_result::{AuditStep, AuditTrace, AuditWarning, PayrollResult};
pub use salary_structure::{DeductionLine, EarningLine, SalaryStructure, StructureAssignment};
