//! Statutory Payroll Calculation Engine
//!
//! This crate provides the pure calculation core for statutory payroll
//! deductions: pension contributions (NAPSA), health insurance (NHIMA) and
//! progressive income tax (PAYE), together with salary structure resolution
//! that determines which compensation template applies to an employee at a
//! given date.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
