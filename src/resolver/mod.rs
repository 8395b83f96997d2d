//! Salary structure resolution.
//!
//! This module determines which compensation structure applies to an
//! employee at a point in time, expands the structure into earning and
//! deduction line items with a gross total, and composes resolution with
//! the statutory calculator into a payroll preview.
//!
//! The resolver is a stateless pipeline: each stage is a pure transform
//! of its input, and absence at any stage is a legitimate empty state
//! rather than an error.

mod assignment;
mod expansion;
mod preview;

pub use assignment::resolve_active_assignment;
pub use expansion::{StructureExpansion, expand_structure};
pub use preview::build_payroll_preview;
