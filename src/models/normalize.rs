//! Normalization boundary for untyped external payloads.
//!
//! Payroll data arrives from loosely-typed upstream sources (forms, API
//! responses) as JSON values. This module is the single place where that
//! data is coerced into the engine's validated types: monetary fields
//! degrade to zero rather than failing, while malformed identity and date
//! fields are reported as errors. Nothing untyped reaches the calculator
//! or resolver.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

use super::{DeductionLine, EarningLine, Employee, SalaryStructure, StructureAssignment};

/// Coerces a JSON value into a non-negative monetary amount.
///
/// Accepts numbers and numeric strings. Anything else, including missing
/// values, non-finite numbers and negative amounts, degrades to zero:
/// payroll figures flow into a display layer, so a stray bad value must
/// not cascade into a failure.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::normalize::money_from_value;
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// assert_eq!(money_from_value(&json!("8000.50")), Decimal::new(800050, 2));
/// assert_eq!(money_from_value(&json!(-250)), Decimal::ZERO);
/// assert_eq!(money_from_value(&json!(null)), Decimal::ZERO);
/// ```
pub fn money_from_value(value: &Value) -> Decimal {
    let amount = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else {
                n.as_f64().and_then(Decimal::from_f64).unwrap_or(Decimal::ZERO)
            }
        }
        Value::String(s) => Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    };
    amount.max(Decimal::ZERO)
}

fn required_string(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn optional_string(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn date_field(value: &Value, field: &str) -> EngineResult<NaiveDate> {
    let raw = value
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| EngineError::InvalidAssignment {
            field: field.to_string(),
            message: "missing date".to_string(),
        })?;

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| EngineError::InvalidAssignment {
        field: field.to_string(),
        message: format!("expected YYYY-MM-DD, got '{}'", raw),
    })
}

/// Converts an untyped employee payload into an [`Employee`].
///
/// # Errors
///
/// Returns [`EngineError::InvalidEmployee`] if the `id` field is missing
/// or empty. Name and company default to empty strings.
pub fn employee_from_value(value: &Value) -> EngineResult<Employee> {
    let id = required_string(value, "id").ok_or_else(|| EngineError::InvalidEmployee {
        field: "id".to_string(),
        message: "must be a non-empty string".to_string(),
    })?;

    Ok(Employee {
        id,
        name: optional_string(value, "name"),
        company: optional_string(value, "company"),
    })
}

fn earning_from_value(value: &Value) -> EarningLine {
    EarningLine {
        component: optional_string(value, "component"),
        amount: money_from_value(value.get("amount").unwrap_or(&Value::Null)),
        is_tax_applicable: value
            .get("is_tax_applicable")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        depends_on_payment_days: value
            .get("depends_on_payment_days")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        formula: value
            .get("formula")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

fn deduction_from_value(value: &Value) -> DeductionLine {
    DeductionLine {
        component: optional_string(value, "component"),
        amount: money_from_value(value.get("amount").unwrap_or(&Value::Null)),
        is_tax_applicable: value
            .get("is_tax_applicable")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        depends_on_payment_days: value
            .get("depends_on_payment_days")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        formula: value
            .get("formula")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

/// Converts an untyped salary structure payload into a [`SalaryStructure`].
///
/// Line items with malformed amounts degrade to zero-amount lines; the
/// structure itself is rejected only when its `name` is missing.
///
/// # Errors
///
/// Returns [`EngineError::InvalidStructure`] if the `name` field is
/// missing or empty.
pub fn structure_from_value(value: &Value) -> EngineResult<SalaryStructure> {
    let name = required_string(value, "name").ok_or_else(|| EngineError::InvalidStructure {
        name: "<unnamed>".to_string(),
        message: "name must be a non-empty string".to_string(),
    })?;

    let earnings = value
        .get("earnings")
        .and_then(Value::as_array)
        .map(|lines| lines.iter().map(earning_from_value).collect())
        .unwrap_or_default();

    let deductions = value
        .get("deductions")
        .and_then(Value::as_array)
        .map(|lines| lines.iter().map(deduction_from_value).collect())
        .unwrap_or_default();

    Ok(SalaryStructure {
        name,
        company: optional_string(value, "company"),
        earnings,
        deductions,
    })
}

/// Converts an untyped assignment payload into a [`StructureAssignment`].
///
/// Dates are parsed into [`NaiveDate`] here so that the resolver compares
/// calendar values, never strings.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAssignment`] if `employee_id` or
/// `structure_name` is missing, or if `from_date` is not a valid
/// `YYYY-MM-DD` date.
pub fn assignment_from_value(value: &Value) -> EngineResult<StructureAssignment> {
    let employee_id =
        required_string(value, "employee_id").ok_or_else(|| EngineError::InvalidAssignment {
            field: "employee_id".to_string(),
            message: "must be a non-empty string".to_string(),
        })?;

    let structure_name =
        required_string(value, "structure_name").ok_or_else(|| EngineError::InvalidAssignment {
            field: "structure_name".to_string(),
            message: "must be a non-empty string".to_string(),
        })?;

    Ok(StructureAssignment {
        employee_id,
        structure_name,
        company: optional_string(value, "company"),
        from_date: date_field(value, "from_date")?,
    })
}
