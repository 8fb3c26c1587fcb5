use reqwest::StatusCode;

use crate::api::ApiResponse;

const BODY_EXCERPT_CHARS: usize = 200;

/// A response that does not match the API contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("{operation}: expected status {expected}, got {actual} (body: {body})")]
    UnexpectedStatus {
        operation: &'static str,
        expected: u16,
        actual: u16,
        body: String,
    },

    #[error("{operation}: response is missing `{field}`")]
    MissingField {
        operation: &'static str,
        field: String,
    },

    #[error("{operation}: `{field}` expected {expected}, got {actual}")]
    FieldMismatch {
        operation: &'static str,
        field: String,
        expected: String,
        actual: String,
    },
}

fn field_label(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}

fn body_excerpt(body: &serde_json::Value) -> String {
    let text = match body {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.chars().count() <= BODY_EXCERPT_CHARS {
        return text;
    }
    let mut out: String = text.chars().take(BODY_EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}

pub fn expect_status(resp: &ApiResponse, expected: StatusCode) -> Result<(), ContractViolation> {
    if resp.status == expected {
        return Ok(());
    }
    Err(ContractViolation::UnexpectedStatus {
        operation: resp.operation,
        expected: expected.as_u16(),
        actual: resp.status.as_u16(),
        body: body_excerpt(&resp.body),
    })
}

pub fn expect_field<'a>(
    resp: &'a ApiResponse,
    pointer: &str,
) -> Result<&'a serde_json::Value, ContractViolation> {
    match resp.field(pointer) {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(ContractViolation::MissingField {
            operation: resp.operation,
            field: field_label(pointer),
        }),
    }
}

/// Reads a non-negative integer id at `pointer`.
pub fn expect_id(resp: &ApiResponse, pointer: &str) -> Result<u64, ContractViolation> {
    let v = expect_field(resp, pointer)?;
    v.as_u64().ok_or_else(|| ContractViolation::FieldMismatch {
        operation: resp.operation,
        field: field_label(pointer),
        expected: "an integer id".to_string(),
        actual: v.to_string(),
    })
}

pub fn expect_u64(
    resp: &ApiResponse,
    pointer: &str,
    expected: u64,
) -> Result<(), ContractViolation> {
    let v = expect_field(resp, pointer)?;
    if v.as_u64() == Some(expected) {
        return Ok(());
    }
    Err(ContractViolation::FieldMismatch {
        operation: resp.operation,
        field: field_label(pointer),
        expected: expected.to_string(),
        actual: v.to_string(),
    })
}

/// Exact string match.
pub fn expect_str(
    resp: &ApiResponse,
    pointer: &str,
    expected: &str,
) -> Result<(), ContractViolation> {
    let v = expect_field(resp, pointer)?;
    if v.as_str() == Some(expected) {
        return Ok(());
    }
    Err(ContractViolation::FieldMismatch {
        operation: resp.operation,
        field: field_label(pointer),
        expected: serde_json::Value::String(expected.to_string()).to_string(),
        actual: v.to_string(),
    })
}

pub fn expect_array<'a>(
    resp: &'a ApiResponse,
    pointer: &str,
) -> Result<&'a Vec<serde_json::Value>, ContractViolation> {
    let v = expect_field(resp, pointer)?;
    v.as_array().ok_or_else(|| ContractViolation::FieldMismatch {
        operation: resp.operation,
        field: field_label(pointer),
        expected: "an array".to_string(),
        actual: v.to_string(),
    })
}

#[cfg(test)]
#[path = "../tests/checks/expect_tests.rs"]
mod tests;
