use super::*;

fn response(status: StatusCode, body: serde_json::Value) -> ApiResponse {
    ApiResponse {
        operation: "update basket item",
        status,
        body,
    }
}

#[test]
fn expect_status_reports_both_codes() {
    let resp = response(
        StatusCode::OK,
        serde_json::json!({"status": "success"}),
    );
    assert!(expect_status(&resp, StatusCode::OK).is_ok());

    let err = expect_status(&resp, StatusCode::BAD_REQUEST).expect_err("mismatch");
    assert_eq!(
        err,
        ContractViolation::UnexpectedStatus {
            operation: "update basket item",
            expected: 400,
            actual: 200,
            body: r#"{"status":"success"}"#.to_string(),
        }
    );
}

#[test]
fn expect_status_truncates_long_bodies() {
    let resp = response(
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::Value::String("x".repeat(500)),
    );
    let err = expect_status(&resp, StatusCode::OK).expect_err("mismatch");
    let ContractViolation::UnexpectedStatus { body, .. } = err else {
        panic!("unexpected violation kind");
    };
    assert_eq!(body.len(), BODY_EXCERPT_CHARS + 3);
    assert!(body.ends_with("..."));
}

#[test]
fn expect_id_requires_integer() {
    let resp = response(StatusCode::OK, serde_json::json!({"data": {"id": 41}}));
    assert_eq!(expect_id(&resp, "/data/id"), Ok(41));

    let resp = response(StatusCode::OK, serde_json::json!({"data": {"id": "41"}}));
    assert!(matches!(
        expect_id(&resp, "/data/id"),
        Err(ContractViolation::FieldMismatch { .. })
    ));

    let resp = response(StatusCode::OK, serde_json::json!({"data": {"id": null}}));
    assert_eq!(
        expect_id(&resp, "/data/id"),
        Err(ContractViolation::MissingField {
            operation: "update basket item",
            field: "data.id".to_string(),
        })
    );
}

#[test]
fn expect_str_is_exact() {
    let resp = response(
        StatusCode::BAD_REQUEST,
        serde_json::json!({"error": "You can order only up to 5 items of this product."}),
    );
    assert!(expect_str(&resp, "/error", "You can order only up to 5 items of this product.").is_ok());

    let err = expect_str(&resp, "/error", "You can order only up to 5 items").expect_err("prefix");
    assert!(err.to_string().contains("`error` expected"));
}

#[test]
fn expect_u64_and_array() {
    let resp = response(
        StatusCode::OK,
        serde_json::json!({"data": {"quantity": 20}, "items": []}),
    );
    assert!(expect_u64(&resp, "/data/quantity", 20).is_ok());
    assert!(expect_u64(&resp, "/data/quantity", 3).is_err());
    assert!(expect_array(&resp, "/items").is_ok());
    assert!(expect_array(&resp, "/data").is_err());
}
