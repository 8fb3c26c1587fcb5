use super::*;

pub(super) fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({"error": "unauthorized"})),
    )
        .into_response()
}

pub(super) fn invalid_login() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Invalid email or password.",
    )
        .into_response()
}

pub(super) fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"status": "error", "error": "not found"})),
    )
        .into_response()
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": err.to_string()})),
    )
        .into_response()
}

pub(super) fn success<T: serde::Serialize>(data: T) -> Response {
    Json(serde_json::json!({"status": "success", "data": data})).into_response()
}

/// Per-product ceilings answer with `error`; everything else with `message`.
pub(super) fn rule_violation(v: RuleViolation) -> Response {
    tracing::debug!(violation = %v, "request rejected");
    let body = match &v {
        RuleViolation::ProductLimit { .. } => serde_json::json!({"error": v.to_string()}),
        _ => serde_json::json!({"message": v.to_string()}),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
