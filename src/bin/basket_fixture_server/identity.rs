use super::*;

pub(crate) fn hash_token(secret: &str) -> String {
    blake3::hash(secret.as_bytes()).to_hex().to_string()
}

pub(crate) fn generate_token_secret() -> Result<String> {
    // 32 bytes of entropy, hex-encoded.
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    let mut out = String::with_capacity(64);
    for b in &bytes {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(out)
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct LoginRequest {
    email: String,
    password: String,
}

pub(super) async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Response {
    if req.email != state.login_email || req.password != state.login_password {
        tracing::info!(email = %req.email, "login rejected");
        return invalid_login();
    }

    let token = match generate_token_secret() {
        Ok(t) => t,
        Err(err) => return internal_error(err),
    };
    {
        let mut hashes = state.token_hashes.write().await;
        hashes.insert(hash_token(&token));
    }
    tracing::info!(email = %req.email, "login accepted");

    Json(serde_json::json!({
        "authentication": {
            "token": token,
            "bid": LOGIN_BASKET_ID,
            "umail": req.email,
        }
    }))
    .into_response()
}

pub(super) async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    if state.allow_anonymous {
        return next.run(req).await;
    }

    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized();
    };
    let Ok(value) = value.to_str() else {
        return unauthorized();
    };
    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized();
    };

    let known = {
        let hashes = state.token_hashes.read().await;
        hashes.contains(&hash_token(token))
    };
    if !known {
        return unauthorized();
    }

    next.run(req).await
}

pub(super) async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "../../tests/bin/basket_fixture_server/identity_tests.rs"]
mod tests;
