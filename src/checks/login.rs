use super::*;

pub(super) const SCENARIOS: &[Scenario] = &[
    Scenario::new(
        "login.valid_credentials_issue_token",
        CheckGroup::Login,
        ScenarioKind::Login(establish_session),
    ),
    Scenario::new(
        "login.invalid_password_rejected",
        CheckGroup::Login,
        ScenarioKind::Credentialed(invalid_password_rejected),
    ),
];

/// Logs in and returns the bearer credential from `authentication.token`.
pub fn establish_session(api: &ApiClient, credentials: &Credentials) -> Result<Session> {
    let resp = api.login(credentials)?;
    expect_status(&resp, StatusCode::OK)?;
    let token = expect_field(&resp, "/authentication/token")?;
    match token.as_str() {
        Some(t) if !t.is_empty() => Ok(Session::new(t)),
        _ => Err(ContractViolation::FieldMismatch {
            operation: resp.operation,
            field: "authentication.token".to_string(),
            expected: "a non-empty string".to_string(),
            actual: token.to_string(),
        }
        .into()),
    }
}

fn invalid_password_rejected(api: &ApiClient, credentials: &Credentials) -> Result<()> {
    let wrong = Credentials {
        email: credentials.email.clone(),
        password: format!("{}-wrong", credentials.password),
    };
    let resp = api.login(&wrong)?;
    let issued = resp
        .field("/authentication/token")
        .and_then(|v| v.as_str())
        .is_some_and(|t| !t.is_empty());
    if resp.status == StatusCode::OK || issued {
        return Err(ContractViolation::FieldMismatch {
            operation: resp.operation,
            field: "authentication.token".to_string(),
            expected: "no token for a wrong password".to_string(),
            actual: format!("status {} with token issued: {}", resp.status.as_u16(), issued),
        }
        .into());
    }
    Ok(())
}
