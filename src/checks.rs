//! Scenario catalogue and the sequential runner.
//!
//! Scenarios are plain functions grouped by endpoint family. The bearer
//! credential is produced by the login scenario and passed explicitly to
//! every authenticated scenario; nothing is shared through globals.

use std::time::Instant;

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, Session};
use crate::model::{CheckerConfig, Credentials, NewBasketItem};
use crate::report::{OutcomeStatus, RunReport, ScenarioOutcome};

mod auth_gate;
mod expect;
mod lifecycle;
mod login;
mod validation;

pub use self::expect::{
    ContractViolation, expect_array, expect_field, expect_id, expect_status, expect_str,
    expect_u64,
};
pub use self::login::establish_session;
pub use self::validation::{
    BASKET_ID_NO_UPDATE_MESSAGE, HARD_CEILING_QUANTITY, PRODUCT_CEILING_MESSAGE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CheckGroup {
    AuthGate,
    Login,
    Lifecycle,
    Validation,
}

impl CheckGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckGroup::AuthGate => "auth-gate",
            CheckGroup::Login => "login",
            CheckGroup::Lifecycle => "lifecycle",
            CheckGroup::Validation => "validation",
        }
    }
}

impl std::fmt::Display for CheckGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// What a scenario needs in order to run.
#[derive(Clone, Copy)]
pub enum ScenarioKind {
    /// Deliberately sends no valid credential.
    Anonymous(fn(&ApiClient) -> Result<()>),
    /// Logs in and yields the session shared by authenticated scenarios.
    Login(fn(&ApiClient, &Credentials) -> Result<Session>),
    /// Uses the configured credentials without producing a session.
    Credentialed(fn(&ApiClient, &Credentials) -> Result<()>),
    Authenticated(fn(&ApiClient, &Session) -> Result<()>),
}

#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub group: CheckGroup,
    pub kind: ScenarioKind,
}

impl Scenario {
    const fn new(name: &'static str, group: CheckGroup, kind: ScenarioKind) -> Self {
        Self { name, group, kind }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.kind, ScenarioKind::Authenticated(_))
    }

    pub fn produces_session(&self) -> bool {
        matches!(self.kind, ScenarioKind::Login(_))
    }
}

/// Every scenario, in execution order: auth gate, login, lifecycle, validation.
pub fn catalogue() -> Vec<Scenario> {
    let mut out = Vec::new();
    out.extend_from_slice(auth_gate::SCENARIOS);
    out.extend_from_slice(login::SCENARIOS);
    out.extend_from_slice(lifecycle::SCENARIOS);
    out.extend_from_slice(validation::SCENARIOS);
    out
}

/// Scenarios to run for the given group filter (empty = everything).
///
/// When any authenticated scenario is selected the session-producing login
/// scenario is pulled in as well.
pub fn select(groups: &[CheckGroup]) -> Vec<Scenario> {
    let all = catalogue();
    if groups.is_empty() {
        return all;
    }
    let needs_session = all
        .iter()
        .any(|s| groups.contains(&s.group) && s.is_authenticated());
    all.into_iter()
        .filter(|s| groups.contains(&s.group) || (needs_session && s.produces_session()))
        .collect()
}

/// Runs the selected scenarios one after another and collects their outcomes.
///
/// Failures never abort the run. If login does not produce a session, the
/// authenticated scenarios are reported as skipped.
pub fn run_checks(api: &ApiClient, config: &CheckerConfig, groups: &[CheckGroup]) -> RunReport {
    let credentials = config.credentials();
    let mut report = RunReport::new(api.base_url());
    let mut session: Option<Session> = None;

    for scenario in select(groups) {
        let start = Instant::now();
        let result = match scenario.kind {
            ScenarioKind::Anonymous(f) => Some(f(api)),
            ScenarioKind::Login(f) => Some(f(api, &credentials).map(|s| {
                session = Some(s);
            })),
            ScenarioKind::Credentialed(f) => Some(f(api, &credentials)),
            ScenarioKind::Authenticated(f) => session.as_ref().map(|s| f(api, s)),
        };
        let elapsed = start.elapsed();

        let outcome = match result {
            Some(result) => ScenarioOutcome::from_result(&scenario, result, elapsed),
            None => ScenarioOutcome::skipped(&scenario, "no session: login did not succeed"),
        };
        match outcome.status {
            OutcomeStatus::Passed | OutcomeStatus::Skipped => {
                tracing::info!(scenario = %outcome.name, status = ?outcome.status, "scenario finished")
            }
            OutcomeStatus::Failed | OutcomeStatus::Errored => tracing::warn!(
                scenario = %outcome.name,
                status = ?outcome.status,
                detail = outcome.detail.as_deref().unwrap_or(""),
                "scenario finished"
            ),
        }
        report.outcomes.push(outcome);
    }

    report
}

/// Creates an item and returns the server-assigned `data.id`.
///
/// The create response is the only source of item ids.
pub(crate) fn create_item_id(
    api: &ApiClient,
    session: &Session,
    item: NewBasketItem,
) -> Result<u64> {
    let resp = api.create_item(session.auth(), &item)?;
    expect_status(&resp, StatusCode::OK)?;
    Ok(expect_id(&resp, "/data/id")?)
}

/// Creates an item, runs `f` with its id, then deletes the item.
///
/// The delete is best effort and never replaces the result of `f`. The
/// server allows one line per (basket, product).
pub(crate) fn with_created_item<T>(
    api: &ApiClient,
    session: &Session,
    item: NewBasketItem,
    f: impl FnOnce(u64) -> Result<T>,
) -> Result<T> {
    let id = create_item_id(api, session, item)?;
    let result = f(id);
    cleanup_item(api, session, id);
    result
}

pub(crate) fn cleanup_item(api: &ApiClient, session: &Session, id: u64) {
    match api.delete_item(session.auth(), id) {
        Ok(resp) if resp.status.is_success() => {}
        Ok(resp) => tracing::warn!(id, status = resp.status.as_u16(), "cleanup delete rejected"),
        Err(err) => tracing::warn!(id, error = %format!("{:#}", err), "cleanup delete failed"),
    }
}

#[cfg(test)]
#[path = "tests/checks/catalogue_tests.rs"]
mod tests;
