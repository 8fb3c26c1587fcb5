//! Per-scenario outcomes and the rendered run report.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::checks::{CheckGroup, ContractViolation, Scenario};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Passed,
    /// The server answered, but not the way the contract says.
    Failed,
    /// The exchange itself broke (connection, timeout, unreadable body).
    Errored,
    Skipped,
}

impl OutcomeStatus {
    pub fn label(self) -> &'static str {
        match self {
            OutcomeStatus::Passed => "PASS",
            OutcomeStatus::Failed => "FAIL",
            OutcomeStatus::Errored => "ERROR",
            OutcomeStatus::Skipped => "SKIP",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub group: CheckGroup,
    pub status: OutcomeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub duration_ms: u64,
}

impl ScenarioOutcome {
    pub fn from_result(scenario: &Scenario, result: anyhow::Result<()>, elapsed: Duration) -> Self {
        let (status, detail) = match result {
            Ok(()) => (OutcomeStatus::Passed, None),
            Err(err) => (classify(&err), Some(format!("{:#}", err))),
        };
        Self {
            name: scenario.name.to_string(),
            group: scenario.group,
            status,
            detail,
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn skipped(scenario: &Scenario, reason: &str) -> Self {
        Self {
            name: scenario.name.to_string(),
            group: scenario.group,
            status: OutcomeStatus::Skipped,
            detail: Some(reason.to_string()),
            duration_ms: 0,
        }
    }
}

/// Contract violations fail a scenario; anything else means it errored.
pub fn classify(err: &anyhow::Error) -> OutcomeStatus {
    if err
        .chain()
        .any(|cause| cause.downcast_ref::<ContractViolation>().is_some())
    {
        OutcomeStatus::Failed
    } else {
        OutcomeStatus::Errored
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub skipped: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} errored, {} skipped",
            self.passed, self.failed, self.errored, self.skipped
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: String,
    pub base_url: String,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    pub fn new(base_url: &str) -> Self {
        Self {
            started_at: now_ts(),
            base_url: base_url.to_string(),
            outcomes: Vec::new(),
        }
    }

    pub fn summary(&self) -> Summary {
        let mut s = Summary::default();
        for o in &self.outcomes {
            match o.status {
                OutcomeStatus::Passed => s.passed += 1,
                OutcomeStatus::Failed => s.failed += 1,
                OutcomeStatus::Errored => s.errored += 1,
                OutcomeStatus::Skipped => s.skipped += 1,
            }
        }
        s
    }

    /// True only when every scenario passed; a skip is not a pass.
    pub fn success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.status == OutcomeStatus::Passed)
    }

    pub fn outcome(&self, name: &str) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("basket-check against {} ({})", self.base_url, self.started_at));
        for o in &self.outcomes {
            lines.push(format!(
                "{:<5} {} ({} ms)",
                o.status.label(),
                o.name,
                o.duration_ms
            ));
            if o.status != OutcomeStatus::Passed
                && let Some(detail) = &o.detail
            {
                lines.push(format!("      {}", detail));
            }
        }
        lines.push(self.summary().to_string());
        lines.join("\n")
    }
}

/// Current UTC time as RFC 3339.
pub fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
