use std::collections::HashSet;

use super::*;

#[test]
fn scenario_names_are_unique_and_prefixed_by_group() {
    let all = catalogue();
    let names: HashSet<&str> = all.iter().map(|s| s.name).collect();
    assert_eq!(names.len(), all.len());

    for s in &all {
        let prefix = s.group.as_str().replace('-', "_");
        assert!(
            s.name.starts_with(&format!("{}.", prefix)),
            "{} should start with {}",
            s.name,
            prefix
        );
    }
}

#[test]
fn catalogue_runs_groups_in_dependency_order() {
    let groups: Vec<CheckGroup> = catalogue().iter().map(|s| s.group).collect();
    let first_login = groups
        .iter()
        .position(|g| *g == CheckGroup::Login)
        .expect("login group present");
    let first_authenticated = catalogue()
        .iter()
        .position(|s| s.is_authenticated())
        .expect("authenticated scenarios present");
    assert!(groups[..first_login].iter().all(|g| *g == CheckGroup::AuthGate));
    assert!(first_login < first_authenticated);
}

#[test]
fn every_endpoint_has_an_auth_gate_scenario() {
    let names: Vec<&str> = catalogue()
        .iter()
        .filter(|s| s.group == CheckGroup::AuthGate)
        .map(|s| s.name)
        .collect();
    for op in ["list", "create", "fetch", "update", "delete"] {
        assert!(
            names.iter().any(|n| n.contains(&format!(".{}_", op))),
            "no auth gate scenario for {}",
            op
        );
    }
    assert!(
        catalogue()
            .iter()
            .filter(|s| s.group == CheckGroup::AuthGate)
            .all(|s| matches!(s.kind, ScenarioKind::Anonymous(_)))
    );
}

#[test]
fn select_without_filter_returns_everything() {
    assert_eq!(select(&[]).len(), catalogue().len());
}

#[test]
fn select_pulls_in_login_for_authenticated_groups() {
    let selected = select(&[CheckGroup::Validation]);
    assert!(selected.iter().any(|s| s.produces_session()));
    assert!(
        !selected
            .iter()
            .any(|s| s.name == "login.invalid_password_rejected")
    );
    assert!(
        selected
            .iter()
            .filter(|s| !s.produces_session())
            .all(|s| s.group == CheckGroup::Validation)
    );
}

#[test]
fn select_auth_gate_only_needs_no_login() {
    let selected = select(&[CheckGroup::AuthGate]);
    assert!(!selected.is_empty());
    assert!(selected.iter().all(|s| s.group == CheckGroup::AuthGate));
}

#[test]
fn run_against_unreachable_server_errors_and_skips() {
    let cfg = CheckerConfig {
        // Port 9 (discard) is not expected to accept HTTP.
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..CheckerConfig::default()
    };
    let api = ApiClient::new(&cfg).expect("build client");
    let report = run_checks(&api, &cfg, &[CheckGroup::Lifecycle]);

    let login = report
        .outcome("login.valid_credentials_issue_token")
        .expect("login ran");
    assert_eq!(login.status, OutcomeStatus::Errored);
    assert!(
        report
            .outcomes
            .iter()
            .filter(|o| o.group == CheckGroup::Lifecycle)
            .all(|o| o.status == OutcomeStatus::Skipped)
    );
    assert!(!report.success());
}
