//! Every basket-item endpoint rejects requests without a valid credential.

use super::*;
use crate::api::Auth;
use crate::model::BasketItemPatch;

/// Any id works: the gate must answer before the item is looked up.
const GATED_ITEM_ID: u64 = 1;
const BOGUS_TOKEN: &str = "not-a-valid-token";

pub(super) const SCENARIOS: &[Scenario] = &[
    Scenario::new(
        "auth_gate.list_requires_credential",
        CheckGroup::AuthGate,
        ScenarioKind::Anonymous(list_requires_credential),
    ),
    Scenario::new(
        "auth_gate.create_requires_credential",
        CheckGroup::AuthGate,
        ScenarioKind::Anonymous(create_requires_credential),
    ),
    Scenario::new(
        "auth_gate.create_invalid_payload_requires_credential",
        CheckGroup::AuthGate,
        ScenarioKind::Anonymous(create_invalid_payload_requires_credential),
    ),
    Scenario::new(
        "auth_gate.fetch_requires_credential",
        CheckGroup::AuthGate,
        ScenarioKind::Anonymous(fetch_requires_credential),
    ),
    Scenario::new(
        "auth_gate.update_requires_credential",
        CheckGroup::AuthGate,
        ScenarioKind::Anonymous(update_requires_credential),
    ),
    Scenario::new(
        "auth_gate.delete_requires_credential",
        CheckGroup::AuthGate,
        ScenarioKind::Anonymous(delete_requires_credential),
    ),
    Scenario::new(
        "auth_gate.invalid_token_rejected",
        CheckGroup::AuthGate,
        ScenarioKind::Anonymous(invalid_token_rejected),
    ),
];

fn list_requires_credential(api: &ApiClient) -> Result<()> {
    let resp = api.list_items(Auth::Anonymous)?;
    expect_status(&resp, StatusCode::UNAUTHORIZED)?;
    Ok(())
}

fn create_requires_credential(api: &ApiClient) -> Result<()> {
    let resp = api.create_item(Auth::Anonymous, &NewBasketItem::new(1, 1, 1))?;
    expect_status(&resp, StatusCode::UNAUTHORIZED)?;
    Ok(())
}

// A body that would also break the hard ceiling: 401 still wins over 400.
fn create_invalid_payload_requires_credential(api: &ApiClient) -> Result<()> {
    let resp = api.create_item(Auth::Anonymous, &NewBasketItem::new(2, 2, 101))?;
    expect_status(&resp, StatusCode::UNAUTHORIZED)?;
    Ok(())
}

fn fetch_requires_credential(api: &ApiClient) -> Result<()> {
    let resp = api.get_item(Auth::Anonymous, GATED_ITEM_ID)?;
    expect_status(&resp, StatusCode::UNAUTHORIZED)?;
    Ok(())
}

fn update_requires_credential(api: &ApiClient) -> Result<()> {
    let resp = api.update_item(
        Auth::Anonymous,
        GATED_ITEM_ID,
        &BasketItemPatch::quantity(2),
    )?;
    expect_status(&resp, StatusCode::UNAUTHORIZED)?;
    Ok(())
}

fn delete_requires_credential(api: &ApiClient) -> Result<()> {
    let resp = api.delete_item(Auth::Anonymous, GATED_ITEM_ID)?;
    expect_status(&resp, StatusCode::UNAUTHORIZED)?;
    Ok(())
}

fn invalid_token_rejected(api: &ApiClient) -> Result<()> {
    let resp = api.list_items(Auth::Bearer(BOGUS_TOKEN))?;
    expect_status(&resp, StatusCode::UNAUTHORIZED)?;
    Ok(())
}
