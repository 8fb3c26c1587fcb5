//! Server-side business rules: quantity ceilings and immutable fields.

use super::*;
use crate::api::ApiResponse;
use crate::model::BasketItemPatch;

pub const HARD_CEILING_QUANTITY: u32 = 101;
pub const PRODUCT_CEILING_MESSAGE: &str = "You can order only up to 5 items of this product.";
pub const BASKET_ID_NO_UPDATE_MESSAGE: &str =
    "null: `BasketId` cannot be updated due `noUpdate` constraint";

/// Product with a per-product ceiling of 5 units.
const LIMITED_PRODUCT_ID: u64 = 1;
const ABOVE_PRODUCT_CEILING: u32 = 6;

pub(super) const SCENARIOS: &[Scenario] = &[
    Scenario::new(
        "validation.create_above_hard_ceiling",
        CheckGroup::Validation,
        ScenarioKind::Authenticated(create_above_hard_ceiling),
    ),
    Scenario::new(
        "validation.create_above_product_ceiling",
        CheckGroup::Validation,
        ScenarioKind::Authenticated(create_above_product_ceiling),
    ),
    Scenario::new(
        "validation.update_basket_id_forbidden",
        CheckGroup::Validation,
        ScenarioKind::Authenticated(update_basket_id_forbidden),
    ),
    Scenario::new(
        "validation.update_above_hard_ceiling",
        CheckGroup::Validation,
        ScenarioKind::Authenticated(update_above_hard_ceiling),
    ),
    Scenario::new(
        "validation.update_above_product_ceiling",
        CheckGroup::Validation,
        ScenarioKind::Authenticated(update_above_product_ceiling),
    ),
];

/// Deletes an item the server should have rejected but stored anyway.
fn discard_accepted(api: &ApiClient, session: &Session, resp: &ApiResponse) {
    if resp.status.is_success()
        && let Some(id) = resp.field("/data/id").and_then(|v| v.as_u64())
    {
        cleanup_item(api, session, id);
    }
}

fn create_above_hard_ceiling(api: &ApiClient, session: &Session) -> Result<()> {
    let item = NewBasketItem::new(2, 2, HARD_CEILING_QUANTITY);
    let resp = api.create_item(session.auth(), &item)?;
    discard_accepted(api, session, &resp);
    expect_status(&resp, StatusCode::BAD_REQUEST)?;
    Ok(())
}

fn create_above_product_ceiling(api: &ApiClient, session: &Session) -> Result<()> {
    let item = NewBasketItem::new(2, LIMITED_PRODUCT_ID, ABOVE_PRODUCT_CEILING);
    let resp = api.create_item(session.auth(), &item)?;
    discard_accepted(api, session, &resp);
    expect_status(&resp, StatusCode::BAD_REQUEST)?;
    expect_str(&resp, "/error", PRODUCT_CEILING_MESSAGE)?;
    Ok(())
}

fn update_basket_id_forbidden(api: &ApiClient, session: &Session) -> Result<()> {
    with_created_item(api, session, NewBasketItem::new(2, 9, 3), |id| {
        let resp = api.update_item(session.auth(), id, &BasketItemPatch::basket_id(42))?;
        expect_status(&resp, StatusCode::BAD_REQUEST)?;
        expect_str(&resp, "/message", BASKET_ID_NO_UPDATE_MESSAGE)?;
        Ok(())
    })
}

fn update_above_hard_ceiling(api: &ApiClient, session: &Session) -> Result<()> {
    with_created_item(api, session, NewBasketItem::new(2, 12, 3), |id| {
        let resp = api.update_item(
            session.auth(),
            id,
            &BasketItemPatch::quantity(HARD_CEILING_QUANTITY),
        )?;
        expect_status(&resp, StatusCode::BAD_REQUEST)?;
        Ok(())
    })
}

fn update_above_product_ceiling(api: &ApiClient, session: &Session) -> Result<()> {
    let item = NewBasketItem::new(2, LIMITED_PRODUCT_ID, 1);
    with_created_item(api, session, item, |id| {
        let resp = api.update_item(
            session.auth(),
            id,
            &BasketItemPatch::quantity(ABOVE_PRODUCT_CEILING),
        )?;
        expect_status(&resp, StatusCode::BAD_REQUEST)?;
        expect_str(&resp, "/error", PRODUCT_CEILING_MESSAGE)?;
        Ok(())
    })
}
