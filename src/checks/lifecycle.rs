//! Create, read, update and delete on basket items with a valid session.

use super::*;
use crate::model::BasketItemPatch;

pub(super) const SCENARIOS: &[Scenario] = &[
    Scenario::new(
        "lifecycle.list_items",
        CheckGroup::Lifecycle,
        ScenarioKind::Authenticated(list_items),
    ),
    Scenario::new(
        "lifecycle.create_item",
        CheckGroup::Lifecycle,
        ScenarioKind::Authenticated(create_item),
    ),
    Scenario::new(
        "lifecycle.create_read_delete",
        CheckGroup::Lifecycle,
        ScenarioKind::Authenticated(create_read_delete),
    ),
    Scenario::new(
        "lifecycle.read_created_item",
        CheckGroup::Lifecycle,
        ScenarioKind::Authenticated(read_created_item),
    ),
    Scenario::new(
        "lifecycle.update_quantity",
        CheckGroup::Lifecycle,
        ScenarioKind::Authenticated(update_quantity),
    ),
    Scenario::new(
        "lifecycle.delete_created_item",
        CheckGroup::Lifecycle,
        ScenarioKind::Authenticated(delete_created_item),
    ),
];

const UPDATED_QUANTITY: u32 = 20;

fn list_items(api: &ApiClient, session: &Session) -> Result<()> {
    let resp = api.list_items(session.auth())?;
    expect_status(&resp, StatusCode::OK)?;
    expect_array(&resp, "/data")?;
    Ok(())
}

fn create_item(api: &ApiClient, session: &Session) -> Result<()> {
    with_created_item(api, session, NewBasketItem::new(2, 3, 1), |_| Ok(()))
}

fn create_read_delete(api: &ApiClient, session: &Session) -> Result<()> {
    let id = create_item_id(api, session, NewBasketItem::new(2, 2, 1))?;

    let read = api
        .get_item(session.auth(), id)
        .and_then(|resp| Ok(expect_status(&resp, StatusCode::OK)?));
    if let Err(err) = read {
        cleanup_item(api, session, id);
        return Err(err);
    }

    let resp = api.delete_item(session.auth(), id)?;
    expect_status(&resp, StatusCode::OK)?;
    Ok(())
}

fn read_created_item(api: &ApiClient, session: &Session) -> Result<()> {
    with_created_item(api, session, NewBasketItem::new(2, 6, 3), |id| {
        let resp = api.get_item(session.auth(), id)?;
        expect_status(&resp, StatusCode::OK)?;
        Ok(())
    })
}

fn update_quantity(api: &ApiClient, session: &Session) -> Result<()> {
    with_created_item(api, session, NewBasketItem::new(2, 8, 3), |id| {
        let resp = api.update_item(
            session.auth(),
            id,
            &BasketItemPatch::quantity(UPDATED_QUANTITY),
        )?;
        expect_status(&resp, StatusCode::OK)?;
        expect_u64(&resp, "/data/quantity", u64::from(UPDATED_QUANTITY))?;
        Ok(())
    })
}

fn delete_created_item(api: &ApiClient, session: &Session) -> Result<()> {
    let id = create_item_id(api, session, NewBasketItem::new(2, 10, 3))?;
    let resp = api.delete_item(session.auth(), id)?;
    expect_status(&resp, StatusCode::OK)?;
    Ok(())
}
