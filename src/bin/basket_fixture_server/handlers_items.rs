use super::*;

pub(super) async fn list_items(State(state): State<Arc<AppState>>) -> Response {
    let items = state.items.read().await;
    success(items.values().collect::<Vec<_>>())
}

pub(super) async fn create_item(
    State(state): State<Arc<AppState>>,
    body: axum::body::Bytes,
) -> Response {
    let req = match parse_new_item(&body, &state.catalog) {
        Ok(r) => r,
        Err(v) => return rule_violation(v),
    };

    let mut items = state.items.write().await;
    if let Err(v) = check_unique(items.values(), &req) {
        return rule_violation(v);
    }

    let now = now_ts();
    let item = BasketItem {
        id: state.allocate_item_id(),
        basket_id: req.basket_id,
        product_id: req.product_id,
        quantity: req.quantity,
        created_at: now.clone(),
        updated_at: now,
    };
    items.insert(item.id, item.clone());
    tracing::debug!(id = item.id, product_id = item.product_id, "basket item created");
    success(item)
}

pub(super) async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Response {
    let items = state.items.read().await;
    match items.get(&id) {
        Some(item) => success(item),
        None => not_found(),
    }
}

pub(super) async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    body: axum::body::Bytes,
) -> Response {
    let mut items = state.items.write().await;
    let Some(item) = items.get_mut(&id) else {
        return not_found();
    };

    let patch = match parse_item_patch(
        &body,
        item.product_id,
        &state.catalog,
        state.immutable_fields,
    ) {
        Ok(p) => p,
        Err(v) => return rule_violation(v),
    };
    if patch == ItemPatch::default() {
        return success(&*item);
    }
    if let Some(basket_id) = patch.basket_id {
        item.basket_id = basket_id;
    }
    if let Some(quantity) = patch.quantity {
        item.quantity = quantity;
    }
    item.updated_at = now_ts();
    success(&*item)
}

pub(super) async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Response {
    let mut items = state.items.write().await;
    match items.remove(&id) {
        Some(item) => success(item),
        None => not_found(),
    }
}
