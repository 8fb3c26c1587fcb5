//! HTTP route registration for the fixture server.

use super::*;

pub(super) fn basket_items_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/BasketItems", get(list_items).post(create_item))
        .route(
            "/api/BasketItems/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(middleware::from_fn_with_state(state, require_bearer))
}

pub(super) fn build_app_router(state: Arc<AppState>) -> Router {
    let items = basket_items_router(state.clone());
    Router::new()
        .route("/healthz", get(healthz))
        .route("/rest/user/login", post(login))
        .merge(items)
        .with_state(state)
}
