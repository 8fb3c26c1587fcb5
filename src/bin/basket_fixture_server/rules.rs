//! Business rules applied to basket-item writes.

use super::*;

/// Global quantity ceiling, independent of the product.
pub(crate) const MAX_QUANTITY: u32 = 100;

/// Fields fixed at creation.
pub(crate) const IMMUTABLE_FIELDS: &[&str] = &["BasketId", "ProductId"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RuleViolation {
    #[error("Validation error: quantity must be between 1 and {max} (got {quantity})", max = MAX_QUANTITY)]
    QuantityOutOfRange { quantity: i64 },

    #[error("You can order only up to {limit} items of this product.")]
    ProductLimit { limit: u32 },

    #[error("Validation error: unknown product {product_id}")]
    UnknownProduct { product_id: u64 },

    #[error("null: `{field}` cannot be updated due `noUpdate` constraint")]
    NoUpdate { field: &'static str },

    #[error("Validation error: product {product_id} is already in basket {basket_id}")]
    DuplicateItem { basket_id: u64, product_id: u64 },

    #[error("Validation error: {0}")]
    Malformed(String),
}

/// Accepted changes of a basket-item update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ItemPatch {
    pub(crate) basket_id: Option<u64>,
    pub(crate) quantity: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NewItemRequest {
    pub(crate) basket_id: u64,
    pub(crate) product_id: u64,
    pub(crate) quantity: u32,
}

fn parse_object(body: &[u8]) -> Result<serde_json::Map<String, serde_json::Value>, RuleViolation> {
    let v: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| RuleViolation::Malformed(format!("invalid JSON body: {}", e)))?;
    match v {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(RuleViolation::Malformed(
            "request body must be a JSON object".to_string(),
        )),
    }
}

fn require_u64(
    map: &serde_json::Map<String, serde_json::Value>,
    field: &str,
) -> Result<u64, RuleViolation> {
    map.get(field)
        .and_then(|v| v.as_u64())
        .ok_or_else(|| RuleViolation::Malformed(format!("{} must be a non-negative integer", field)))
}

fn as_quantity(v: &serde_json::Value) -> Result<i64, RuleViolation> {
    v.as_i64()
        .ok_or_else(|| RuleViolation::Malformed("quantity must be an integer".to_string()))
}

/// Global ceiling first, then the product's own ceiling.
pub(crate) fn check_quantity(
    catalog: &Catalog,
    product_id: u64,
    quantity: i64,
) -> Result<u32, RuleViolation> {
    let product = catalog
        .get(product_id)
        .ok_or(RuleViolation::UnknownProduct { product_id })?;
    if quantity < 1 || quantity > i64::from(MAX_QUANTITY) {
        return Err(RuleViolation::QuantityOutOfRange { quantity });
    }
    let quantity =
        u32::try_from(quantity).map_err(|_| RuleViolation::QuantityOutOfRange { quantity })?;
    if let Some(limit) = product.limit_per_order
        && quantity > limit
    {
        return Err(RuleViolation::ProductLimit { limit });
    }
    Ok(quantity)
}

pub(crate) fn parse_new_item(
    body: &[u8],
    catalog: &Catalog,
) -> Result<NewItemRequest, RuleViolation> {
    let map = parse_object(body)?;
    let basket_id = require_u64(&map, "BasketId")?;
    let product_id = require_u64(&map, "ProductId")?;
    let quantity = map
        .get("quantity")
        .ok_or_else(|| RuleViolation::Malformed("quantity is required".to_string()))
        .and_then(as_quantity)?;
    let quantity = check_quantity(catalog, product_id, quantity)?;
    Ok(NewItemRequest {
        basket_id,
        product_id,
        quantity,
    })
}

/// A basket holds at most one line per product.
pub(crate) fn check_unique<'a>(
    existing: impl IntoIterator<Item = &'a BasketItem>,
    req: &NewItemRequest,
) -> Result<(), RuleViolation> {
    let taken = existing
        .into_iter()
        .any(|i| i.basket_id == req.basket_id && i.product_id == req.product_id);
    if taken {
        return Err(RuleViolation::DuplicateItem {
            basket_id: req.basket_id,
            product_id: req.product_id,
        });
    }
    Ok(())
}

/// Validates an update for an item of `product_id`. Any field listed in
/// `immutable` is rejected; `BasketId` is otherwise accepted.
pub(crate) fn parse_item_patch(
    body: &[u8],
    product_id: u64,
    catalog: &Catalog,
    immutable: &[&'static str],
) -> Result<ItemPatch, RuleViolation> {
    let map = parse_object(body)?;
    if let Some(&field) = immutable.iter().find(|f| map.contains_key(**f)) {
        return Err(RuleViolation::NoUpdate { field });
    }
    let basket_id = match map.get("BasketId") {
        None => None,
        Some(_) => Some(require_u64(&map, "BasketId")?),
    };
    let quantity = match map.get("quantity") {
        None => None,
        Some(v) => Some(check_quantity(catalog, product_id, as_quantity(v)?)?),
    };
    Ok(ItemPatch {
        basket_id,
        quantity,
    })
}

#[cfg(test)]
#[path = "../../tests/bin/basket_fixture_server/rules_tests.rs"]
mod tests;
