use serde::{Deserialize, Serialize};

/// Body of `POST /api/BasketItems`.
///
/// The server spells the foreign keys in Pascal case and the quantity in
/// camel case; the serde renames keep that wire shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBasketItem {
    #[serde(rename = "BasketId")]
    pub basket_id: u64,
    #[serde(rename = "ProductId")]
    pub product_id: u64,
    pub quantity: u32,
}

impl NewBasketItem {
    pub fn new(basket_id: u64, product_id: u64, quantity: u32) -> Self {
        Self {
            basket_id,
            product_id,
            quantity,
        }
    }
}

/// Partial body of `PUT /api/BasketItems/{id}`. Absent fields are not sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketItemPatch {
    #[serde(rename = "BasketId", default, skip_serializing_if = "Option::is_none")]
    pub basket_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl BasketItemPatch {
    pub fn quantity(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    pub fn basket_id(basket_id: u64) -> Self {
        Self {
            basket_id: Some(basket_id),
            ..Self::default()
        }
    }
}
