mod basket_item;
mod config;

pub use self::basket_item::{BasketItemPatch, NewBasketItem};
pub use self::config::{CheckerConfig, Credentials};
