use super::*;

/// Basket handed out to the configured login user.
pub(crate) const LOGIN_BASKET_ID: u64 = 2;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub(crate) struct BasketItem {
    pub(crate) id: u64,
    #[serde(rename = "BasketId")]
    pub(crate) basket_id: u64,
    #[serde(rename = "ProductId")]
    pub(crate) product_id: u64,
    pub(crate) quantity: u32,
    #[serde(rename = "createdAt")]
    pub(crate) created_at: String,
    #[serde(rename = "updatedAt")]
    pub(crate) updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Product {
    pub(crate) id: u64,
    /// Per-product ceiling; `None` leaves only the global ceiling.
    pub(crate) limit_per_order: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Catalog {
    products: BTreeMap<u64, Product>,
}

impl Catalog {
    pub(crate) fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Products 1..=24; product 1 may be ordered at most 5 times.
    pub(crate) fn standard() -> Self {
        Self::new((1..=24).map(|id| Product {
            id,
            limit_per_order: (id == 1).then_some(5),
        }))
    }

    /// Same products with every per-product ceiling removed.
    pub(crate) fn without_product_limits(mut self) -> Self {
        for p in self.products.values_mut() {
            p.limit_per_order = None;
        }
        self
    }

    pub(crate) fn get(&self, id: u64) -> Option<&Product> {
        self.products.get(&id)
    }
}

pub(crate) struct AppState {
    pub(crate) login_email: String,
    pub(crate) login_password: String,

    /// Skip the bearer gate entirely; lets tests prove the checker notices.
    pub(crate) allow_anonymous: bool,

    /// Fields an update may not touch; empty when rules are relaxed.
    pub(crate) immutable_fields: &'static [&'static str],

    pub(crate) catalog: Catalog,

    /// blake3 hashes of issued tokens.
    pub(crate) token_hashes: RwLock<HashSet<String>>,
    pub(crate) items: RwLock<BTreeMap<u64, BasketItem>>,
    pub(crate) next_item_id: AtomicU64,
}

impl AppState {
    pub(crate) fn new(
        login_email: String,
        login_password: String,
        allow_anonymous: bool,
        immutable_fields: &'static [&'static str],
        catalog: Catalog,
    ) -> Self {
        Self {
            login_email,
            login_password,
            allow_anonymous,
            immutable_fields,
            catalog,
            token_hashes: RwLock::new(HashSet::new()),
            items: RwLock::new(BTreeMap::new()),
            next_item_id: AtomicU64::new(1),
        }
    }

    pub(crate) fn allocate_item_id(&self) -> u64 {
        self.next_item_id.fetch_add(1, Ordering::Relaxed)
    }
}
