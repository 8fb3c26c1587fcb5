use super::*;

impl ApiClient {
    pub fn login(&self, credentials: &Credentials) -> Result<ApiResponse> {
        let req = self.client.post(self.url(LOGIN_PATH));
        let req = self.with_json(req, credentials);
        self.execute("login", req)
    }

    pub fn list_items(&self, auth: Auth<'_>) -> Result<ApiResponse> {
        let req = self.with_auth(self.client.get(self.url(BASKET_ITEMS_PATH)), auth);
        self.execute("list basket items", req)
    }

    pub fn create_item(&self, auth: Auth<'_>, item: &NewBasketItem) -> Result<ApiResponse> {
        let req = self.with_auth(self.client.post(self.url(BASKET_ITEMS_PATH)), auth);
        let req = self.with_json(req, item);
        self.execute("create basket item", req)
    }

    pub fn get_item(&self, auth: Auth<'_>, id: u64) -> Result<ApiResponse> {
        let req = self.with_auth(self.client.get(self.item_url(id)), auth);
        self.execute("get basket item", req)
    }

    pub fn update_item(
        &self,
        auth: Auth<'_>,
        id: u64,
        patch: &BasketItemPatch,
    ) -> Result<ApiResponse> {
        let req = self.with_auth(self.client.put(self.item_url(id)), auth);
        let req = self.with_json(req, patch);
        self.execute("update basket item", req)
    }

    pub fn delete_item(&self, auth: Auth<'_>, id: u64) -> Result<ApiResponse> {
        let req = self.with_auth(self.client.delete(self.item_url(id)), auth);
        self.execute("delete basket item", req)
    }

    fn item_url(&self, id: u64) -> String {
        self.url(&format!("{}/{}", BASKET_ITEMS_PATH, id))
    }
}
