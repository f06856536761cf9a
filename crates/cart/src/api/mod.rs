use crate::abstract_trait::CartApiTrait;
use crate::domain::requests::AddCartItemRequest;
use crate::model::CartEntry;
use async_trait::async_trait;
use reqwest::Client;
use shared::config::ApiConfig;
use shared::errors::ApiError;
use shared::utils::ensure_success;
use uuid::Uuid;

#[derive(Clone)]
pub struct CartApi {
    client: Client,
    config: ApiConfig,
}

impl CartApi {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl CartApiTrait for CartApi {
    async fn fetch_cart(&self, customer_id: Uuid) -> Result<Vec<CartEntry>, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint(&format!("api/cart/user/{customer_id}")))
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn add_item(&self, req: &AddCartItemRequest) -> Result<CartEntry, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("api/cart"))
            .json(req)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn update_item_quantity(
        &self,
        entry_id: i64,
        quantity: u32,
    ) -> Result<CartEntry, ApiError> {
        let response = self
            .client
            .put(self.config.endpoint(&format!("api/cart/{entry_id}")))
            .query(&[("quantity", quantity)])
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn remove_item(&self, entry_id: i64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.config.endpoint(&format!("api/cart/{entry_id}")))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn clear_cart(&self, customer_id: Uuid) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.config.endpoint(&format!("api/cart/user/{customer_id}")))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}
