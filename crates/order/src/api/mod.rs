use crate::abstract_trait::OrderApiTrait;
use crate::domain::requests::{CreateOrderRequest, UpdateOrderStatusRequest};
use crate::model::{Order, OrderStatus};
use async_trait::async_trait;
use reqwest::Client;
use shared::config::ApiConfig;
use shared::errors::ApiError;
use shared::utils::ensure_success;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderApi {
    client: Client,
    config: ApiConfig,
}

impl OrderApi {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl OrderApiTrait for OrderApi {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("api/orders"))
            .json(req)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_orders(&self, customer_id: Uuid) -> Result<Vec<Order>, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint(&format!("api/orders/user/{customer_id}")))
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_order(&self, id: i64) -> Result<Order, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint(&format!("api/orders/{id}")))
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint("api/orders"))
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn set_order_status(&self, id: i64, status: OrderStatus) -> Result<Order, ApiError> {
        let response = self
            .client
            .patch(self.config.endpoint(&format!("api/orders/{id}/status")))
            .json(&UpdateOrderStatusRequest { status })
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}
