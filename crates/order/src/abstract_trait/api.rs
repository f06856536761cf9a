use crate::domain::requests::CreateOrderRequest;
use crate::model::{Order, OrderStatus};
use async_trait::async_trait;
use shared::errors::ApiError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderApi = Arc<dyn OrderApiTrait + Send + Sync>;

/// Remote order service contract. Creation is atomic server-side: stock is
/// re-validated and decremented, prices snapshotted and the cart cleared
/// in one operation.
#[async_trait]
pub trait OrderApiTrait {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, ApiError>;
    async fn fetch_orders(&self, customer_id: Uuid) -> Result<Vec<Order>, ApiError>;
    async fn fetch_order(&self, id: i64) -> Result<Order, ApiError>;
    async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError>;
    async fn set_order_status(&self, id: i64, status: OrderStatus) -> Result<Order, ApiError>;
}
