use crate::domain::requests::AddCartItemRequest;
use crate::model::CartEntry;
use async_trait::async_trait;
use shared::errors::ApiError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCartApi = Arc<dyn CartApiTrait + Send + Sync>;

/// Remote cart service contract. The backend owns persistence; the client
/// re-fetches after every mutation instead of echoing state locally.
#[async_trait]
pub trait CartApiTrait {
    async fn fetch_cart(&self, customer_id: Uuid) -> Result<Vec<CartEntry>, ApiError>;
    async fn add_item(&self, req: &AddCartItemRequest) -> Result<CartEntry, ApiError>;
    async fn update_item_quantity(
        &self,
        entry_id: i64,
        quantity: u32,
    ) -> Result<CartEntry, ApiError>;
    async fn remove_item(&self, entry_id: i64) -> Result<(), ApiError>;
    async fn clear_cart(&self, customer_id: Uuid) -> Result<(), ApiError>;
}
