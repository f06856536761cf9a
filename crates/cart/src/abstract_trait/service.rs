use crate::model::CartEntry;
use async_trait::async_trait;
use shared::domain::SessionContext;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCartQueryService = Arc<dyn CartQueryServiceTrait + Send + Sync>;
pub type DynCartCommandService = Arc<dyn CartCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryServiceTrait {
    async fn fetch_cart(&self, session: &SessionContext) -> Result<Vec<CartEntry>, ServiceError>;
}

#[async_trait]
pub trait CartCommandServiceTrait {
    async fn add_to_cart(
        &self,
        session: &SessionContext,
        product_id: i64,
        quantity: u32,
    ) -> Result<CartEntry, ServiceError>;

    /// Bound-checked against the entry's product stock before anything is
    /// sent; an out-of-bounds step is rejected locally.
    async fn increment(
        &self,
        session: &SessionContext,
        entry: &CartEntry,
    ) -> Result<CartEntry, ServiceError>;

    async fn decrement(
        &self,
        session: &SessionContext,
        entry: &CartEntry,
    ) -> Result<CartEntry, ServiceError>;

    async fn remove_entry(
        &self,
        session: &SessionContext,
        entry_id: i64,
    ) -> Result<(), ServiceError>;

    async fn clear(&self, session: &SessionContext) -> Result<(), ServiceError>;
}
