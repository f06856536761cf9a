use crate::domain::requests::CheckoutDetails;
use crate::model::{Order, OrderStatus};
use async_trait::async_trait;
use cart::model::CartEntry;
use shared::domain::SessionContext;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn fetch_orders(&self, session: &SessionContext) -> Result<Vec<Order>, ServiceError>;
    async fn fetch_order(&self, session: &SessionContext, id: i64)
    -> Result<Order, ServiceError>;
    /// Admin console listing; rejected for customer sessions.
    async fn fetch_all_orders(&self, session: &SessionContext)
    -> Result<Vec<Order>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    /// Validates the cart and the entered details locally, derives the
    /// total through the aggregator and submits the draft. Backend
    /// rejection (e.g. a stock race) is an expected failure mode.
    async fn checkout(
        &self,
        session: &SessionContext,
        entries: &[CartEntry],
        details: &CheckoutDetails,
    ) -> Result<Order, ServiceError>;

    /// Admin transition request, gated by the order state machine before
    /// anything reaches the network. The returned order is the backend's
    /// confirmed state, never a local echo.
    async fn set_status(
        &self,
        session: &SessionContext,
        order: &Order,
        new_status: OrderStatus,
    ) -> Result<Order, ServiceError>;
}
