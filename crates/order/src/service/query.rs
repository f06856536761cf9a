use crate::abstract_trait::{DynOrderApi, OrderQueryServiceTrait};
use crate::model::Order;
use async_trait::async_trait;
use shared::domain::SessionContext;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryService {
    api: DynOrderApi,
}

impl OrderQueryService {
    pub fn new(api: DynOrderApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn fetch_orders(&self, session: &SessionContext) -> Result<Vec<Order>, ServiceError> {
        info!("📄 Fetching orders for customer {}", session.customer_id);

        match self.api.fetch_orders(session.customer_id).await {
            Ok(orders) => {
                info!("✅ Fetched {} orders", orders.len());
                Ok(orders)
            }
            Err(e) => {
                error!("❌ Failed to fetch orders: {e}");
                Err(ServiceError::Api(e))
            }
        }
    }

    async fn fetch_order(
        &self,
        _session: &SessionContext,
        id: i64,
    ) -> Result<Order, ServiceError> {
        info!("📄 Fetching order id={id}");

        self.api.fetch_order(id).await.map_err(|e| {
            error!("❌ Failed to fetch order id={id}: {e}");
            ServiceError::Api(e)
        })
    }

    async fn fetch_all_orders(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<Order>, ServiceError> {
        session.require_admin("list all orders")?;

        info!("📄 Fetching all orders for admin console");

        match self.api.fetch_all_orders().await {
            Ok(orders) => {
                info!("✅ Fetched {} orders", orders.len());
                Ok(orders)
            }
            Err(e) => {
                error!("❌ Failed to fetch all orders: {e}");
                Err(ServiceError::Api(e))
            }
        }
    }
}
