use crate::abstract_trait::{CartQueryServiceTrait, DynCartApi};
use crate::model::CartEntry;
use async_trait::async_trait;
use shared::domain::SessionContext;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct CartQueryService {
    api: DynCartApi,
}

impl CartQueryService {
    pub fn new(api: DynCartApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CartQueryServiceTrait for CartQueryService {
    async fn fetch_cart(&self, session: &SessionContext) -> Result<Vec<CartEntry>, ServiceError> {
        info!("🛒 Fetching cart for customer {}", session.customer_id);

        match self.api.fetch_cart(session.customer_id).await {
            Ok(entries) => {
                info!("✅ Cart fetched with {} entries", entries.len());
                Ok(entries)
            }
            Err(e) => {
                error!("❌ Failed to fetch cart: {e}");
                Err(ServiceError::CartOperation(e))
            }
        }
    }
}
