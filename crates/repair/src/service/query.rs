use crate::abstract_trait::{DynRepairApi, RepairQueryServiceTrait};
use crate::model::{RepairRequest, RepairStatus};
use async_trait::async_trait;
use shared::domain::SessionContext;
use shared::errors::ServiceError;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct RepairQueryService {
    api: DynRepairApi,
}

impl RepairQueryService {
    pub fn new(api: DynRepairApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RepairQueryServiceTrait for RepairQueryService {
    async fn fetch_requests(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<RepairRequest>, ServiceError> {
        info!(
            "🔧 Fetching repair requests for customer {}",
            session.customer_id
        );

        match self.api.fetch_requests(session.customer_id).await {
            Ok(requests) => {
                info!("✅ Fetched {} repair requests", requests.len());
                Ok(requests)
            }
            Err(e) => {
                error!("❌ Failed to fetch repair requests: {e}");
                Err(ServiceError::Api(e))
            }
        }
    }

    async fn fetch_request(
        &self,
        _session: &SessionContext,
        id: Uuid,
    ) -> Result<RepairRequest, ServiceError> {
        info!("🔧 Fetching repair request {id}");

        self.api.fetch_request(id).await.map_err(|e| {
            error!("❌ Failed to fetch repair request {id}: {e}");
            ServiceError::Api(e)
        })
    }

    async fn fetch_all_requests(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<RepairRequest>, ServiceError> {
        session.require_admin("list all repair requests")?;

        info!("🔧 Fetching all repair requests for admin console");

        match self.api.fetch_all_requests().await {
            Ok(requests) => {
                info!("✅ Fetched {} repair requests", requests.len());
                Ok(requests)
            }
            Err(e) => {
                error!("❌ Failed to fetch all repair requests: {e}");
                Err(ServiceError::Api(e))
            }
        }
    }

    async fn fetch_by_status(
        &self,
        session: &SessionContext,
        status: RepairStatus,
    ) -> Result<Vec<RepairRequest>, ServiceError> {
        session.require_admin("filter repair requests by status")?;

        info!("🔧 Fetching repair requests with status '{status}'");

        self.api.fetch_by_status(status).await.map_err(|e| {
            error!("❌ Failed to fetch repair requests by status: {e}");
            ServiceError::Api(e)
        })
    }
}
