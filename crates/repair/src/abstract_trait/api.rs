use crate::domain::requests::CreateRepairRequest;
use crate::model::{RepairRequest, RepairStatus, RepairStatusUpdate};
use async_trait::async_trait;
use shared::errors::ApiError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRepairApi = Arc<dyn RepairApiTrait + Send + Sync>;

/// Remote repair service contract.
#[async_trait]
pub trait RepairApiTrait {
    async fn create_request(&self, req: &CreateRepairRequest)
    -> Result<RepairRequest, ApiError>;
    async fn fetch_requests(&self, customer_id: Uuid) -> Result<Vec<RepairRequest>, ApiError>;
    async fn fetch_request(&self, id: Uuid) -> Result<RepairRequest, ApiError>;
    async fn fetch_all_requests(&self) -> Result<Vec<RepairRequest>, ApiError>;
    async fn fetch_by_status(&self, status: RepairStatus)
    -> Result<Vec<RepairRequest>, ApiError>;
    async fn set_status(
        &self,
        id: Uuid,
        update: &RepairStatusUpdate,
    ) -> Result<RepairRequest, ApiError>;
}
