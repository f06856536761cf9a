use crate::domain::requests::RepairBookingForm;
use crate::model::{RepairRequest, RepairStatus, RepairStatusUpdate};
use async_trait::async_trait;
use shared::domain::SessionContext;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRepairQueryService = Arc<dyn RepairQueryServiceTrait + Send + Sync>;
pub type DynRepairCommandService = Arc<dyn RepairCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait RepairQueryServiceTrait {
    async fn fetch_requests(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<RepairRequest>, ServiceError>;
    async fn fetch_request(
        &self,
        session: &SessionContext,
        id: Uuid,
    ) -> Result<RepairRequest, ServiceError>;
    /// Admin console listing; rejected for customer sessions.
    async fn fetch_all_requests(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<RepairRequest>, ServiceError>;
    async fn fetch_by_status(
        &self,
        session: &SessionContext,
        status: RepairStatus,
    ) -> Result<Vec<RepairRequest>, ServiceError>;
}

#[async_trait]
pub trait RepairCommandServiceTrait {
    async fn book(
        &self,
        session: &SessionContext,
        form: &RepairBookingForm,
    ) -> Result<RepairRequest, ServiceError>;

    /// Admin transition request. Required transition fields and machine
    /// reachability are checked locally; a rejection never reaches the
    /// network and the ticket keeps its current status.
    async fn set_status(
        &self,
        session: &SessionContext,
        request: &RepairRequest,
        update: &RepairStatusUpdate,
    ) -> Result<RepairRequest, ServiceError>;
}
