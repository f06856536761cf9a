use crate::abstract_trait::{DynRepairApi, RepairCommandServiceTrait};
use crate::domain::requests::{CreateRepairRequest, RepairBookingForm};
use crate::model::{RepairRequest, RepairStatusUpdate};
use async_trait::async_trait;
use shared::domain::SessionContext;
use shared::errors::ServiceError;
use shared::lifecycle::LifecycleStatus;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct RepairCommandService {
    api: DynRepairApi,
}

impl RepairCommandService {
    pub fn new(api: DynRepairApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RepairCommandServiceTrait for RepairCommandService {
    async fn book(
        &self,
        session: &SessionContext,
        form: &RepairBookingForm,
    ) -> Result<RepairRequest, ServiceError> {
        form.validate()?;

        if !form.has_required_pickup_address() {
            return Err(ServiceError::Validation(vec![
                "pickupAddress: Pickup address is required for pickup service".into(),
            ]));
        }

        info!(
            "🔧 Booking {} repair for customer {}",
            form.equipment_type, session.customer_id
        );

        let req = CreateRepairRequest::from_form(session.customer_id, form);

        match self.api.create_request(&req).await {
            Ok(request) => {
                info!("✅ Repair request {} created", request.id);
                Ok(request)
            }
            Err(e) => {
                error!("❌ Failed to book repair: {e}");
                Err(ServiceError::Api(e))
            }
        }
    }

    async fn set_status(
        &self,
        session: &SessionContext,
        request: &RepairRequest,
        update: &RepairStatusUpdate,
    ) -> Result<RepairRequest, ServiceError> {
        // Required fields first, then reachability; both are local and
        // leave the ticket untouched on rejection.
        update.validate_required_fields()?;
        request
            .status
            .ensure_transition(&update.status, session.role)?;

        info!(
            "✏️ Requesting repair {} transition '{}' -> '{}'",
            request.id, request.status, update.status
        );

        match self.api.set_status(request.id, update).await {
            Ok(updated) => {
                info!(
                    "✅ Repair {} confirmed at status '{}'",
                    updated.id, updated.status
                );
                Ok(updated)
            }
            Err(e) => {
                error!("❌ Transition submission failed for repair {}: {e}", request.id);
                Err(ServiceError::TransitionSubmission(e))
            }
        }
    }
}
