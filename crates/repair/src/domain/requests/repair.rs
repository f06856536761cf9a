use crate::model::{ServiceType, Urgency};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Booking form as entered on the repair screen.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RepairBookingForm {
    #[validate(length(min = 1, message = "Equipment type is required"))]
    pub equipment_type: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[validate(length(min = 10, message = "Please describe the issue (at least 10 characters)"))]
    pub issue_description: String,

    pub urgency: Urgency,

    pub service_type: ServiceType,

    #[serde(default)]
    pub pickup_address: Option<String>,

    #[serde(default)]
    pub preferred_date: Option<NaiveDate>,

    #[serde(default)]
    pub preferred_time: Option<String>,
}

impl RepairBookingForm {
    /// A pickup booking must say where to pick the equipment up.
    pub fn has_required_pickup_address(&self) -> bool {
        self.service_type != ServiceType::Pickup
            || self
                .pickup_address
                .as_deref()
                .map(str::trim)
                .is_some_and(|addr| !addr.is_empty())
    }
}

/// Wire shape posted to the repair service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepairRequest {
    pub user_id: Uuid,
    pub equipment_type: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub issue_description: String,
    pub urgency: Urgency,
    pub service_type: ServiceType,
    #[serde(default)]
    pub pickup_address: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<NaiveDate>,
    #[serde(default)]
    pub preferred_time: Option<String>,
}

impl CreateRepairRequest {
    pub fn from_form(customer_id: Uuid, form: &RepairBookingForm) -> Self {
        Self {
            user_id: customer_id,
            equipment_type: form.equipment_type.clone(),
            brand: form.brand.clone(),
            issue_description: form.issue_description.clone(),
            urgency: form.urgency,
            service_type: form.service_type,
            // Drop-off bookings never carry an address, mirroring the form.
            pickup_address: match form.service_type {
                ServiceType::Pickup => form.pickup_address.clone(),
                ServiceType::Dropoff => None,
            },
            preferred_date: form.preferred_date,
            preferred_time: form.preferred_time.clone(),
        }
    }
}
