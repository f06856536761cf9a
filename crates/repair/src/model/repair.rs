use crate::model::RepairStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Normal,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Dropoff,
    Pickup,
}

/// A repair booking as stored by the backend. `estimated_cost` and
/// `admin_notes` are written as side effects of the approve/reject
/// transitions, never directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairRequest {
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub customer_id: Uuid,
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
    pub status: RepairStatus,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
