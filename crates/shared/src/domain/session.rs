use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Actor role as reported by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

/// The authenticated session, passed explicitly into every actor-sensitive
/// operation. The core performs no authentication itself; this is an input
/// parameter resolved by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub customer_id: Uuid,
    pub role: Role,
}

impl SessionContext {
    pub fn customer(customer_id: Uuid) -> Self {
        Self {
            customer_id,
            role: Role::Customer,
        }
    }

    pub fn admin(customer_id: Uuid) -> Self {
        Self {
            customer_id,
            role: Role::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self, operation: &str) -> Result<(), ServiceError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(format!(
                "{operation} requires the admin role"
            )))
        }
    }
}
