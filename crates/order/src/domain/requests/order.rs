use crate::model::{OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Delivery and payment details entered on the checkout screen.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDetails {
    #[validate(length(min = 1, message = "Name is required"))]
    pub customer_name: String,

    #[validate(length(min = 1, message = "Phone number is required"))]
    pub customer_phone: String,

    #[validate(length(min = 1, message = "Shipping address is required"))]
    pub shipping_address: String,

    pub payment_method: PaymentMethod,

    #[serde(default)]
    pub notes: Option<String>,
}

/// Order draft submitted to the order service. The backend re-validates
/// stock, snapshots prices, builds the item lines from the stored cart and
/// clears it, all atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: Uuid,
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
    pub shipping_address: String,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_details_require_contact_fields() {
        let details = CheckoutDetails {
            customer_name: String::new(),
            customer_phone: "0771234567".into(),
            shipping_address: "12 Mill Road".into(),
            payment_method: PaymentMethod::CashOnDelivery,
            notes: None,
        };
        assert!(details.validate().is_err());
    }

    #[test]
    fn test_status_request_wire_shape() {
        let req = UpdateOrderStatusRequest {
            status: OrderStatus::Confirmed,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"status":"confirmed"}"#
        );
    }
}
