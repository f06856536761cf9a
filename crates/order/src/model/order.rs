use crate::model::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CashOnDelivery,
    BankTransfer,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

/// Denormalized line of a placed order. `price_at_purchase` is snapshotted
/// at creation so later catalog price changes never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub product_id: Option<i64>,
    pub product_name: String,
    pub quantity: u32,
    pub price_at_purchase: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price_at_purchase * f64::from(self.quantity)
    }
}

/// An order as confirmed by the backend. Only `status` changes after
/// creation, and only through the admin transition set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(rename = "userId")]
    pub customer_id: Uuid,
    pub order_number: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub shipping_address: String,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Sum over the snapshotted lines. Equals `total_amount` at creation
    /// time and stays equal because neither side is ever recomputed.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}
