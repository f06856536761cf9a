use catalog::model::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of a customer's cart, joined server-side with its product
/// snapshot. `product` is `None` when the product row has been deleted
/// since the item was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: i64,
    #[serde(rename = "userId")]
    pub customer_id: Uuid,
    pub product_id: i64,
    pub quantity: u32,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
}

impl CartEntry {
    /// An entry is unavailable when its snapshot is missing or the product
    /// is out of stock. Unavailable entries stay visible but cannot be
    /// mutated or purchased until removed or restocked.
    pub fn is_available(&self) -> bool {
        matches!(&self.product, Some(p) if p.stock_qty > 0)
    }

    pub fn stock_qty(&self) -> u32 {
        self.product.as_ref().map(|p| p.stock_qty).unwrap_or(0)
    }

    /// Last known unit price; 0 when no snapshot exists at all.
    pub fn unit_price(&self) -> f64 {
        self.product.as_ref().map(|p| p.price).unwrap_or(0.0)
    }
}
