use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub stock_qty: u32,

    #[serde(default)]
    pub category_id: Option<i64>,

    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub id: i64,

    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub stock_qty: u32,

    #[serde(default)]
    pub category_id: Option<i64>,

    #[serde(default)]
    pub image_url: Option<String>,
}
