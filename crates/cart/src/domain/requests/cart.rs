use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub user_id: Uuid,

    pub product_id: i64,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_quantity() {
        let req = AddCartItemRequest {
            user_id: Uuid::new_v4(),
            product_id: 1,
            quantity: 0,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let req = AddCartItemRequest {
            user_id: Uuid::nil(),
            product_id: 4,
            quantity: 2,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("productId").is_some());
        assert!(json.get("userId").is_some());
    }
}
