use crate::abstract_trait::{CartCommandServiceTrait, DynCartApi};
use crate::aggregator::validate_quantity_change;
use crate::domain::requests::AddCartItemRequest;
use crate::model::CartEntry;
use async_trait::async_trait;
use shared::domain::SessionContext;
use shared::errors::ServiceError;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct CartCommandService {
    api: DynCartApi,
}

impl CartCommandService {
    pub fn new(api: DynCartApi) -> Self {
        Self { api }
    }

    async fn step_quantity(
        &self,
        entry: &CartEntry,
        delta: i64,
    ) -> Result<CartEntry, ServiceError> {
        // Bound check first; a rejected step is a local no-op and nothing
        // is sent to the backend.
        let new_quantity = validate_quantity_change(entry, delta)?;

        info!(
            "🛒 Updating cart entry {} quantity {} -> {new_quantity}",
            entry.id, entry.quantity
        );

        match self.api.update_item_quantity(entry.id, new_quantity).await {
            Ok(updated) => {
                info!("✅ Cart entry {} now at quantity {}", updated.id, updated.quantity);
                Ok(updated)
            }
            Err(e) => {
                error!("❌ Failed to update cart entry {}: {e}", entry.id);
                Err(ServiceError::CartOperation(e))
            }
        }
    }
}

#[async_trait]
impl CartCommandServiceTrait for CartCommandService {
    async fn add_to_cart(
        &self,
        session: &SessionContext,
        product_id: i64,
        quantity: u32,
    ) -> Result<CartEntry, ServiceError> {
        let req = AddCartItemRequest {
            user_id: session.customer_id,
            product_id,
            quantity,
        };
        req.validate()?;

        info!(
            "🛒 Adding product {product_id} x{quantity} to cart for customer {}",
            session.customer_id
        );

        match self.api.add_item(&req).await {
            Ok(entry) => {
                info!("✅ Added cart entry {}", entry.id);
                Ok(entry)
            }
            Err(e) => {
                error!("❌ Failed to add product {product_id} to cart: {e}");
                Err(ServiceError::CartOperation(e))
            }
        }
    }

    async fn increment(
        &self,
        _session: &SessionContext,
        entry: &CartEntry,
    ) -> Result<CartEntry, ServiceError> {
        self.step_quantity(entry, 1).await
    }

    async fn decrement(
        &self,
        _session: &SessionContext,
        entry: &CartEntry,
    ) -> Result<CartEntry, ServiceError> {
        self.step_quantity(entry, -1).await
    }

    async fn remove_entry(
        &self,
        _session: &SessionContext,
        entry_id: i64,
    ) -> Result<(), ServiceError> {
        info!("🗑️ Removing cart entry {entry_id}");

        match self.api.remove_item(entry_id).await {
            Ok(()) => {
                info!("✅ Cart entry {entry_id} removed");
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to remove cart entry {entry_id}: {e}");
                Err(ServiceError::CartOperation(e))
            }
        }
    }

    async fn clear(&self, session: &SessionContext) -> Result<(), ServiceError> {
        info!("🗑️ Clearing cart for customer {}", session.customer_id);

        match self.api.clear_cart(session.customer_id).await {
            Ok(()) => {
                info!("✅ Cart cleared");
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to clear cart: {e}");
                Err(ServiceError::CartOperation(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::CartApiTrait;
    use shared::errors::{ApiError, CartError};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    #[derive(Default)]
    struct MockCartApi {
        update_calls: AtomicUsize,
        fail_updates: bool,
    }

    fn entry_with_stock(quantity: u32, stock_qty: u32) -> CartEntry {
        serde_json::from_str(&format!(
            r#"{{
                "id": 10,
                "userId": "7f1f9df2-9f0e-4f39-8b5e-2a54a53f2a10",
                "productId": 4,
                "quantity": {quantity},
                "product": {{"id": 4, "name": "Breaker", "price": 1000.0, "stockQty": {stock_qty}}}
            }}"#
        ))
        .unwrap()
    }

    #[async_trait]
    impl CartApiTrait for MockCartApi {
        async fn fetch_cart(&self, _customer_id: Uuid) -> Result<Vec<CartEntry>, ApiError> {
            Ok(Vec::new())
        }

        async fn add_item(&self, req: &AddCartItemRequest) -> Result<CartEntry, ApiError> {
            Ok(entry_with_stock(req.quantity, 10))
        }

        async fn update_item_quantity(
            &self,
            _entry_id: i64,
            quantity: u32,
        ) -> Result<CartEntry, ApiError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_updates {
                return Err(ApiError::Status {
                    status: 500,
                    message: "boom".into(),
                });
            }
            Ok(entry_with_stock(quantity, 10))
        }

        async fn remove_item(&self, _entry_id: i64) -> Result<(), ApiError> {
            Ok(())
        }

        async fn clear_cart(&self, _customer_id: Uuid) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn session() -> SessionContext {
        SessionContext::customer(Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_increment_above_stock_is_rejected_locally() {
        let api = Arc::new(MockCartApi::default());
        let service = CartCommandService::new(api.clone());

        // Quantity 3 of a product with stock 3: 4 > stockQty.
        let entry = entry_with_stock(3, 3);
        let err = service.increment(&session(), &entry).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Cart(CartError::InvalidQuantity {
                requested: 4,
                stock: 3
            })
        ));
        assert_eq!(api.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_decrement_below_one_is_rejected_locally() {
        let api = Arc::new(MockCartApi::default());
        let service = CartCommandService::new(api.clone());

        let entry = entry_with_stock(1, 5);
        let err = service.decrement(&session(), &entry).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Cart(CartError::InvalidQuantity { .. })
        ));
        assert_eq!(api.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_increment_is_forwarded() {
        let api = Arc::new(MockCartApi::default());
        let service = CartCommandService::new(api.clone());

        let entry = entry_with_stock(2, 5);
        let updated = service.increment(&session(), &entry).await.unwrap();

        assert_eq!(updated.quantity, 3);
        assert_eq!(api.update_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_as_cart_operation() {
        let api = Arc::new(MockCartApi {
            fail_updates: true,
            ..Default::default()
        });
        let service = CartCommandService::new(api.clone());

        let entry = entry_with_stock(2, 5);
        let err = service.increment(&session(), &entry).await.unwrap_err();

        assert!(matches!(err, ServiceError::CartOperation(_)));
        assert_eq!(api.update_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_add_to_cart_validates_quantity() {
        let api = Arc::new(MockCartApi::default());
        let service = CartCommandService::new(api.clone());

        let err = service
            .add_to_cart(&session(), 4, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
