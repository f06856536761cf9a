use crate::abstract_trait::{DynOrderApi, OrderCommandServiceTrait};
use crate::domain::requests::{CheckoutDetails, CreateOrderRequest};
use crate::model::{Order, OrderStatus};
use async_trait::async_trait;
use cart::aggregator::{cart_total, is_cart_empty, unavailable_entries};
use cart::model::CartEntry;
use shared::domain::SessionContext;
use shared::errors::{CartError, ServiceError};
use shared::lifecycle::LifecycleStatus;
use tracing::{error, info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct OrderCommandService {
    api: DynOrderApi,
}

impl OrderCommandService {
    pub fn new(api: DynOrderApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn checkout(
        &self,
        session: &SessionContext,
        entries: &[CartEntry],
        details: &CheckoutDetails,
    ) -> Result<Order, ServiceError> {
        details.validate()?;

        if is_cart_empty(entries) {
            return Err(CartError::EmptyCart.into());
        }

        let unavailable = unavailable_entries(entries).len();
        if unavailable > 0 {
            warn!("🛒 Checkout blocked: {unavailable} unavailable cart entries");
            return Err(CartError::CheckoutBlocked { unavailable }.into());
        }

        let total_amount = cart_total(entries);

        info!(
            "🏗️ Submitting order draft for customer {} ({} lines, total {total_amount})",
            session.customer_id,
            entries.len()
        );

        let req = CreateOrderRequest {
            user_id: session.customer_id,
            total_amount,
            payment_method: details.payment_method,
            shipping_address: details.shipping_address.clone(),
            customer_name: details.customer_name.clone(),
            customer_phone: details.customer_phone.clone(),
            notes: details.notes.clone(),
        };

        match self.api.create_order(&req).await {
            Ok(order) => {
                info!(
                    "✅ Order {} created with status '{}'",
                    order.order_number, order.status
                );
                Ok(order)
            }
            Err(e) => {
                // Stock can change between fetch and submit; the backend's
                // atomic re-validation is authoritative.
                error!("❌ Checkout rejected: {e}");
                Err(ServiceError::CheckoutRejected(e))
            }
        }
    }

    async fn set_status(
        &self,
        session: &SessionContext,
        order: &Order,
        new_status: OrderStatus,
    ) -> Result<Order, ServiceError> {
        order
            .status
            .ensure_transition(&new_status, session.role)?;

        info!(
            "✏️ Requesting order {} transition '{}' -> '{new_status}'",
            order.order_number, order.status
        );

        match self.api.set_order_status(order.id, new_status).await {
            Ok(updated) => {
                info!(
                    "✅ Order {} confirmed at status '{}'",
                    updated.order_number, updated.status
                );
                Ok(updated)
            }
            Err(e) => {
                error!("❌ Transition submission failed for order {}: {e}", order.id);
                Err(ServiceError::TransitionSubmission(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::OrderApiTrait;
    use crate::model::PaymentMethod;
    use shared::errors::ApiError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    #[derive(Default)]
    struct MockOrderApi {
        create_calls: AtomicUsize,
        status_calls: AtomicUsize,
        fail_status: bool,
    }

    fn confirmed_order(status: OrderStatus, total_amount: f64) -> Order {
        serde_json::from_str(&format!(
            r#"{{
                "id": 7,
                "userId": "7f1f9df2-9f0e-4f39-8b5e-2a54a53f2a10",
                "orderNumber": "YE-20260806-0001",
                "totalAmount": {total_amount},
                "status": "{status}",
                "paymentMethod": "cash_on_delivery",
                "shippingAddress": "12 Mill Road",
                "customerName": "A. Perera",
                "customerPhone": "0771234567"
            }}"#
        ))
        .unwrap()
    }

    #[async_trait]
    impl OrderApiTrait for MockOrderApi {
        async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, ApiError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            Ok(confirmed_order(OrderStatus::Pending, req.total_amount))
        }

        async fn fetch_orders(&self, _customer_id: Uuid) -> Result<Vec<Order>, ApiError> {
            Ok(Vec::new())
        }

        async fn fetch_order(&self, _id: i64) -> Result<Order, ApiError> {
            Ok(confirmed_order(OrderStatus::Pending, 0.0))
        }

        async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError> {
            Ok(Vec::new())
        }

        async fn set_order_status(
            &self,
            _id: i64,
            status: OrderStatus,
        ) -> Result<Order, ApiError> {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_status {
                return Err(ApiError::Status {
                    status: 503,
                    message: "unavailable".into(),
                });
            }
            Ok(confirmed_order(status, 3800.0))
        }
    }

    fn cart_entry(quantity: u32, price: f64, stock_qty: u32) -> CartEntry {
        serde_json::from_str(&format!(
            r#"{{
                "id": 10,
                "userId": "7f1f9df2-9f0e-4f39-8b5e-2a54a53f2a10",
                "productId": 4,
                "quantity": {quantity},
                "product": {{"id": 4, "name": "Breaker", "price": {price}, "stockQty": {stock_qty}}}
            }}"#
        ))
        .unwrap()
    }

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            customer_name: "A. Perera".into(),
            customer_phone: "0771234567".into(),
            shipping_address: "12 Mill Road".into(),
            payment_method: PaymentMethod::CashOnDelivery,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_checkout_submits_aggregated_total() {
        let api = Arc::new(MockOrderApi::default());
        let service = OrderCommandService::new(api.clone());
        let session = SessionContext::customer(Uuid::new_v4());

        let entries = vec![cart_entry(2, 1500.0, 10), cart_entry(1, 800.0, 5)];
        let order = service
            .checkout(&session, &entries, &details())
            .await
            .unwrap();

        assert_eq!(order.total_amount, 3800.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(api.create_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_checkout_rejects_empty_cart_locally() {
        let api = Arc::new(MockOrderApi::default());
        let service = OrderCommandService::new(api.clone());
        let session = SessionContext::customer(Uuid::new_v4());

        let err = service.checkout(&session, &[], &details()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Cart(CartError::EmptyCart)));
        assert_eq!(api.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_checkout_blocked_by_out_of_stock_entry() {
        let api = Arc::new(MockOrderApi::default());
        let service = OrderCommandService::new(api.clone());
        let session = SessionContext::customer(Uuid::new_v4());

        let entries = vec![cart_entry(2, 1500.0, 0), cart_entry(1, 800.0, 5)];
        let err = service
            .checkout(&session, &entries, &details())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Cart(CartError::CheckoutBlocked { unavailable: 1 })
        ));
        assert_eq!(api.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_transition_never_reaches_network() {
        let api = Arc::new(MockOrderApi::default());
        let service = OrderCommandService::new(api.clone());
        let session = SessionContext::admin(Uuid::new_v4());

        let order = confirmed_order(OrderStatus::Delivered, 3800.0);
        let err = service
            .set_status(&session, &order, OrderStatus::Shipped)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Lifecycle(_)));
        assert_eq!(api.status_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_customer_cannot_request_transition() {
        let api = Arc::new(MockOrderApi::default());
        let service = OrderCommandService::new(api.clone());
        let session = SessionContext::customer(Uuid::new_v4());

        let order = confirmed_order(OrderStatus::Pending, 3800.0);
        let err = service
            .set_status(&session, &order, OrderStatus::Confirmed)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Lifecycle(_)));
        assert_eq!(api.status_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_admin_cancels_shipped_order() {
        let api = Arc::new(MockOrderApi::default());
        let service = OrderCommandService::new(api.clone());
        let session = SessionContext::admin(Uuid::new_v4());

        let order = confirmed_order(OrderStatus::Shipped, 3800.0);
        let updated = service
            .set_status(&session, &order, OrderStatus::Cancelled)
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Cancelled);
        assert_eq!(api.status_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_transition_submission() {
        let api = Arc::new(MockOrderApi {
            fail_status: true,
            ..Default::default()
        });
        let service = OrderCommandService::new(api.clone());
        let session = SessionContext::admin(Uuid::new_v4());

        let order = confirmed_order(OrderStatus::Pending, 3800.0);
        let err = service
            .set_status(&session, &order, OrderStatus::Confirmed)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::TransitionSubmission(_)));
    }
}
