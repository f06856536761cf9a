mod order;

pub use self::order::{CheckoutDetails, CreateOrderRequest, UpdateOrderStatusRequest};
