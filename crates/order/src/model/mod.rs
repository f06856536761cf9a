mod order;
mod status;

pub use self::order::{Order, OrderItem, PaymentMethod};
pub use self::status::OrderStatus;
