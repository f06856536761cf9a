use thiserror::Error;

/// Local cart validation failures. These are recovered in place: the
/// mutation is simply not applied and the quantity control stays disabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Quantity {requested} is outside the allowed range [1, {stock}]")]
    InvalidQuantity { requested: i64, stock: u32 },

    #[error("Product is no longer available")]
    Unavailable,

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Checkout blocked: {unavailable} cart item(s) are unavailable")]
    CheckoutBlocked { unavailable: usize },
}
