mod api;
mod cart;
mod lifecycle;
mod service;

pub use self::api::ApiError;
pub use self::cart::CartError;
pub use self::lifecycle::LifecycleError;
pub use self::service::ServiceError;
