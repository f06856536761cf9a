mod api;
mod service;

pub use self::api::{DynOrderApi, OrderApiTrait};
pub use self::service::{
    DynOrderCommandService, DynOrderQueryService, OrderCommandServiceTrait,
    OrderQueryServiceTrait,
};
