mod api;
mod service;

pub use self::api::{CartApiTrait, DynCartApi};
pub use self::service::{
    CartCommandServiceTrait, CartQueryServiceTrait, DynCartCommandService, DynCartQueryService,
};
