mod api;
mod service;

pub use self::api::{DynProductApi, ProductApiTrait};
pub use self::service::{
    CatalogCommandServiceTrait, CatalogQueryServiceTrait, DynCatalogCommandService,
    DynCatalogQueryService,
};
