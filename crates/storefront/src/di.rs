use cart::abstract_trait::{DynCartApi, DynCartCommandService, DynCartQueryService};
use cart::api::CartApi;
use cart::service::{CartCommandService, CartQueryService};
use catalog::abstract_trait::{
    DynCatalogCommandService, DynCatalogQueryService, DynProductApi,
};
use catalog::api::ProductApi;
use catalog::service::{CatalogCommandService, CatalogQueryService};
use order::abstract_trait::{DynOrderApi, DynOrderCommandService, DynOrderQueryService};
use order::api::OrderApi;
use order::service::{OrderCommandService, OrderQueryService};
use repair::abstract_trait::{DynRepairApi, DynRepairCommandService, DynRepairQueryService};
use repair::api::RepairApi;
use repair::service::{RepairCommandService, RepairQueryService};
use reqwest::Client;
use shared::config::ApiConfig;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub catalog_query: DynCatalogQueryService,
    pub catalog_command: DynCatalogCommandService,
    pub cart_query: DynCartQueryService,
    pub cart_command: DynCartCommandService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
    pub repair_query: DynRepairQueryService,
    pub repair_command: DynRepairCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("catalog_query", &"CatalogQueryService")
            .field("catalog_command", &"CatalogCommandService")
            .field("cart_query", &"CartQueryService")
            .field("cart_command", &"CartCommandService")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .field("repair_query", &"RepairQueryService")
            .field("repair_command", &"RepairCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        let product_api: DynProductApi =
            Arc::new(ProductApi::new(client.clone(), config.clone()));
        let cart_api: DynCartApi = Arc::new(CartApi::new(client.clone(), config.clone()));
        let order_api: DynOrderApi = Arc::new(OrderApi::new(client.clone(), config.clone()));
        let repair_api: DynRepairApi = Arc::new(RepairApi::new(client, config));

        let catalog_query: DynCatalogQueryService =
            Arc::new(CatalogQueryService::new(product_api.clone()));
        let catalog_command: DynCatalogCommandService =
            Arc::new(CatalogCommandService::new(product_api));

        let cart_query: DynCartQueryService = Arc::new(CartQueryService::new(cart_api.clone()));
        let cart_command: DynCartCommandService = Arc::new(CartCommandService::new(cart_api));

        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_api.clone()));
        let order_command: DynOrderCommandService =
            Arc::new(OrderCommandService::new(order_api));

        let repair_query: DynRepairQueryService =
            Arc::new(RepairQueryService::new(repair_api.clone()));
        let repair_command: DynRepairCommandService =
            Arc::new(RepairCommandService::new(repair_api));

        Self {
            catalog_query,
            catalog_command,
            cart_query,
            cart_command,
            order_query,
            order_command,
            repair_query,
            repair_command,
        }
    }
}
