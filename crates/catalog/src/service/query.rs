use crate::abstract_trait::{CatalogQueryServiceTrait, DynProductApi};
use crate::model::Product;
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct CatalogQueryService {
    api: DynProductApi,
}

impl CatalogQueryService {
    pub fn new(api: DynProductApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CatalogQueryServiceTrait for CatalogQueryService {
    async fn fetch_products(&self) -> Result<Vec<Product>, ServiceError> {
        info!("📦 Fetching product catalog");

        match self.api.fetch_all().await {
            Ok(products) => {
                info!("✅ Fetched {} products", products.len());
                Ok(products)
            }
            Err(e) => {
                error!("❌ Failed to fetch products: {e}");
                Err(ServiceError::Api(e))
            }
        }
    }

    async fn fetch_product(&self, id: i64) -> Result<Product, ServiceError> {
        info!("📦 Fetching product id={id}");

        self.api.fetch_by_id(id).await.map_err(|e| {
            error!("❌ Failed to fetch product id={id}: {e}");
            ServiceError::Api(e)
        })
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, ServiceError> {
        info!("🔍 Searching products: {query}");

        self.api.search(query).await.map_err(|e| {
            error!("❌ Product search failed: {e}");
            ServiceError::Api(e)
        })
    }

    async fn fetch_in_stock(&self) -> Result<Vec<Product>, ServiceError> {
        info!("📦 Fetching in-stock products");

        self.api.fetch_in_stock().await.map_err(|e| {
            error!("❌ Failed to fetch in-stock products: {e}");
            ServiceError::Api(e)
        })
    }
}
