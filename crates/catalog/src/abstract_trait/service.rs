use crate::domain::requests::{CreateProductRequest, UpdateProductRequest};
use crate::model::Product;
use async_trait::async_trait;
use shared::domain::SessionContext;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCatalogQueryService = Arc<dyn CatalogQueryServiceTrait + Send + Sync>;
pub type DynCatalogCommandService = Arc<dyn CatalogCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CatalogQueryServiceTrait {
    async fn fetch_products(&self) -> Result<Vec<Product>, ServiceError>;
    async fn fetch_product(&self, id: i64) -> Result<Product, ServiceError>;
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, ServiceError>;
    async fn fetch_in_stock(&self) -> Result<Vec<Product>, ServiceError>;
}

#[async_trait]
pub trait CatalogCommandServiceTrait {
    async fn create_product(
        &self,
        session: &SessionContext,
        req: &CreateProductRequest,
    ) -> Result<Product, ServiceError>;
    async fn update_product(
        &self,
        session: &SessionContext,
        req: &UpdateProductRequest,
    ) -> Result<Product, ServiceError>;
    async fn delete_product(&self, session: &SessionContext, id: i64)
    -> Result<(), ServiceError>;
}
