use crate::domain::requests::{CreateProductRequest, UpdateProductRequest};
use crate::model::Product;
use async_trait::async_trait;
use shared::errors::ApiError;
use std::sync::Arc;

pub type DynProductApi = Arc<dyn ProductApiTrait + Send + Sync>;

/// Remote catalog service contract. All calls are asynchronous and may fail
/// with a generic network error; the backend is the source of truth.
#[async_trait]
pub trait ProductApiTrait {
    async fn fetch_all(&self) -> Result<Vec<Product>, ApiError>;
    async fn fetch_by_id(&self, id: i64) -> Result<Product, ApiError>;
    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError>;
    async fn fetch_in_stock(&self) -> Result<Vec<Product>, ApiError>;
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, ApiError>;
    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}
