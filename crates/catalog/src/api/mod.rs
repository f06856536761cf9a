use crate::abstract_trait::ProductApiTrait;
use crate::domain::requests::{CreateProductRequest, UpdateProductRequest};
use crate::model::Product;
use async_trait::async_trait;
use reqwest::Client;
use shared::config::ApiConfig;
use shared::errors::ApiError;
use shared::utils::ensure_success;

#[derive(Clone)]
pub struct ProductApi {
    client: Client,
    config: ApiConfig,
}

impl ProductApi {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ProductApiTrait for ProductApi {
    async fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint("api/products"))
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Product, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint(&format!("api/products/{id}")))
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint("api/products/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_in_stock(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint("api/products/in-stock"))
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<Product, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("api/products"))
            .json(req)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, ApiError> {
        let response = self
            .client
            .put(self.config.endpoint(&format!("api/products/{}", req.id)))
            .json(req)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.config.endpoint(&format!("api/products/{id}")))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}
