use crate::abstract_trait::{CatalogCommandServiceTrait, DynProductApi};
use crate::domain::requests::{CreateProductRequest, UpdateProductRequest};
use crate::model::Product;
use async_trait::async_trait;
use shared::domain::SessionContext;
use shared::errors::ServiceError;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct CatalogCommandService {
    api: DynProductApi,
}

impl CatalogCommandService {
    pub fn new(api: DynProductApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CatalogCommandServiceTrait for CatalogCommandService {
    async fn create_product(
        &self,
        session: &SessionContext,
        req: &CreateProductRequest,
    ) -> Result<Product, ServiceError> {
        session.require_admin("create product")?;
        req.validate()?;

        info!("🏗️ Creating product '{}'", req.name);

        match self.api.create(req).await {
            Ok(product) => {
                info!("✅ Product created with id={}", product.id);
                Ok(product)
            }
            Err(e) => {
                error!("❌ Failed to create product '{}': {e}", req.name);
                Err(ServiceError::Api(e))
            }
        }
    }

    async fn update_product(
        &self,
        session: &SessionContext,
        req: &UpdateProductRequest,
    ) -> Result<Product, ServiceError> {
        session.require_admin("update product")?;
        req.validate()?;

        info!("✏️ Updating product id={}", req.id);

        match self.api.update(req).await {
            Ok(product) => {
                info!("✅ Product id={} updated", product.id);
                Ok(product)
            }
            Err(e) => {
                error!("❌ Failed to update product id={}: {e}", req.id);
                Err(ServiceError::Api(e))
            }
        }
    }

    async fn delete_product(
        &self,
        session: &SessionContext,
        id: i64,
    ) -> Result<(), ServiceError> {
        session.require_admin("delete product")?;

        info!("🗑️ Deleting product id={id}");

        match self.api.delete(id).await {
            Ok(()) => {
                info!("✅ Product id={id} deleted");
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to delete product id={id}: {e}");
                Err(ServiceError::Api(e))
            }
        }
    }
}
