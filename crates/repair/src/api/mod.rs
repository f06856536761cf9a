use crate::abstract_trait::RepairApiTrait;
use crate::domain::requests::CreateRepairRequest;
use crate::model::{RepairRequest, RepairStatus, RepairStatusUpdate};
use async_trait::async_trait;
use reqwest::Client;
use shared::config::ApiConfig;
use shared::errors::ApiError;
use shared::utils::ensure_success;
use uuid::Uuid;

#[derive(Clone)]
pub struct RepairApi {
    client: Client,
    config: ApiConfig,
}

impl RepairApi {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RepairApiTrait for RepairApi {
    async fn create_request(
        &self,
        req: &CreateRepairRequest,
    ) -> Result<RepairRequest, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("api/repair-requests"))
            .json(req)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_requests(&self, customer_id: Uuid) -> Result<Vec<RepairRequest>, ApiError> {
        let response = self
            .client
            .get(
                self.config
                    .endpoint(&format!("api/repair-requests/user/{customer_id}")),
            )
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_request(&self, id: Uuid) -> Result<RepairRequest, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint(&format!("api/repair-requests/{id}")))
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_all_requests(&self) -> Result<Vec<RepairRequest>, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint("api/repair-requests"))
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_by_status(
        &self,
        status: RepairStatus,
    ) -> Result<Vec<RepairRequest>, ApiError> {
        let response = self
            .client
            .get(
                self.config
                    .endpoint(&format!("api/repair-requests/status/{status}")),
            )
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn set_status(
        &self,
        id: Uuid,
        update: &RepairStatusUpdate,
    ) -> Result<RepairRequest, ApiError> {
        let response = self
            .client
            .patch(
                self.config
                    .endpoint(&format!("api/repair-requests/{id}/status")),
            )
            .json(update)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}
