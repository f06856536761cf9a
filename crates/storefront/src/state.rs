use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::config::ApiConfig;
use shared::utils::build_http_client;
use std::fmt;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub config: ApiConfig,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    /// Reads the backend connection settings from the environment and wires
    /// every collaborator-backed service behind one HTTP client.
    pub fn new() -> Result<Self> {
        let config = ApiConfig::init().context("Failed to load storefront API config")?;
        Self::with_config(config)
    }

    pub fn with_config(config: ApiConfig) -> Result<Self> {
        let client =
            build_http_client(&config).context("Failed to initialize HTTP client")?;

        let di_container = DependenciesInject::new(client, config.clone());

        Ok(Self {
            di_container,
            config,
        })
    }
}
