use crate::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::types::ServiceStatus;
use crate::Result;
use std::sync::Arc;

use super::builder::RailScoreClientBuilder;
use super::endpoint::Endpoint;

/// Async client for the RAIL Score API.
///
/// Holds configuration and a pooled HTTP client, nothing else; cloning is cheap and
/// clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RailScoreClient {
    pub(crate) transport: Arc<HttpTransport>,
}

impl RailScoreClient {
    /// Client for `api_key` against the production endpoint with default timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key)?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
        })
    }

    pub fn builder() -> RailScoreClientBuilder {
        RailScoreClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    pub fn api_key(&self) -> &str {
        self.config().api_key()
    }

    pub fn base_url(&self) -> &str {
        self.config().base_url()
    }

    pub fn timeout(&self) -> std::time::Duration {
        self.config().timeout()
    }

    /// Service health, e.g. `{"status": "healthy"}`.
    pub async fn health(&self) -> Result<ServiceStatus> {
        self.transport.get_json(Endpoint::Health.path()).await
    }

    /// Service version information, e.g. `{"version": "1.4.0"}`.
    pub async fn version(&self) -> Result<ServiceStatus> {
        self.transport.get_json(Endpoint::Version.path()).await
    }
}
