use crate::client::core::RailScoreClient;
use crate::config::ClientConfigBuilder;
use crate::Result;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Unset options take the defaults documented on [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Clone, Default)]
pub struct RailScoreClientBuilder {
    config: ClientConfigBuilder,
}

impl RailScoreClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = self.config.api_key(api_key);
        self
    }

    /// Override the production endpoint (staging, self-hosted, or a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.base_url(base_url);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    pub fn timeout_secs(mut self, secs: f64) -> Self {
        self.config = self.config.timeout_secs(secs);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(user_agent);
        self
    }

    pub fn build(self) -> Result<RailScoreClient> {
        RailScoreClient::with_config(self.config.build()?)
    }

    /// Build the synchronous facade instead.
    pub fn build_blocking(self) -> Result<crate::blocking::RailScoreClient> {
        crate::blocking::RailScoreClient::with_config(self.config.build()?)
    }
}
