//! Synchronous facade over the async client.
//!
//! Each method blocks the calling thread until the request finishes or the configured
//! timeout expires. Must not be used from inside an async runtime.

use crate::config::ClientConfig;
use crate::types::{
    CalculateRequest, ComplianceRequest, ComplianceResponse, GenerateRequest, GenerateResponse,
    RailScoreResponse, RegenerateRequest, RegenerateResponse, ServiceStatus, ToneAnalyzeRequest,
    ToneAnalyzeResponse, ToneMatchRequest, ToneMatchResponse,
};
use crate::{Error, ErrorContext, Result};
use std::future::Future;
use tokio::runtime::Runtime;

/// Blocking RAIL Score client backed by a private current-thread runtime.
#[derive(Debug)]
pub struct RailScoreClient {
    inner: crate::RailScoreClient,
    runtime: Runtime,
}

impl RailScoreClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key)?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::from_async(crate::RailScoreClient::with_config(config)?)
    }

    /// Wrap an existing async client.
    pub fn from_async(inner: crate::RailScoreClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("Failed to start blocking runtime: {}", e),
                    ErrorContext::new().with_source("blocking_client"),
                )
            })?;
        Ok(Self { inner, runtime })
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    pub fn as_async(&self) -> &crate::RailScoreClient {
        &self.inner
    }

    fn block_on<F: Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }

    pub fn calculate(&self, request: &CalculateRequest) -> Result<RailScoreResponse> {
        self.block_on(self.inner.calculate(request))
    }

    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.block_on(self.inner.generate(request))
    }

    pub fn regenerate(&self, request: &RegenerateRequest) -> Result<RegenerateResponse> {
        self.block_on(self.inner.regenerate(request))
    }

    pub fn analyze_tone(&self, request: &ToneAnalyzeRequest) -> Result<ToneAnalyzeResponse> {
        self.block_on(self.inner.analyze_tone(request))
    }

    pub fn match_tone(&self, request: &ToneMatchRequest) -> Result<ToneMatchResponse> {
        self.block_on(self.inner.match_tone(request))
    }

    pub fn check_compliance(&self, request: &ComplianceRequest) -> Result<ComplianceResponse> {
        self.block_on(self.inner.check_compliance(request))
    }

    pub fn health(&self) -> Result<ServiceStatus> {
        self.block_on(self.inner.health())
    }

    pub fn version(&self) -> Result<ServiceStatus> {
        self.block_on(self.inner.version())
    }
}
