//! Score calculation and compliance checks.

use crate::types::{CalculateRequest, ComplianceRequest, ComplianceResponse, RailScoreResponse};
use crate::{Error, Result};

use super::core::RailScoreClient;
use super::endpoint::Endpoint;
use super::validation::{validate_content, validate_weights};

impl RailScoreClient {
    /// Score `request.content` across every RAIL dimension.
    ///
    /// Fails with `Error::Validation` without a network call when the content is shorter
    /// than [`MIN_CONTENT_LENGTH`](super::MIN_CONTENT_LENGTH) or the custom weights do
    /// not sum to 1.0.
    pub async fn calculate(&self, request: &CalculateRequest) -> Result<RailScoreResponse> {
        validate_content("content", &request.content)?;
        if let Some(weights) = &request.custom_weights {
            validate_weights(weights)?;
        }
        self.transport
            .post_json(Endpoint::Calculate.path(), request)
            .await
    }

    /// Check content against one or more regulatory frameworks.
    pub async fn check_compliance(&self, request: &ComplianceRequest) -> Result<ComplianceResponse> {
        validate_content("content", &request.content)?;
        if request.frameworks.is_empty() {
            return Err(Error::validation(
                "frameworks",
                "at least one compliance framework is required",
            ));
        }
        self.transport
            .post_json(Endpoint::CheckCompliance.path(), request)
            .await
    }
}
