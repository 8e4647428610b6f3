//! Content generation with RAIL evaluation of the output.

use crate::types::{GenerateRequest, GenerateResponse, RegenerateRequest, RegenerateResponse};
use crate::Result;

use super::core::RailScoreClient;
use super::endpoint::Endpoint;
use super::validation::{validate_content, validate_non_empty, validate_requirements};

impl RailScoreClient {
    /// Generate content for `request.prompt` and score it.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        validate_non_empty("prompt", &request.prompt)?;
        if let Some(req) = &request.rail_requirements {
            validate_requirements(req)?;
        }
        self.transport
            .post_json(Endpoint::Generate.path(), request)
            .await
    }

    /// Rewrite existing content so that it scores better.
    pub async fn regenerate(&self, request: &RegenerateRequest) -> Result<RegenerateResponse> {
        validate_content("content", &request.content)?;
        if let Some(req) = &request.rail_requirements {
            validate_requirements(req)?;
        }
        self.transport
            .post_json(Endpoint::Regenerate.path(), request)
            .await
    }
}
