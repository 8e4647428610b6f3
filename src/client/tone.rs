use crate::types::{ToneAnalyzeRequest, ToneAnalyzeResponse, ToneMatchRequest, ToneMatchResponse};
use crate::Result;

use super::core::RailScoreClient;
use super::endpoint::Endpoint;
use super::validation::{validate_content, validate_non_empty};

impl RailScoreClient {
    pub async fn analyze_tone(&self, request: &ToneAnalyzeRequest) -> Result<ToneAnalyzeResponse> {
        validate_content("content", &request.content)?;
        self.transport
            .post_json(Endpoint::AnalyzeTone.path(), request)
            .await
    }

    /// Rewrite `request.content` to match the tone of `request.reference_content`.
    pub async fn match_tone(&self, request: &ToneMatchRequest) -> Result<ToneMatchResponse> {
        validate_content("content", &request.content)?;
        validate_non_empty("reference_content", &request.reference_content)?;
        self.transport
            .post_json(Endpoint::MatchTone.path(), request)
            .await
    }
}
