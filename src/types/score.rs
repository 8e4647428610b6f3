//! Score calculation request and result.

use super::common::{Dimension, DimensionScores, Domain, Grade};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request body of `calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain_scores: Option<bool>,
    /// Relative weight per dimension; must sum to 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_weights: Option<BTreeMap<Dimension, f64>>,
}

impl CalculateRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            domain: None,
            explain_scores: None,
            custom_weights: None,
        }
    }

    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn explain_scores(mut self, explain: bool) -> Self {
        self.explain_scores = Some(explain);
        self
    }

    pub fn custom_weights(mut self, weights: BTreeMap<Dimension, f64>) -> Self {
        self.custom_weights = Some(weights);
        self
    }

    /// Set a single dimension weight, keeping the others.
    pub fn weight(mut self, dimension: Dimension, weight: f64) -> Self {
        self.custom_weights
            .get_or_insert_with(BTreeMap::new)
            .insert(dimension, weight);
        self
    }
}

/// Qualitative findings across all dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_priority: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OverallAnalysis {
    pub fn strengths(&self) -> &[String] {
        self.strengths.as_deref().unwrap_or_default()
    }

    pub fn weaknesses(&self) -> &[String] {
        self.weaknesses.as_deref().unwrap_or_default()
    }
}

/// How the score was produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_time_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EvaluationMetadata {
    pub fn is_cached(&self) -> bool {
        self.cached.unwrap_or(false)
    }
}

/// Result of `calculate`.
///
/// Sections the service leaves out (or sends as `null`) stay `None` and are left out
/// again when the record is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailScoreResponse {
    pub rail_score: f64,
    pub grade: Grade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_scores: Option<DimensionScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_analysis: Option<OverallAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_metadata: Option<EvaluationMetadata>,
    /// Fields this client does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RailScoreResponse {
    /// Per-dimension breakdown; empty when the service sent none.
    pub fn dimension_scores(&self) -> &DimensionScores {
        self.dimension_scores
            .as_ref()
            .unwrap_or(DimensionScores::empty())
    }
}
