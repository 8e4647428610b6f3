//! Tone analysis and tone matching.

use super::common::Domain;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneAnalyzeRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
}

impl ToneAnalyzeRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            domain: None,
        }
    }

    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// Rewrite `content` in the tone of `reference_content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneMatchRequest {
    pub content: String,
    pub reference_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
}

impl ToneMatchRequest {
    pub fn new(content: impl Into<String>, reference_content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            reference_content: reference_content.into(),
            domain: None,
        }
    }

    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToneProfile {
    pub primary_tone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_tones: Option<Vec<String>>,
    /// 0 (casual) to 1 (formal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<f64>,
    /// -1 (negative) to 1 (positive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ToneProfile {
    pub fn secondary_tones(&self) -> &[String] {
        self.secondary_tones.as_deref().unwrap_or_default()
    }
}

/// Result of `analyze_tone`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneAnalyzeResponse {
    pub tone_profile: ToneProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ToneAnalyzeResponse {
    pub fn characteristics(&self) -> &[String] {
        self.characteristics.as_deref().unwrap_or_default()
    }

    pub fn suggestions(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or_default()
    }
}

/// Result of `match_tone`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneMatchResponse {
    pub content: String,
    pub similarity_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_tone: Option<ToneProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_tone: Option<ToneProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ToneMatchResponse {
    pub fn changes(&self) -> &[String] {
        self.changes.as_deref().unwrap_or_default()
    }
}
