//! Content generation and regeneration.

use super::common::{ContentLength, Dimension, DimensionScores, Grade};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Audience and purpose hints for generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Additional hints passed through as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }
}

/// Score floors generated content has to reach.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RailRequirements {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub minimum_scores: BTreeMap<Dimension, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_overall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

impl RailRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimum(mut self, dimension: Dimension, score: f64) -> Self {
        self.minimum_scores.insert(dimension, score);
        self
    }

    pub fn minimum_overall(mut self, score: f64) -> Self {
        self.minimum_overall = Some(score);
        self
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}

/// Request body of `generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<ContentLength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<GenerationContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rail_requirements: Option<RailRequirements>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            length: None,
            context: None,
            rail_requirements: None,
        }
    }

    pub fn length(mut self, length: ContentLength) -> Self {
        self.length = Some(length);
        self
    }

    pub fn context(mut self, context: GenerationContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn rail_requirements(mut self, requirements: RailRequirements) -> Self {
        self.rail_requirements = Some(requirements);
        self
    }
}

/// Request body of `regenerate`: improve content that already exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegenerateRequest {
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues_to_fix: Vec<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rail_requirements: Option<RailRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_tone: Option<bool>,
}

impl RegenerateRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            issues_to_fix: Vec::new(),
            rail_requirements: None,
            preserve_tone: None,
        }
    }

    pub fn fix(mut self, dimension: Dimension) -> Self {
        if !self.issues_to_fix.contains(&dimension) {
            self.issues_to_fix.push(dimension);
        }
        self
    }

    pub fn rail_requirements(mut self, requirements: RailRequirements) -> Self {
        self.rail_requirements = Some(requirements);
        self
    }

    pub fn preserve_tone(mut self, preserve: bool) -> Self {
        self.preserve_tone = Some(preserve);
        self
    }
}

/// Evaluation of generated content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRailScores {
    pub rail_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_scores: Option<DimensionScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements_met: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GeneratedRailScores {
    /// Whether every requested floor was reached; `false` when not reported.
    pub fn requirements_met(&self) -> bool {
        self.requirements_met.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_time_ms: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result of `generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: String,
    pub rail_scores: GeneratedRailScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_metadata: Option<GenerationMetadata>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result of `regenerate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegenerateResponse {
    pub content: String,
    pub rail_scores: GeneratedRailScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_metadata: Option<GenerationMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_rail_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvements: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RegenerateResponse {
    pub fn improvements(&self) -> &[String] {
        self.improvements.as_deref().unwrap_or_default()
    }

    /// Score change relative to the original content, when the service reported it.
    pub fn score_delta(&self) -> Option<f64> {
        self.original_rail_score
            .map(|before| self.rail_scores.rail_score - before)
    }
}
