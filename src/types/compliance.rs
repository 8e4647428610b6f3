//! Regulatory compliance checks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Regulatory framework a piece of content is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceFramework {
    Gdpr,
    Ccpa,
    Hipaa,
    EuAiAct,
    Soc2,
    Iso42001,
}

impl ComplianceFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceFramework::Gdpr => "gdpr",
            ComplianceFramework::Ccpa => "ccpa",
            ComplianceFramework::Hipaa => "hipaa",
            ComplianceFramework::EuAiAct => "eu_ai_act",
            ComplianceFramework::Soc2 => "soc2",
            ComplianceFramework::Iso42001 => "iso42001",
        }
    }
}

impl fmt::Display for ComplianceFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceFramework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gdpr" => Ok(ComplianceFramework::Gdpr),
            "ccpa" => Ok(ComplianceFramework::Ccpa),
            "hipaa" => Ok(ComplianceFramework::Hipaa),
            "eu_ai_act" => Ok(ComplianceFramework::EuAiAct),
            "soc2" => Ok(ComplianceFramework::Soc2),
            "iso42001" => Ok(ComplianceFramework::Iso42001),
            other => Err(format!("unknown compliance framework: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRequest {
    pub content: String,
    pub frameworks: Vec<ComplianceFramework>,
    /// Free-text description of where the content is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ComplianceRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            frameworks: Vec::new(),
            context: None,
        }
    }

    pub fn framework(mut self, framework: ComplianceFramework) -> Self {
        if !self.frameworks.contains(&framework) {
            self.frameworks.push(framework);
        }
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    pub severity: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkResult {
    pub compliant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FrameworkResult {
    pub fn violations(&self) -> &[Violation] {
        self.violations.as_deref().unwrap_or_default()
    }
}

/// Result of `check_compliance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResponse {
    pub compliant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    /// Per-framework outcome keyed by framework name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frameworks: Option<BTreeMap<String, FrameworkResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ComplianceResponse {
    pub fn framework(&self, framework: ComplianceFramework) -> Option<&FrameworkResult> {
        self.frameworks.as_ref()?.get(framework.as_str())
    }

    /// All violations across frameworks.
    pub fn violations(&self) -> impl Iterator<Item = (&str, &Violation)> {
        self.frameworks
            .iter()
            .flatten()
            .flat_map(|(name, result)| result.violations().iter().map(move |v| (name.as_str(), v)))
    }

    pub fn recommendations(&self) -> &[String] {
        self.recommendations.as_deref().unwrap_or_default()
    }
}
