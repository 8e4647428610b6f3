//! Scoring vocabulary shared by every endpoint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One named axis of the composite RAIL score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Fairness,
    Safety,
    Reliability,
    Transparency,
    Privacy,
    Accountability,
    Inclusivity,
    UserImpact,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::Fairness,
        Dimension::Safety,
        Dimension::Reliability,
        Dimension::Transparency,
        Dimension::Privacy,
        Dimension::Accountability,
        Dimension::Inclusivity,
        Dimension::UserImpact,
    ];

    /// Wire name (e.g., `"user_impact"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Fairness => "fairness",
            Dimension::Safety => "safety",
            Dimension::Reliability => "reliability",
            Dimension::Transparency => "transparency",
            Dimension::Privacy => "privacy",
            Dimension::Accountability => "accountability",
            Dimension::Inclusivity => "inclusivity",
            Dimension::UserImpact => "user_impact",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown dimension: {}", s))
    }
}

/// Categorical label for a numeric score, kept exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(String);

impl Grade {
    pub fn new(label: impl Into<String>) -> Self {
        Grade(label.into())
    }

    /// Conventional label for a 0-10 score.
    pub fn for_score(score: f64) -> Self {
        const BANDS: [(f64, &str); 10] = [
            (9.5, "A+"),
            (9.0, "A"),
            (8.5, "A-"),
            (8.0, "B+"),
            (7.5, "B"),
            (7.0, "B-"),
            (6.5, "C+"),
            (6.0, "C"),
            (5.5, "C-"),
            (5.0, "D"),
        ];
        let label = BANDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, label)| *label)
            .unwrap_or("F");
        Grade(label.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Grade {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Content domain used to calibrate scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    #[default]
    General,
    Healthcare,
    Finance,
    Legal,
    Education,
    Technology,
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Domain::General),
            "healthcare" => Ok(Domain::Healthcare),
            "finance" => Ok(Domain::Finance),
            "legal" => Ok(Domain::Legal),
            "education" => Ok(Domain::Education),
            "technology" => Ok(Domain::Technology),
            other => Err(format!("unknown domain: {}", other)),
        }
    }
}

/// Target length of generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentLength {
    Short,
    Medium,
    Long,
}

impl FromStr for ContentLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(ContentLength::Short),
            "medium" => Ok(ContentLength::Medium),
            "long" => Ok(ContentLength::Long),
            other => Err(format!("unknown length: {}", other)),
        }
    }
}

/// Score and grade of a single dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: f64,
    pub grade: Grade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DimensionScore {
    pub fn issues(&self) -> &[String] {
        self.issues.as_deref().unwrap_or_default()
    }
}

/// Per-dimension breakdown keyed by dimension name.
///
/// Keys are kept as strings so dimensions added by the service survive decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionScores(BTreeMap<String, DimensionScore>);

static NO_SCORES: DimensionScores = DimensionScores(BTreeMap::new());

impl DimensionScores {
    /// Shared empty breakdown, for results that carry none.
    pub fn empty() -> &'static DimensionScores {
        &NO_SCORES
    }

    pub fn get(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.0.get(dimension.as_str())
    }

    pub fn get_named(&self, name: &str) -> Option<&DimensionScore> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DimensionScore)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Declared dimensions absent from this breakdown.
    pub fn missing(&self) -> Vec<Dimension> {
        Dimension::ALL
            .iter()
            .copied()
            .filter(|d| !self.0.contains_key(d.as_str()))
            .collect()
    }
}

impl FromIterator<(String, DimensionScore)> for DimensionScores {
    fn from_iter<T: IntoIterator<Item = (String, DimensionScore)>>(iter: T) -> Self {
        DimensionScores(iter.into_iter().collect())
    }
}

/// Free-form status object returned by `/health` and `/version`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceStatus(serde_json::Map<String, serde_json::Value>);

impl ServiceStatus {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    /// The `status` field, e.g. `"healthy"`.
    pub fn status(&self) -> Option<&str> {
        self.get_str("status")
    }

    /// The `version` field, e.g. `"1.4.0"`.
    pub fn version(&self) -> Option<&str> {
        self.get_str("version")
    }

    pub fn as_map(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.0
    }

    pub fn into_inner(self) -> serde_json::Map<String, serde_json::Value> {
        self.0
    }
}
