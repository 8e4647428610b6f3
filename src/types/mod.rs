//! Request and response records, one set per endpoint.

pub mod common;
pub mod compliance;
pub mod generation;
pub mod score;
pub mod tone;

pub use common::{
    ContentLength, Dimension, DimensionScore, DimensionScores, Domain, Grade, ServiceStatus,
};
pub use compliance::{
    ComplianceFramework, ComplianceRequest, ComplianceResponse, FrameworkResult, Violation,
};
pub use generation::{
    GenerateRequest, GenerateResponse, GeneratedRailScores, GenerationContext,
    GenerationMetadata, RailRequirements, RegenerateRequest, RegenerateResponse,
};
pub use score::{CalculateRequest, EvaluationMetadata, OverallAnalysis, RailScoreResponse};
pub use tone::{
    ToneAnalyzeRequest, ToneAnalyzeResponse, ToneMatchRequest, ToneMatchResponse, ToneProfile,
};
