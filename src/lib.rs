//! # rail-score-sdk
//!
//! Rust client for the RAIL Score API: responsibility scoring of content across eight
//! dimensions (fairness, safety, reliability, transparency, privacy, accountability,
//! inclusivity, user impact), scored generation, tone analysis and compliance checks.
//!
//! ## Overview
//!
//! The client is a thin facade: every method validates its inputs, sends one JSON
//! request, and returns either a typed result record or a typed [`Error`]. There is no
//! retry, caching or batching; retry policy belongs to the caller, helped by
//! [`Error::kind`] and [`error_code::ErrorCode::is_transient`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rail_score_sdk::{CalculateRequest, Domain, RailScoreClient};
//!
//! #[tokio::main]
//! async fn main() -> rail_score_sdk::Result<()> {
//!     let client = RailScoreClient::new("your-api-key")?;
//!
//!     let result = client
//!         .calculate(
//!             &CalculateRequest::new("AI should prioritize human welfare and fairness.")
//!                 .domain(Domain::General)
//!                 .explain_scores(true),
//!         )
//!         .await?;
//!
//!     println!("RAIL Score: {}/10 ({})", result.rail_score, result.grade);
//!     for (dimension, details) in result.dimension_scores().iter() {
//!         println!("  {}: {}/10 ({})", dimension, details.score, details.grade);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! ```rust,no_run
//! # async fn run(client: rail_score_sdk::RailScoreClient) {
//! use rail_score_sdk::{CalculateRequest, Error};
//!
//! match client.calculate(&CalculateRequest::new("Short")).await {
//!     Err(Error::Validation { message, field, .. }) => eprintln!("{:?}: {}", field, message),
//!     Err(Error::RateLimit { retry_after, .. }) => eprintln!("throttled, retry in {:?}", retry_after),
//!     Err(e) => eprintln!("{}", e),
//!     Ok(result) => println!("{}", result.rail_score),
//! }
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Async client, builder, endpoint table, input validation |
//! | [`blocking`] | Synchronous facade |
//! | [`config`] | Client configuration and defaults |
//! | [`types`] | Request and response records |
//! | [`error_code`] | Classification of failed responses |
//! | [`transport`] | JSON-over-HTTP transport |

pub mod blocking;
pub mod client;
pub mod config;
pub mod error_code;
pub mod transport;
pub mod types;

pub use client::{Endpoint, RailScoreClient, RailScoreClientBuilder, MIN_CONTENT_LENGTH};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use types::{
    CalculateRequest, ComplianceFramework, ComplianceRequest, ComplianceResponse,
    ContentLength, Dimension, DimensionScore, DimensionScores, Domain, GenerateRequest,
    GenerateResponse, GenerationContext, Grade, RailRequirements, RailScoreResponse,
    RegenerateRequest, RegenerateResponse, ServiceStatus, ToneAnalyzeRequest,
    ToneAnalyzeResponse, ToneMatchRequest, ToneMatchResponse,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
