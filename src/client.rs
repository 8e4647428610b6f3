//! RAIL Score API client.
//!
//! One method per remote capability; each validates its inputs, issues exactly one
//! request and returns a typed result or a typed [`Error`](crate::Error).
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod endpoint;
mod generation;
mod scoring;
mod tone;
pub mod validation;

pub use builder::RailScoreClientBuilder;
pub use core::RailScoreClient;
pub use endpoint::Endpoint;
pub use validation::MIN_CONTENT_LENGTH;
