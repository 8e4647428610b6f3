//! Integration tests with mock HTTP server

pub mod error_handling;
pub mod generation;
pub mod scoring;
pub mod tone_and_compliance;
