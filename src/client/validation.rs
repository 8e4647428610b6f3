//! 请求参数本地校验：在发出网络请求前拒绝明显无效的输入。
//!
//! Local input validation. Everything here fails with `Error::Validation` before any
//! request is sent; the service applies its own validation on top.

use crate::types::Dimension;
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Minimum number of characters (after trimming) of content to be scored.
pub const MIN_CONTENT_LENGTH: usize = 10;

/// Tolerance on the sum of custom weights.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

const MAX_SCORE: f64 = 10.0;

pub(crate) fn validate_content(field: &str, content: &str) -> Result<()> {
    let len = content.trim().chars().count();
    if len < MIN_CONTENT_LENGTH {
        return Err(Error::validation(
            field,
            format!(
                "{} must be at least {} characters (got {})",
                field, MIN_CONTENT_LENGTH, len
            ),
        ));
    }
    Ok(())
}

pub(crate) fn validate_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Weights must each lie in `[0, 1]` and sum to 1.0.
pub(crate) fn validate_weights(weights: &BTreeMap<Dimension, f64>) -> Result<()> {
    if weights.is_empty() {
        return Err(Error::validation(
            "custom_weights",
            "custom_weights must name at least one dimension",
        ));
    }
    for (dimension, weight) in weights {
        if !weight.is_finite() || !(0.0..=1.0).contains(weight) {
            return Err(Error::validation(
                format!("custom_weights.{}", dimension),
                format!("weight for {} must be between 0 and 1 (got {})", dimension, weight),
            ));
        }
    }
    let sum: f64 = weights.values().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(Error::validation(
            "custom_weights",
            format!("custom_weights must sum to 1.0 (got {:.3})", sum),
        ));
    }
    Ok(())
}

pub(crate) fn validate_requirements(req: &crate::types::RailRequirements) -> Result<()> {
    for (dimension, score) in &req.minimum_scores {
        check_score(&format!("rail_requirements.minimum_scores.{}", dimension), *score)?;
    }
    if let Some(overall) = req.minimum_overall {
        check_score("rail_requirements.minimum_overall", overall)?;
    }
    if req.max_attempts == Some(0) {
        return Err(Error::validation(
            "rail_requirements.max_attempts",
            "max_attempts must be at least 1",
        ));
    }
    Ok(())
}

fn check_score(field: &str, score: f64) -> Result<()> {
    if !score.is_finite() || !(0.0..=MAX_SCORE).contains(&score) {
        return Err(Error::validation(
            field,
            format!("{} must be between 0 and {} (got {})", field, MAX_SCORE, score),
        ));
    }
    Ok(())
}
