//! RAIL Score API error codes.
//!
//! Classification of failed responses. The service reports failures either through the
//! HTTP status alone or through a structured body carrying a `code` string; both are
//! folded into one [`ErrorCode`] so callers can discriminate programmatically.
//!
//! | Code | HTTP | Meaning |
//! |------|------|---------|
//! | `invalid_request` | 400, 422 | Caller-supplied input rejected |
//! | `authentication` | 401, 403 | Missing, invalid or revoked API key |
//! | `insufficient_credits` | 402 | Account credit balance exhausted |
//! | `not_found` | 404 | Endpoint does not exist |
//! | `rate_limited` | 429 | Request throttled |
//! | `server_error` | 500, 502 | Service-side failure |
//! | `unavailable` | 503 | Service temporarily unavailable |
//! | `timeout` | 408, 504 | Request timed out |
//! | `unknown` | other | Could not be classified |
//!
//! ## Example
//!
//! ```rust
//! use rail_score_sdk::error_code::ErrorCode;
//!
//! let code = ErrorCode::from_http_status(402);
//! assert_eq!(code, ErrorCode::InsufficientCredits);
//! assert_eq!(code.name(), "insufficient_credits");
//! assert!(!code.is_transient());
//! ```

use std::fmt;

/// Classified failure kind of a RAIL Score API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed request, invalid parameters, or content rejected by validation
    InvalidRequest,
    /// Invalid, expired, or missing API key
    Authentication,
    /// Account credits exhausted
    InsufficientCredits,
    /// Requested endpoint or resource does not exist
    NotFound,
    /// Request rate limit exceeded
    RateLimited,
    /// Internal server error on the service side
    ServerError,
    /// Service temporarily unavailable
    Unavailable,
    /// Request timed out before a response was received
    Timeout,
    /// Error could not be classified
    Unknown,
}

impl ErrorCode {
    /// Returns the canonical name (e.g., `"rate_limited"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::InsufficientCredits => "insufficient_credits",
            Self::NotFound => "not_found",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Unavailable => "unavailable",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the failure is usually transient.
    ///
    /// The client never retries on its own; this is a hint for callers that implement
    /// their own retry policy.
    #[inline]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError | Self::Unavailable | Self::Timeout
        )
    }

    /// Maps a service error code string to an `ErrorCode`.
    ///
    /// Accepts the canonical names plus the aliases the service and its gateways use,
    /// such as `"invalid_api_key"` or `"quota_exhausted"`.
    pub fn from_service_code(code: &str) -> Option<Self> {
        let code = match code.trim().to_ascii_lowercase().as_str() {
            "invalid_request" | "validation_error" | "validation_failed" | "bad_request" => {
                Self::InvalidRequest
            }
            "authentication" | "authentication_error" | "invalid_api_key" | "unauthorized"
            | "forbidden" => Self::Authentication,
            "insufficient_credits" | "quota_exhausted" | "payment_required" | "no_credits" => {
                Self::InsufficientCredits
            }
            "not_found" => Self::NotFound,
            "rate_limited" | "rate_limit_exceeded" | "too_many_requests" => Self::RateLimited,
            "server_error" | "internal_error" => Self::ServerError,
            "unavailable" | "service_unavailable" => Self::Unavailable,
            "timeout" => Self::Timeout,
            _ => return None,
        };
        Some(code)
    }

    /// Maps an HTTP status code to the most likely `ErrorCode`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::InvalidRequest,
            401 | 403 => Self::Authentication,
            402 => Self::InsufficientCredits,
            404 => Self::NotFound,
            408 | 504 => Self::Timeout,
            429 => Self::RateLimited,
            500 | 502 => Self::ServerError,
            503 => Self::Unavailable,
            _ => Self::Unknown,
        }
    }

    /// Classify a failed response: a recognised service code wins over the status.
    pub fn classify(status: u16, service_code: Option<&str>) -> Self {
        service_code
            .and_then(Self::from_service_code)
            .unwrap_or_else(|| Self::from_http_status(status))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
