use crate::error_code::ErrorCode;
use crate::transport::TransportError;
use std::time::Duration;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the raw response body)
    pub details: Option<String>,
    /// Source of the error (e.g., "transport", "client_builder")
    pub source: Option<String>,
    /// HTTP status of the failed response
    pub status_code: Option<u16>,
    /// Correlation id sent as `x-request-id`
    pub request_id: Option<String>,
    /// Error code reported by the service, verbatim
    pub error_code: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_status_code(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }
}

/// Unified error type for the RAIL Score client.
///
/// Each well-known failure class of the service is its own variant so callers can
/// match on it; anything else non-successful is [`Error::Api`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication failed: {message}{}", format_context(.context))]
    Authentication {
        message: String,
        context: ErrorContext,
    },

    #[error(
        "Rate limit exceeded: {message}{}{}",
        format_retry_after(.retry_after),
        format_context(.context)
    )]
    RateLimit {
        message: String,
        retry_after: Option<Duration>,
        context: ErrorContext,
    },

    #[error("Insufficient credits: {message}{}", format_context(.context))]
    InsufficientCredits {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_field(.field))]
    Validation {
        message: String,
        field: Option<String>,
        context: ErrorContext,
    },

    #[error("API error: HTTP {status}: {message}{}", format_context(.context))]
    Api {
        status: u16,
        message: String,
        context: ErrorContext,
    },

    #[error("Request timed out after {:.1}s", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to decode response: {message}{}", format_context(.context))]
    Decode {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if let Some(ref id) = ctx.request_id {
        parts.push(format!("request_id: {}", id));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn format_field(field: &Option<String>) -> String {
    match field {
        Some(f) => format!(" (field: {})", f),
        None => String::new(),
    }
}

fn format_retry_after(retry_after: &Option<Duration>) -> String {
    match retry_after {
        Some(d) => format!(" (retry after {}s)", d.as_secs()),
        None => String::new(),
    }
}

impl Error {
    /// A caller-input error for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
            field: Some(field.into()),
            context: ErrorContext::new().with_source("client_validation"),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn configuration_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: message.into(),
            context,
        }
    }

    pub fn decode_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Error::Decode {
            message: message.into(),
            context,
        }
    }

    /// Build the typed error for a non-success response.
    ///
    /// `code` is the service error code (if the body carried one) and takes precedence
    /// over the status when it is recognised.
    pub fn from_response(
        status: u16,
        code: Option<&str>,
        message: impl Into<String>,
        field: Option<String>,
        retry_after: Option<Duration>,
        context: ErrorContext,
    ) -> Self {
        let message = message.into();
        match ErrorCode::classify(status, code) {
            ErrorCode::Authentication => Error::Authentication { message, context },
            ErrorCode::RateLimited => Error::RateLimit {
                message,
                retry_after,
                context,
            },
            ErrorCode::InsufficientCredits => Error::InsufficientCredits { message, context },
            ErrorCode::InvalidRequest => Error::Validation {
                message,
                field,
                context,
            },
            _ => Error::Api {
                status,
                message,
                context,
            },
        }
    }

    /// Classification of this error.
    pub fn kind(&self) -> ErrorCode {
        match self {
            Error::Authentication { .. } => ErrorCode::Authentication,
            Error::RateLimit { .. } => ErrorCode::RateLimited,
            Error::InsufficientCredits { .. } => ErrorCode::InsufficientCredits,
            Error::Validation { .. } => ErrorCode::InvalidRequest,
            Error::Api { status, .. } => ErrorCode::from_http_status(*status),
            Error::Timeout { .. } => ErrorCode::Timeout,
            Error::Transport(_) | Error::Decode { .. } | Error::Configuration { .. } => {
                ErrorCode::Unknown
            }
        }
    }

    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Authentication { message, .. }
            | Error::RateLimit { message, .. }
            | Error::InsufficientCredits { message, .. }
            | Error::Validation { message, .. }
            | Error::Api { message, .. }
            | Error::Decode { message, .. }
            | Error::Configuration { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of the failed response, if the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => self.context().and_then(|c| c.status_code),
        }
    }

    /// Offending field of a validation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Authentication { context, .. }
            | Error::RateLimit { context, .. }
            | Error::InsufficientCredits { context, .. }
            | Error::Validation { context, .. }
            | Error::Api { context, .. }
            | Error::Decode { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            Error::Timeout { .. } | Error::Transport(_) => None,
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimit { .. })
    }

    pub fn is_insufficient_credits(&self) -> bool {
        matches!(self, Error::InsufficientCredits { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
