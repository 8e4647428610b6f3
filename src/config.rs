//! Client configuration.
//!
//! Every option is enumerated here with its default. A [`ClientConfig`] is immutable
//! once built; use [`ClientConfig::builder`] or [`ClientConfig::new`].

use crate::{Error, ErrorContext, Result};
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Production endpoint of the RAIL Score API.
pub const DEFAULT_BASE_URL: &str = "https://api.responsibleailabs.ai";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variables read by [`ClientConfig::from_env`].
pub const ENV_API_KEY: &str = "RAIL_API_KEY";
pub const ENV_BASE_URL: &str = "RAIL_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "RAIL_TIMEOUT_SECS";

fn default_user_agent() -> String {
    format!("rail-score-sdk-rust/{}", env!("CARGO_PKG_VERSION"))
}

/// Validated connection settings for a [`RailScoreClient`](crate::RailScoreClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Configuration with the given key and every other option at its default.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Build from `RAIL_API_KEY`, `RAIL_BASE_URL` and `RAIL_TIMEOUT_SECS`.
    ///
    /// Meant for calling programs (CLIs, test harnesses); the client itself never reads
    /// the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_API_KEY).map_err(|_| {
            Error::configuration_with_context(
                format!("{} is not set", ENV_API_KEY),
                ErrorContext::new()
                    .with_field_path(ENV_API_KEY)
                    .with_source("config_from_env"),
            )
        })?;

        let mut builder = Self::builder().api_key(api_key);
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            if !base_url.trim().is_empty() {
                builder = builder.base_url(base_url);
            }
        }
        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<f64>().map_err(|_| {
                Error::configuration_with_context(
                    format!("{} must be a number of seconds, got {:?}", ENV_TIMEOUT_SECS, raw),
                    ErrorContext::new()
                        .with_field_path(ENV_TIMEOUT_SECS)
                        .with_source("config_from_env"),
                )
            })?;
            builder = builder.timeout_secs(secs);
        }
        builder.build()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// First eight characters of the key followed by `...`, safe to print.
    pub fn api_key_preview(&self) -> String {
        let head: String = self.api_key.chars().take(8).collect();
        format!("{}...", head)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Absolute URL of an API path such as `/railscore/v1/score`.
    pub fn endpoint_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key_preview())
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    timeout_secs: Option<f64>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self.timeout_secs = None;
        self
    }

    /// Timeout in (fractional) seconds.
    pub fn timeout_secs(mut self, secs: f64) -> Self {
        self.timeout_secs = Some(secs);
        self.timeout = None;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key is required and must not be empty",
                    ErrorContext::new()
                        .with_field_path("config.api_key")
                        .with_source("client_builder"),
                )
            })?;

        let base_url = match self.base_url {
            Some(url) => normalize_base_url(&url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        let timeout = match (self.timeout, self.timeout_secs) {
            (Some(t), _) => t,
            (None, Some(secs)) => {
                if !secs.is_finite() || secs <= 0.0 {
                    return Err(invalid_timeout());
                }
                Duration::try_from_secs_f64(secs).map_err(|_| invalid_timeout())?
            }
            (None, None) => DEFAULT_TIMEOUT,
        };
        if timeout.is_zero() {
            return Err(invalid_timeout());
        }

        Ok(ClientConfig {
            api_key,
            base_url,
            timeout,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        })
    }
}

fn invalid_timeout() -> Error {
    Error::configuration_with_context(
        "timeout must be a positive duration",
        ErrorContext::new()
            .with_field_path("config.timeout")
            .with_source("client_builder"),
    )
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let context = || {
        ErrorContext::new()
            .with_field_path("config.base_url")
            .with_details(raw.to_string())
            .with_source("client_builder")
    };
    let parsed = Url::parse(trimmed).map_err(|e| {
        Error::configuration_with_context(format!("invalid base URL: {}", e), context())
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(Error::configuration_with_context(
            format!("base URL must use http or https, got {}", other),
            context(),
        )),
    }
}
