use crate::config::ClientConfig;
use crate::error_code::ErrorCode;
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

/// Longest slice of a response body copied into error messages and context.
const MAX_BODY_SNIPPET: usize = 512;

/// JSON-over-HTTP transport bound to one [`ClientConfig`].
///
/// Owns a pooled `reqwest::Client`; cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    ErrorContext::new().with_source("transport"),
                )
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(Method::GET, path, None).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| {
            Error::decode_with_context(
                format!("Failed to encode request body: {}", e),
                ErrorContext::new()
                    .with_field_path(path.to_string())
                    .with_source("transport"),
            )
        })?;
        self.execute(Method::POST, path, Some(body)).await
    }

    /// Issue one request and decode the response. Never retries.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let url = self.config.endpoint_url(path);
        let request_id = Uuid::new_v4().to_string();

        let mut req = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(self.config.api_key())
            .header(ACCEPT, "application/json")
            .header("x-request-id", &request_id);
        if let Some(body) = &body {
            req = req.json(body);
        }

        debug!(
            method = %method,
            endpoint = path,
            request_id = request_id.as_str(),
            "sending RAIL Score request"
        );

        let start = Instant::now();
        let resp = req.send().await.map_err(|e| self.map_send_error(e))?;
        let status = resp.status();
        let retry_after = retry_after(resp.headers());
        let text = resp.text().await.map_err(|e| self.map_send_error(e))?;
        let duration_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let parsed = parse_error_body(status, &text);
            let kind = ErrorCode::classify(status.as_u16(), parsed.code.as_deref());
            info!(
                http_status = status.as_u16(),
                error_code = kind.name(),
                endpoint = path,
                duration_ms,
                request_id = request_id.as_str(),
                "RAIL Score request failed"
            );

            let mut context = ErrorContext::new()
                .with_status_code(status.as_u16())
                .with_request_id(request_id)
                .with_source("transport");
            if let Some(code) = &parsed.code {
                context = context.with_error_code(code.clone());
            }
            if !text.is_empty() {
                context = context.with_details(snippet(&text));
            }
            return Err(Error::from_response(
                status.as_u16(),
                parsed.code.as_deref(),
                parsed.message,
                parsed.field,
                retry_after,
                context,
            ));
        }

        debug!(
            http_status = status.as_u16(),
            endpoint = path,
            duration_ms,
            request_id = request_id.as_str(),
            "RAIL Score request succeeded"
        );

        serde_json::from_str(&text).map_err(|e| {
            Error::decode_with_context(
                format!("{} returned an unexpected body: {}", path, e),
                ErrorContext::new()
                    .with_status_code(status.as_u16())
                    .with_request_id(request_id)
                    .with_details(snippet(&text))
                    .with_source("transport"),
            )
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                timeout: self.config.timeout(),
            }
        } else {
            Error::Transport(TransportError::Http(e))
        }
    }
}

/// Error details pulled out of a non-success body.
#[derive(Debug, Default, PartialEq)]
struct ServiceError {
    code: Option<String>,
    message: String,
    field: Option<String>,
}

#[derive(Default)]
struct Partial {
    code: Option<String>,
    message: Option<String>,
    field: Option<String>,
}

impl Partial {
    fn fill_from_object(&mut self, obj: &Value) {
        let s = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        if self.code.is_none() {
            self.code = s("code").or_else(|| s("error_code")).or_else(|| s("type"));
        }
        if self.message.is_none() {
            self.message = s("message").or_else(|| s("msg"));
        }
        if self.field.is_none() {
            self.field = s("field").or_else(|| s("param")).or_else(|| loc_field(obj));
        }
    }
}

/// Last string segment of a `loc` path such as `["body", "content"]`.
fn loc_field(obj: &Value) -> Option<String> {
    obj.get("loc")?
        .as_array()?
        .iter()
        .rev()
        .find_map(|seg| seg.as_str())
        .map(str::to_string)
}

/// Best-effort decoding of the error shapes the service and its gateway produce:
/// `{"error": {..}}`, `{"error": "..."}`, `{"detail": ..}` (string, object or list) and
/// flat `{"code", "message", "field"}`. Falls back to the raw body or the status reason.
fn parse_error_body(status: StatusCode, body: &str) -> ServiceError {
    let fallback = || {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            snippet(trimmed)
        }
    };

    let json: Value = match serde_json::from_str(body) {
        Ok(v @ Value::Object(_)) => v,
        _ => {
            return ServiceError {
                code: None,
                message: fallback(),
                field: None,
            }
        }
    };

    let mut partial = Partial::default();
    match json.get("error") {
        Some(err @ Value::Object(_)) => partial.fill_from_object(err),
        Some(Value::String(s)) => {
            // With a sibling `message`, a bare `error` string is a code.
            if json.get("message").is_some() {
                partial.code = Some(s.clone());
            } else {
                partial.message = Some(s.clone());
            }
        }
        _ => {}
    }
    match json.get("detail") {
        Some(Value::String(s)) if partial.message.is_none() => partial.message = Some(s.clone()),
        Some(detail @ Value::Object(_)) => partial.fill_from_object(detail),
        Some(Value::Array(items)) => {
            if let Some(first) = items.first() {
                partial.fill_from_object(first);
            }
        }
        _ => {}
    }
    partial.fill_from_object(&json);

    ServiceError {
        code: partial.code,
        message: partial.message.unwrap_or_else(fallback),
        field: partial.field,
    }
}

/// `Retry-After: <seconds>`; the HTTP-date form is ignored.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let raw = headers.get("retry-after")?.to_str().ok()?.trim();
    raw.parse::<u64>().ok().map(Duration::from_secs)
}

fn snippet(text: &str) -> String {
    if text.len() <= MAX_BODY_SNIPPET {
        return text.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
