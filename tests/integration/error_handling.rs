//! HTTP failures map onto the typed error taxonomy.

use crate::fixtures::GOOD_CONTENT;
use crate::mock_server::MockServerFixture;
use rail_score_sdk::error_code::ErrorCode;
use rail_score_sdk::{CalculateRequest, Endpoint, Error, GenerateRequest, RailScoreClient};
use std::time::Duration;
use tokio_test::assert_err;

async fn calculate_against(status: usize, body: &str, headers: &[(&str, &str)]) -> Error {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error("POST", Endpoint::Calculate.path(), status, body, headers)
        .await;
    let outcome = fixture
        .client()
        .calculate(&CalculateRequest::new(GOOD_CONTENT))
        .await;
    assert_err!(outcome)
}

#[tokio::test]
async fn test_401_is_authentication_error() {
    let err = calculate_against(401, r#"{"error": "Invalid API key"}"#, &[]).await;
    match &err {
        Error::Authentication { message, context } => {
            assert_eq!(message, "Invalid API key");
            assert_eq!(context.status_code, Some(401));
            assert!(context.request_id.is_some());
        }
        other => panic!("expected authentication error, got {:?}", other),
    }
    assert_eq!(err.kind(), ErrorCode::Authentication);
}

#[tokio::test]
async fn test_429_is_rate_limit_with_retry_after() {
    let err = calculate_against(
        429,
        r#"{"error": {"code": "rate_limited", "message": "Too many requests"}}"#,
        &[("retry-after", "17")],
    )
    .await;
    match err {
        Error::RateLimit {
            message,
            retry_after,
            ..
        } => {
            assert_eq!(message, "Too many requests");
            assert_eq!(retry_after, Some(Duration::from_secs(17)));
        }
        other => panic!("expected rate limit error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_402_is_insufficient_credits() {
    let err = calculate_against(402, r#"{"detail": "Insufficient credits: 0 remaining"}"#, &[]).await;
    assert!(err.is_insufficient_credits(), "got {:?}", err);
    assert_eq!(err.message(), "Insufficient credits: 0 remaining");
}

#[tokio::test]
async fn test_credit_code_on_forbidden_is_insufficient_credits() {
    let err = calculate_against(
        403,
        r#"{"error": {"code": "insufficient_credits", "message": "Top up your account"}}"#,
        &[],
    )
    .await;
    assert!(err.is_insufficient_credits(), "got {:?}", err);
    assert_eq!(
        err.context().and_then(|c| c.error_code.as_deref()),
        Some("insufficient_credits")
    );
}

#[tokio::test]
async fn test_422_is_validation_with_field() {
    let err = calculate_against(
        422,
        r#"{"detail": [{"loc": ["body", "content"], "msg": "Content too short", "type": "value_error"}]}"#,
        &[],
    )
    .await;
    match err {
        Error::Validation { message, field, .. } => {
            assert_eq!(message, "Content too short");
            assert_eq!(field.as_deref(), Some("content"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_other_status_is_generic_api_error() {
    let err = calculate_against(500, r#"{"message": "internal failure"}"#, &[]).await;
    match &err {
        Error::Api {
            status, message, ..
        } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "internal failure");
        }
        other => panic!("expected api error, got {:?}", other),
    }
    assert!(err.kind().is_transient());
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_as_message() {
    let err = calculate_against(502, "Bad Gateway from upstream", &[]).await;
    assert!(matches!(err, Error::Api { status: 502, .. }));
    assert_eq!(err.message(), "Bad Gateway from upstream");
}

#[tokio::test]
async fn test_success_with_wrong_shape_is_decode_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "POST",
            Endpoint::Generate.path(),
            200,
            &serde_json::json!({"unexpected": true}),
        )
        .await;

    let err = fixture
        .client()
        .generate(&GenerateRequest::new("Write a haiku about fairness"))
        .await
        .unwrap_err();
    match err {
        Error::Decode { context, .. } => {
            assert_eq!(context.status_code, Some(200));
            assert!(context.details.unwrap().contains("unexpected"));
        }
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_server_is_timeout_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // Accept and hold the connection without ever answering.
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);
        }
    });

    let client = RailScoreClient::builder()
        .api_key("test-api-key")
        .base_url(format!("http://{}", addr))
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();

    let err = client.health().await.unwrap_err();
    match err {
        Error::Timeout { timeout } => assert_eq!(timeout, Duration::from_millis(300)),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Bind then drop to get a local port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = RailScoreClient::builder()
        .api_key("test-api-key")
        .base_url(format!("http://127.0.0.1:{}", port))
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.version().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
}
