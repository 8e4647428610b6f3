use crate::fixtures::{generate_response, regenerate_response};
use crate::mock_server::MockServerFixture;
use rail_score_sdk::{
    ContentLength, Dimension, Endpoint, GenerateRequest, GenerationContext, RailRequirements,
    RegenerateRequest,
};
use serde_json::json;

#[tokio::test]
async fn test_generate_returns_content_scores_and_metadata() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post_matching(
            Endpoint::Generate.path(),
            json!({
                "prompt": "Write a short paragraph about responsible AI in healthcare",
                "length": "short",
                "context": {"purpose": "blog_post", "industry": "healthcare", "tone": "professional"},
                "rail_requirements": {"minimum_scores": {"safety": 7.0, "reliability": 7.0}}
            }),
            &generate_response(),
        )
        .await;

    let request = GenerateRequest::new("Write a short paragraph about responsible AI in healthcare")
        .length(ContentLength::Short)
        .context(
            GenerationContext::new()
                .purpose("blog_post")
                .industry("healthcare")
                .tone("professional"),
        )
        .rail_requirements(
            RailRequirements::new()
                .minimum(Dimension::Safety, 7.0)
                .minimum(Dimension::Reliability, 7.0),
        );
    let result = fixture.client().generate(&request).await.unwrap();

    mock.assert_async().await;
    assert!(!result.content.is_empty());
    assert_eq!(result.rail_scores.rail_score, 8.9);
    assert!(result.rail_scores.requirements_met());
    let dims = result.rail_scores.dimension_scores.as_ref().unwrap();
    assert_eq!(dims.get(Dimension::Safety).unwrap().score, 9.1);
    let metadata = result.generation_metadata.as_ref().unwrap();
    assert_eq!(metadata.model.as_deref(), Some("gpt-4o-mini"));
    assert!(metadata.attempts.unwrap() > 0);
    assert!(metadata.generation_time_ms.unwrap() >= 0.0);
    assert_eq!(serde_json::to_value(&result).unwrap(), generate_response());
}

#[tokio::test]
async fn test_generate_rejects_blank_prompt() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never("POST", Endpoint::Generate.path()).await;

    let err = fixture
        .client()
        .generate(&GenerateRequest::new("   "))
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("prompt"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_regenerate_reports_improvements() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post_matching(
            Endpoint::Regenerate.path(),
            json!({"issues_to_fix": ["safety"], "preserve_tone": true}),
            &regenerate_response(),
        )
        .await;

    let request = RegenerateRequest::new("Our assistant gives definitive medical diagnoses.")
        .fix(Dimension::Safety)
        .preserve_tone(true);
    let result = fixture.client().regenerate(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.original_rail_score, Some(5.4));
    assert_eq!(result.improvements().len(), 2);
    let delta = result.score_delta().unwrap();
    assert!((delta - 2.8).abs() < 1e-9);
    assert_eq!(result.generation_metadata.unwrap().attempts, Some(1));
}

#[tokio::test]
async fn test_regenerate_short_content_rejected_without_request() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never("POST", Endpoint::Regenerate.path()).await;

    let err = fixture
        .client()
        .regenerate(&RegenerateRequest::new("Too short").fix(Dimension::Safety))
        .await
        .unwrap_err();

    assert!(err.is_validation(), "got {:?}", err);
    assert_eq!(err.field(), Some("content"));
    mock.assert_async().await;
}
