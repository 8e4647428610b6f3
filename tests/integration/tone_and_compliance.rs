use crate::fixtures::{compliance_response, tone_analyze_response, tone_match_response};
use crate::mock_server::MockServerFixture;
use rail_score_sdk::{
    ComplianceFramework, ComplianceRequest, Domain, Endpoint, ToneAnalyzeRequest,
    ToneMatchRequest,
};
use serde_json::json;

#[tokio::test]
async fn test_analyze_tone() {
    let fixture = MockServerFixture::new().await;
    let raw = tone_analyze_response();
    let mock = fixture
        .mock_json("POST", Endpoint::AnalyzeTone.path(), 200, &raw)
        .await;

    let result = fixture
        .client()
        .analyze_tone(
            &ToneAnalyzeRequest::new("We hereby announce the release of version two.")
                .domain(Domain::Technology),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.tone_profile.primary_tone, "formal");
    assert_eq!(result.tone_profile.formality, Some(0.85));
    assert_eq!(result.characteristics(), ["precise", "third person"]);
    assert_eq!(serde_json::to_value(&result).unwrap(), raw);
}

#[tokio::test]
async fn test_match_tone() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post_matching(
            Endpoint::MatchTone.path(),
            json!({
                "content": "hey folks, our app is out now!!",
                "reference_content": "We are delighted to announce our new release."
            }),
            &tone_match_response(),
        )
        .await;

    let result = fixture
        .client()
        .match_tone(&ToneMatchRequest::new(
            "hey folks, our app is out now!!",
            "We are delighted to announce our new release.",
        ))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.similarity_score, 0.91);
    assert_eq!(result.original_tone.as_ref().unwrap().primary_tone, "casual");
    assert_eq!(result.target_tone.as_ref().unwrap().primary_tone, "formal");
    assert_eq!(result.changes().len(), 2);
}

#[tokio::test]
async fn test_match_tone_requires_reference() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never("POST", Endpoint::MatchTone.path()).await;

    let err = fixture
        .client()
        .match_tone(&ToneMatchRequest::new("hey folks, our app is out now!!", ""))
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("reference_content"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_check_compliance() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post_matching(
            Endpoint::CheckCompliance.path(),
            json!({"frameworks": ["gdpr", "eu_ai_act"]}),
            &compliance_response(),
        )
        .await;

    let result = fixture
        .client()
        .check_compliance(
            &ComplianceRequest::new("We collect user emails and browsing history.")
                .framework(ComplianceFramework::Gdpr)
                .framework(ComplianceFramework::EuAiAct),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!result.compliant);
    assert!(!result.framework(ComplianceFramework::Gdpr).unwrap().compliant);
    assert!(result.framework(ComplianceFramework::EuAiAct).unwrap().compliant);
    assert_eq!(result.violations().count(), 1);
    assert_eq!(serde_json::to_value(&result).unwrap(), compliance_response());
}

#[tokio::test]
async fn test_check_compliance_requires_framework() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_never("POST", Endpoint::CheckCompliance.path())
        .await;

    let err = fixture
        .client()
        .check_compliance(&ComplianceRequest::new("We collect user emails and browsing history."))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.field(), Some("frameworks"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_analyze_tone_short_content_rejected_without_request() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never("POST", Endpoint::AnalyzeTone.path()).await;

    let err = fixture
        .client()
        .analyze_tone(&ToneAnalyzeRequest::new("  Hi!  "))
        .await
        .unwrap_err();

    assert!(err.is_validation(), "got {:?}", err);
    assert_eq!(err.field(), Some("content"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_check_compliance_short_content_rejected_without_request() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_never("POST", Endpoint::CheckCompliance.path())
        .await;

    let err = fixture
        .client()
        .check_compliance(&ComplianceRequest::new("Emails").framework(ComplianceFramework::Gdpr))
        .await
        .unwrap_err();

    assert!(err.is_validation(), "got {:?}", err);
    assert_eq!(err.field(), Some("content"));
    mock.assert_async().await;
}
