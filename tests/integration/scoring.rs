use crate::fixtures::{score_response, GOOD_CONTENT};
use crate::mock_server::MockServerFixture;
use rail_score_sdk::{CalculateRequest, Dimension, Domain, Endpoint, Error};
use serde_json::json;

#[tokio::test]
async fn test_calculate_decodes_every_dimension() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("POST", Endpoint::Calculate.path(), 200, &score_response())
        .await;

    let result = fixture
        .client()
        .calculate(
            &CalculateRequest::new(GOOD_CONTENT)
                .domain(Domain::General)
                .explain_scores(true),
        )
        .await
        .expect("calculate should succeed");

    mock.assert_async().await;
    assert_eq!(result.rail_score, 8.6);
    assert_eq!(result.grade, "A-");
    assert_eq!(result.dimension_scores().len(), Dimension::ALL.len());
    for dimension in Dimension::ALL {
        let details = result
            .dimension_scores()
            .get(dimension)
            .unwrap_or_else(|| panic!("missing {}", dimension));
        assert!((0.0..=10.0).contains(&details.score));
        assert!(!details.grade.as_str().is_empty());
    }
    let metadata = result.evaluation_metadata.as_ref().unwrap();
    assert_eq!(metadata.model_used.as_deref(), Some("rail-eval-v2"));
    assert!(!metadata.is_cached());
    let analysis = result.overall_analysis.as_ref().unwrap();
    assert_eq!(analysis.strengths().len(), 2);
    assert_eq!(
        analysis.top_priority.as_deref(),
        Some("Describe how decisions can be contested")
    );
}

#[tokio::test]
async fn test_calculate_result_matches_raw_payload() {
    let fixture = MockServerFixture::new().await;
    let raw = score_response();
    let _mock = fixture
        .mock_json("POST", Endpoint::Calculate.path(), 200, &raw)
        .await;

    let result = fixture
        .client()
        .calculate(&CalculateRequest::new(GOOD_CONTENT))
        .await
        .unwrap();

    assert_eq!(result.rail_score, raw["rail_score"].as_f64().unwrap());
    assert_eq!(result.grade.as_str(), raw["grade"].as_str().unwrap());
    for (name, details) in result.dimension_scores().iter() {
        assert_eq!(details.score, raw["dimension_scores"][name]["score"].as_f64().unwrap());
        assert_eq!(
            details.grade.as_str(),
            raw["dimension_scores"][name]["grade"].as_str().unwrap()
        );
    }
    assert_eq!(
        result.evaluation_metadata.as_ref().unwrap().evaluation_time_ms,
        raw["evaluation_metadata"]["evaluation_time_ms"].as_f64()
    );
    assert_eq!(serde_json::to_value(&result).unwrap(), raw);
}

#[tokio::test]
async fn test_calculate_keeps_fields_added_by_the_service() {
    let fixture = MockServerFixture::new().await;
    let mut raw = score_response();
    raw["dimension_scores"]["safety"]["confidence"] = json!(0.97);
    raw["evaluation_metadata"]["credits_consumed"] = json!(1.0);
    raw["overall_analysis"]["summary"] = json!("Strong on transparency");
    raw["request_cost"] = json!({"credits": 1.0});
    let _mock = fixture
        .mock_json("POST", Endpoint::Calculate.path(), 200, &raw)
        .await;

    let result = fixture
        .client()
        .calculate(&CalculateRequest::new(GOOD_CONTENT))
        .await
        .unwrap();

    let safety = result.dimension_scores().get(Dimension::Safety).unwrap();
    assert_eq!(safety.extra.get("confidence"), Some(&json!(0.97)));
    assert_eq!(serde_json::to_value(&result).unwrap(), raw);
}

#[tokio::test]
async fn test_calculate_tolerates_null_and_missing_sections() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "POST",
            Endpoint::Calculate.path(),
            200,
            &json!({
                "rail_score": 8.0,
                "grade": "B+",
                "overall_analysis": {"strengths": null, "weaknesses": null, "top_priority": null},
                "evaluation_metadata": {"model_used": null, "evaluation_time_ms": 12.5, "cached": null}
            }),
        )
        .await;

    let result = fixture
        .client()
        .calculate(&CalculateRequest::new(GOOD_CONTENT))
        .await
        .expect("null fields must not fail decoding");

    assert!(result.dimension_scores().is_empty());
    assert!(result.overall_analysis.as_ref().unwrap().strengths().is_empty());
    let metadata = result.evaluation_metadata.as_ref().unwrap();
    assert_eq!(metadata.model_used, None);
    assert_eq!(metadata.evaluation_time_ms, Some(12.5));
    assert!(!metadata.is_cached());
}

#[tokio::test]
async fn test_calculate_sends_request_fields() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post_matching(
            Endpoint::Calculate.path(),
            json!({
                "content": GOOD_CONTENT,
                "domain": "healthcare",
                "explain_scores": true
            }),
            &score_response(),
        )
        .await;

    fixture
        .client()
        .calculate(
            &CalculateRequest::new(GOOD_CONTENT)
                .domain(Domain::Healthcare)
                .explain_scores(true),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_custom_weights_summing_to_one_accepted() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post_matching(
            Endpoint::Calculate.path(),
            json!({"custom_weights": {"fairness": 0.25, "safety": 0.25, "user_impact": 0.05}}),
            &json!({"rail_score": 8.1, "grade": "B+"}),
        )
        .await;

    let request = CalculateRequest::new("AI systems must prioritize fairness and safety above all else.")
        .domain(Domain::General)
        .weight(Dimension::Fairness, 0.25)
        .weight(Dimension::Safety, 0.25)
        .weight(Dimension::Reliability, 0.15)
        .weight(Dimension::Transparency, 0.15)
        .weight(Dimension::Privacy, 0.05)
        .weight(Dimension::Accountability, 0.05)
        .weight(Dimension::Inclusivity, 0.05)
        .weight(Dimension::UserImpact, 0.05);
    let result = fixture.client().calculate(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.rail_score, 8.1);
    assert_eq!(result.grade, "B+");
}

#[tokio::test]
async fn test_short_content_is_validation_error_without_request() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never("POST", Endpoint::Calculate.path()).await;

    let err = fixture
        .client()
        .calculate(&CalculateRequest::new("Short"))
        .await
        .unwrap_err();

    match err {
        Error::Validation { ref field, .. } => assert_eq!(field.as_deref(), Some("content")),
        other => panic!("expected validation error, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_weights_not_summing_to_one_rejected_locally() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never("POST", Endpoint::Calculate.path()).await;

    let request = CalculateRequest::new(GOOD_CONTENT)
        .weight(Dimension::Fairness, 0.6)
        .weight(Dimension::Safety, 0.6);
    let err = fixture.client().calculate(&request).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.field(), Some("custom_weights"));
    mock.assert_async().await;
}
