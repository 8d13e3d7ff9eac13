//! Natural Language Understanding façade tests against a mocked HTTP
//! transport.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::NaturalLanguageUnderstanding;
use super::types::*;
use crate::auth::Authenticator;
use crate::error::WatsonError;

async fn test_client(server: &MockServer) -> NaturalLanguageUnderstanding {
    NaturalLanguageUnderstanding::with_options(
        &server.uri(),
        super::DEFAULT_VERSION,
        Authenticator::bearer("test-token").unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_analyze_sentiment_and_keywords() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/analyze"))
        .and(body_json(json!({
            "text": "IBM is an American multinational technology company.",
            "features": {
                "sentiment": {},
                "keywords": {"limit": 2}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "language": "en",
            "sentiment": {"document": {"label": "neutral", "score": 0.0}},
            "keywords": [
                {"text": "technology company", "relevance": 0.86},
                {"text": "IBM", "relevance": 0.76}
            ],
            "usage": {"features": 2, "text_characters": 52, "text_units": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let nlu = test_client(&server).await;
    let results = nlu
        .analyze(AnalyzeOptions {
            text: Some("IBM is an American multinational technology company.".to_string()),
            features: Features {
                sentiment: Some(SentimentOptions::default()),
                keywords: Some(KeywordsOptions {
                    limit: Some(2),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap()
        .into_result();

    assert_eq!(results.language.as_deref(), Some("en"));
    let keywords = results.keywords.unwrap();
    assert_eq!(keywords.len(), 2);
    assert_eq!(keywords[1].text.as_deref(), Some("IBM"));
}

#[tokio::test]
async fn test_analyze_without_input_issues_no_request() {
    let server = MockServer::start().await;
    let nlu = test_client(&server).await;

    let result = nlu.analyze(AnalyzeOptions::default()).await;
    assert!(matches!(result, Err(WatsonError::Validation(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_analyze_unsupported_language_surfaces_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/analyze"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"error": "unsupported text language: xx", "code": 400}"#,
        ))
        .mount(&server)
        .await;

    let nlu = test_client(&server).await;
    let err = nlu
        .analyze(AnalyzeOptions {
            text: Some("…".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    match err {
        WatsonError::Http { status, error, .. } => {
            assert_eq!(status, 400);
            assert_eq!(
                error.unwrap().description(),
                Some("unsupported text language: xx")
            );
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_models() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                {"model_id": "model-1", "status": "available", "language": "en"}
            ]
        })))
        .mount(&server)
        .await;

    let nlu = test_client(&server).await;
    let models = nlu.list_models().await.unwrap().into_result().models;
    assert_eq!(models[0].model_id.as_deref(), Some("model-1"));
}

#[tokio::test]
async fn test_delete_model() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/models/model-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deleted": "model-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let nlu = test_client(&server).await;
    let response = nlu.delete_model("model-1").await.unwrap().into_result();
    assert_eq!(response.deleted.as_deref(), Some("model-1"));
}
