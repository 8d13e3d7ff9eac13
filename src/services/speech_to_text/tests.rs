//! Speech to Text façade tests against a mocked HTTP transport.

use bytes::Bytes;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::SpeechToText;
use super::types::*;
use crate::auth::Authenticator;
use crate::error::WatsonError;

async fn test_client(server: &MockServer) -> SpeechToText {
    SpeechToText::with_url(&server.uri(), Authenticator::bearer("test-token").unwrap()).unwrap()
}

#[tokio::test]
async fn test_recognize_sends_audio_body_untouched() {
    let server = MockServer::start().await;

    let audio = Bytes::from_static(b"RIFF....WAVEfmt ");

    Mock::given(method("POST"))
        .and(path("/v1/recognize"))
        .and(header("content-type", "audio/wav"))
        .and(query_param("model", "en-US_BroadbandModel"))
        .and(query_param("timestamps", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "final": true,
                    "alternatives": [
                        {
                            "transcript": "hello world ",
                            "confidence": 0.93,
                            "timestamps": [["hello", 0.0, 0.45], ["world", 0.45, 0.9]]
                        }
                    ]
                }
            ],
            "result_index": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stt = test_client(&server).await;
    let results = stt
        .recognize(
            audio.clone(),
            "audio/wav",
            RecognizeOptions {
                model: Some("en-US_BroadbandModel".to_string()),
                timestamps: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .into_result();

    assert_eq!(results.results[0].alternatives[0].transcript, "hello world ");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].body, audio.to_vec());
}

#[tokio::test]
async fn test_recognize_has_no_version_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/recognize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let stt = test_client(&server).await;
    stt.recognize(
        Bytes::from_static(b"\0\0"),
        "audio/flac",
        RecognizeOptions::default(),
    )
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_recognize_empty_audio_issues_no_request() {
    let server = MockServer::start().await;
    let stt = test_client(&server).await;

    let result = stt
        .recognize(Bytes::new(), "audio/wav", RecognizeOptions::default())
        .await;
    assert!(matches!(result, Err(WatsonError::Validation(_))));

    let result = stt
        .recognize(Bytes::from_static(b"x"), "", RecognizeOptions::default())
        .await;
    assert!(matches!(result, Err(WatsonError::Validation(_))));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_recognize_unsupported_format_surfaces_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/recognize"))
        .respond_with(ResponseTemplate::new(415).set_body_string(
            r#"{"code": 415, "error": "unsupported media type"}"#,
        ))
        .mount(&server)
        .await;

    let stt = test_client(&server).await;
    let err = stt
        .recognize(
            Bytes::from_static(b"not audio"),
            "application/octet-stream",
            RecognizeOptions::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, WatsonError::Http { status: 415, .. }));
}

#[tokio::test]
async fn test_list_and_get_models() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                {"name": "en-US_BroadbandModel", "language": "en-US", "rate": 16000}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/models/en-US_BroadbandModel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "en-US_BroadbandModel",
            "language": "en-US",
            "rate": 16000,
            "supported_features": {"custom_language_model": true, "speaker_labels": true}
        })))
        .mount(&server)
        .await;

    let stt = test_client(&server).await;

    let models = stt.list_models().await.unwrap().into_result().models;
    assert_eq!(models[0].name, "en-US_BroadbandModel");

    let model = stt
        .get_model("en-US_BroadbandModel")
        .await
        .unwrap()
        .into_result();
    assert_eq!(
        model.supported_features.unwrap().speaker_labels,
        Some(true)
    );
}
