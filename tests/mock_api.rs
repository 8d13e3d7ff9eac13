//! Cross-service transport behavior against a mocked HTTP API.
//!
//! The per-operation tests live next to each façade; these cover the
//! properties shared by every service: header scoping, authentication
//! determinism, error surfacing, and binary payload handling.

use bytes::Bytes;
use serde_json::json;
use watson_sdk::services::assistant::types::{MessageInput, MessageOptions};
use watson_sdk::services::personality_insights::types::{
    Content, ContentItem, ProfileContent, ProfileOptions,
};
use watson_sdk::services::speech_to_text::types::RecognizeOptions;
use watson_sdk::{Assistant, Authenticator, PersonalityInsights, SpeechToText, WatsonError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn message_body() -> serde_json::Value {
    json!({
        "intents": [],
        "entities": [],
        "output": {"text": [], "log_messages": []}
    })
}

#[tokio::test]
async fn custom_header_applies_to_next_request_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_body()))
        .expect(2)
        .mount(&server)
        .await;

    let assistant = Assistant::with_options(
        &server.uri(),
        "2018-07-10",
        Authenticator::bearer("token").unwrap(),
    )
    .unwrap();

    assistant.with_header("X-Trace-Id", "trace-1").unwrap();

    let options = || MessageOptions {
        input: Some(MessageInput::text("hi")),
        ..Default::default()
    };
    assistant.message("ws", options()).await.unwrap();
    assistant.message("ws", options()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0]
            .headers
            .get("x-trace-id")
            .map(|v| v.to_str().unwrap()),
        Some("trace-1")
    );
    // The staged header was consumed by the first request.
    assert!(requests[1].headers.get("x-trace-id").is_none());
}

#[tokio::test]
async fn custom_header_is_cleared_even_when_the_request_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws/message"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let assistant = Assistant::with_options(
        &server.uri(),
        "2018-07-10",
        Authenticator::bearer("token").unwrap(),
    )
    .unwrap();

    assistant.with_header("X-Trace-Id", "trace-1").unwrap();

    let options = || MessageOptions {
        input: Some(MessageInput::text("hi")),
        ..Default::default()
    };
    assert!(assistant.message("ws", options()).await.is_err());
    assert!(assistant.message("ws", options()).await.is_err());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("x-trace-id").is_some());
    assert!(requests[1].headers.get("x-trace-id").is_none());
}

#[tokio::test]
async fn bearer_auth_is_identical_across_repeated_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_body()))
        .expect(3)
        .mount(&server)
        .await;

    let assistant = Assistant::with_options(
        &server.uri(),
        "2018-07-10",
        Authenticator::bearer("fixed-token").unwrap(),
    )
    .unwrap();

    for _ in 0..3 {
        assistant
            .message(
                "ws",
                MessageOptions {
                    input: Some(MessageInput::text("hi")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    let requests = server.received_requests().await.unwrap();
    for request in &requests {
        assert_eq!(
            request
                .headers
                .get("authorization")
                .map(|v| v.to_str().unwrap()),
            Some("Bearer fixed-token")
        );
    }
}

#[tokio::test]
async fn validation_failures_issue_no_requests_across_services() {
    let server = MockServer::start().await;

    let assistant = Assistant::with_options(
        &server.uri(),
        "2018-07-10",
        Authenticator::bearer("token").unwrap(),
    )
    .unwrap();
    let stt =
        SpeechToText::with_url(&server.uri(), Authenticator::bearer("token").unwrap()).unwrap();

    assert!(matches!(
        assistant.message("", MessageOptions::default()).await,
        Err(WatsonError::Validation(_))
    ));
    assert!(matches!(
        stt.recognize(Bytes::new(), "audio/wav", RecognizeOptions::default())
            .await,
        Err(WatsonError::Validation(_))
    ));
    assert!(matches!(
        stt.get_model("  ").await,
        Err(WatsonError::Validation(_))
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_as_transport_error() {
    // Bind a port and release it so nothing is listening there.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let assistant = Assistant::with_options(
        &format!("http://{addr}"),
        "2018-07-10",
        Authenticator::bearer("token").unwrap(),
    )
    .unwrap();

    let err = assistant
        .message(
            "ws",
            MessageOptions {
                input: Some(MessageInput::text("hi")),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    // Connection refused never produced an HTTP response, so this is a
    // transport failure, not an Http error.
    assert!(matches!(err, WatsonError::Transport(_)));
}

#[tokio::test]
async fn non_json_error_body_is_preserved_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string("<html><body>Service Unavailable</body></html>"),
        )
        .mount(&server)
        .await;

    let stt =
        SpeechToText::with_url(&server.uri(), Authenticator::bearer("token").unwrap()).unwrap();
    let err = stt.list_models().await.unwrap_err();

    match err {
        WatsonError::Http { status, body, error } => {
            assert_eq!(status, 503);
            assert_eq!(body, "<html><body>Service Unavailable</body></html>");
            // Parsing is opportunistic; non-JSON bodies leave it unset.
            assert!(error.is_none());
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn csv_profile_bytes_are_not_json_decoded() {
    let server = MockServer::start().await;

    let csv = "trait_id,percentile\nbig5_openness,0.71\n";
    Mock::given(method("POST"))
        .and(path("/v3/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(csv, "text/csv"))
        .mount(&server)
        .await;

    let insights = PersonalityInsights::with_options(
        &server.uri(),
        "2017-10-13",
        Authenticator::bearer("token").unwrap(),
    )
    .unwrap();

    let response = insights
        .profile_as_csv(
            ProfileContent::Content(Content {
                content_items: vec![ContentItem {
                    content: "enough text to profile".to_string(),
                    ..Default::default()
                }],
            }),
            ProfileOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(response.result.as_ref(), csv.as_bytes());
    assert_eq!(
        response
            .headers
            .get("content-type")
            .map(|v| v.to_str().unwrap()),
        Some("text/csv")
    );
}
