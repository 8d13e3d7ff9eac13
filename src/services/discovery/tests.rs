//! Discovery façade tests against a mocked HTTP transport.

use bytes::Bytes;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::Discovery;
use super::types::*;
use crate::auth::Authenticator;
use crate::error::WatsonError;

async fn test_client(server: &MockServer) -> Discovery {
    Discovery::with_options(
        &server.uri(),
        super::DEFAULT_VERSION,
        Authenticator::bearer("test-token").unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_query_with_aggregations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env-1/collections/coll-1/query"))
        .and(query_param("version", super::DEFAULT_VERSION))
        .and(query_param("natural_language_query", "quarterly revenue"))
        .and(query_param("count", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matching_results": 42,
            "results": [
                {"id": "doc-1", "result_metadata": {"score": 2.3}, "title": "Q3 report"}
            ],
            "aggregations": [
                {
                    "type": "term",
                    "field": "enriched_text.entities.text",
                    "results": [{"key": "IBM", "matching_results": 12}]
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let discovery = test_client(&server).await;
    let response = discovery
        .query(
            "env-1",
            "coll-1",
            QueryOptions {
                natural_language_query: Some("quarterly revenue".to_string()),
                count: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .into_result();

    assert_eq!(response.matching_results, Some(42));
    assert_eq!(response.results[0].properties["title"], "Q3 report");
    let aggregations = response.aggregations.unwrap();
    assert!(matches!(aggregations[0], QueryAggregation::Term(_)));
}

#[tokio::test]
async fn test_query_omits_unset_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env-1/collections/coll-1/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matching_results": 0,
            "results": []
        })))
        .mount(&server)
        .await;

    let discovery = test_client(&server).await;
    discovery
        .query("env-1", "coll-1", QueryOptions::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap().to_string();
    assert!(query.contains("version="));
    assert!(!query.contains("filter"));
    assert!(!query.contains("count"));
    assert!(!query.contains("highlight"));
}

#[tokio::test]
async fn test_query_empty_collection_id_issues_no_request() {
    let server = MockServer::start().await;
    let discovery = test_client(&server).await;

    let result = discovery.query("env-1", "  ", QueryOptions::default()).await;
    assert!(matches!(result, Err(WatsonError::Validation(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_environments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "environments": [
                {"environment_id": "env-1", "name": "prod", "read_only": false},
                {"environment_id": "system", "name": "Watson News", "read_only": true}
            ]
        })))
        .mount(&server)
        .await;

    let discovery = test_client(&server).await;
    let environments = discovery
        .list_environments(None)
        .await
        .unwrap()
        .into_result()
        .environments;

    assert_eq!(environments.len(), 2);
    assert_eq!(environments[1].read_only, Some(true));
}

#[tokio::test]
async fn test_add_document_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/env-1/collections/coll-1/documents"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "document_id": "doc-9",
            "status": "processing"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let discovery = test_client(&server).await;
    let mut metadata = serde_json::Map::new();
    metadata.insert("source".to_string(), json!("unit-test"));

    let accepted = discovery
        .add_document(
            "env-1",
            "coll-1",
            DocumentOptions {
                file: Some(FileWithMetadata {
                    data: Bytes::from_static(b"{\"text\": \"hello\"}"),
                    filename: "hello.json".to_string(),
                    content_type: "application/json".to_string(),
                }),
                metadata: Some(metadata),
            },
        )
        .await
        .unwrap();

    assert_eq!(accepted.status_code.as_u16(), 202);
    let result = accepted.into_result();
    assert_eq!(result.document_id.as_deref(), Some("doc-9"));
    assert_eq!(result.status, Some(DocumentStatus::Processing));

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn test_add_document_requires_file_or_metadata() {
    let server = MockServer::start().await;
    let discovery = test_client(&server).await;

    let result = discovery
        .add_document("env-1", "coll-1", DocumentOptions::default())
        .await;
    assert!(matches!(result, Err(WatsonError::Validation(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_document() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/environments/env-1/collections/coll-1/documents/doc-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document_id": "doc-9",
            "status": "deleted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let discovery = test_client(&server).await;
    let response = discovery
        .delete_document("env-1", "coll-1", "doc-9")
        .await
        .unwrap()
        .into_result();

    assert_eq!(response.status.as_deref(), Some("deleted"));
}
