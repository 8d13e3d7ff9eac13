//! Wire models for the Discovery v1 API.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Environments and collections
// =============================================================================

/// Discovery environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

/// Response of `list_environments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEnvironmentsResponse {
    #[serde(default)]
    pub environments: Vec<Environment>,
}

/// Discovery collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_counts: Option<DocumentCounts>,
}

/// Document counts for a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentCounts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed: Option<i64>,
}

/// Response of `list_collections`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListCollectionsResponse {
    #[serde(default)]
    pub collections: Vec<Collection>,
}

// =============================================================================
// Documents
// =============================================================================

/// Ingestion status of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentStatus {
    Available,
    AvailableWithNotices,
    Failed,
    Processing,
    /// A value this client does not know about yet.
    Unrecognized(String),
}

impl DocumentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::AvailableWithNotices => "available with notices",
            Self::Failed => "failed",
            Self::Processing => "processing",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for DocumentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "available" => Self::Available,
            "available with notices" => Self::AvailableWithNotices,
            "failed" => Self::Failed,
            "processing" => Self::Processing,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<DocumentStatus> for String {
    fn from(status: DocumentStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Response of `add_document`: the document was accepted for processing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentAccepted {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
}

/// Response of `delete_document`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// File payload for `add_document`: bytes plus the explicit filename and
/// content type the multipart part must carry.
#[derive(Debug, Clone)]
pub struct FileWithMetadata {
    pub data: bytes::Bytes,
    pub filename: String,
    pub content_type: String,
}

/// Options for the `add_document` operation.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// File to ingest.
    pub file: Option<FileWithMetadata>,
    /// Opaque JSON metadata stored alongside the document, passed through
    /// uninterpreted.
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

// =============================================================================
// Query
// =============================================================================

/// Options for the `query` operation. Unset fields are omitted from the
/// query string entirely.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub filter: Option<String>,
    pub query: Option<String>,
    pub natural_language_query: Option<String>,
    pub aggregation: Option<String>,
    pub count: Option<i64>,
    pub offset: Option<i64>,
    pub return_fields: Option<Vec<String>>,
    pub sort: Option<Vec<String>>,
    pub highlight: Option<bool>,
    pub deduplicate: Option<bool>,
}

/// Response of `query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_results: Option<i64>,
    #[serde(default)]
    pub results: Vec<QueryResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

/// One matching document. The document body is schemaless, so everything
/// beyond the identity/score fields is kept in `properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_metadata: Option<QueryResultMetadata>,
    #[serde(flatten)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Relevance metadata for a query result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResultMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

// =============================================================================
// Aggregations (discriminated on `type`)
// =============================================================================

/// One bucket of an aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_results: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// `term` aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermAggregation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default)]
    pub results: Vec<AggregationResult>,
}

/// `histogram` aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramAggregation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(default)]
    pub results: Vec<AggregationResult>,
}

/// `filter` aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterAggregation {
    #[serde(default, rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_results: Option<i64>,
    #[serde(default)]
    pub results: Vec<AggregationResult>,
}

/// `nested` aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedAggregation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_results: Option<i64>,
    #[serde(default)]
    pub results: Vec<AggregationResult>,
}

/// `timeslice` aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimesliceAggregation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default)]
    pub results: Vec<AggregationResult>,
}

/// Shared base shape kept when the `type` value is not recognized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationBase {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub aggregation_type: Option<String>,
    #[serde(flatten)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Polymorphic aggregation result, dispatched on the `type` field. An
/// unrecognized value falls back to [`QueryAggregation::Base`] with all
/// received fields intact.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryAggregation {
    Term(TermAggregation),
    Histogram(HistogramAggregation),
    Filter(FilterAggregation),
    Nested(NestedAggregation),
    Timeslice(TimesliceAggregation),
    Base(AggregationBase),
}

impl QueryAggregation {
    /// The wire value of the discriminator field.
    pub fn aggregation_type(&self) -> Option<&str> {
        match self {
            Self::Term(_) => Some("term"),
            Self::Histogram(_) => Some("histogram"),
            Self::Filter(_) => Some("filter"),
            Self::Nested(_) => Some("nested"),
            Self::Timeslice(_) => Some("timeslice"),
            Self::Base(base) => base.aggregation_type.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for QueryAggregation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let tag = value
            .get("type")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let parsed = match tag.as_str() {
            "term" => serde_json::from_value(value).map(Self::Term),
            "histogram" => serde_json::from_value(value).map(Self::Histogram),
            "filter" => serde_json::from_value(value).map(Self::Filter),
            "nested" => serde_json::from_value(value).map(Self::Nested),
            "timeslice" => serde_json::from_value(value).map(Self::Timeslice),
            _ => serde_json::from_value(value).map(Self::Base),
        };
        parsed.map_err(D::Error::custom)
    }
}

impl Serialize for QueryAggregation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        fn tagged<T: Serialize, E: serde::ser::Error>(
            tag: &str,
            inner: &T,
        ) -> Result<serde_json::Value, E> {
            let mut object = serde_json::Map::new();
            object.insert(
                "type".to_string(),
                serde_json::Value::String(tag.to_string()),
            );
            if let serde_json::Value::Object(fields) =
                serde_json::to_value(inner).map_err(E::custom)?
            {
                object.extend(fields);
            }
            Ok(serde_json::Value::Object(object))
        }

        let value = match self {
            Self::Term(inner) => tagged("term", inner)?,
            Self::Histogram(inner) => tagged("histogram", inner)?,
            Self::Filter(inner) => tagged("filter", inner)?,
            Self::Nested(inner) => tagged("nested", inner)?,
            Self::Timeslice(inner) => tagged("timeslice", inner)?,
            Self::Base(inner) => serde_json::to_value(inner).map_err(S::Error::custom)?,
        };
        value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_aggregation_dispatch() {
        let json = r#"{
            "type": "term",
            "field": "enriched_text.concepts.text",
            "count": 10,
            "results": [
                {"key": "cloud computing", "matching_results": 204},
                {"key": "IBM", "matching_results": 190}
            ]
        }"#;
        let parsed: QueryAggregation = serde_json::from_str(json).unwrap();
        match &parsed {
            QueryAggregation::Term(term) => {
                assert_eq!(term.field.as_deref(), Some("enriched_text.concepts.text"));
                assert_eq!(term.results.len(), 2);
                assert_eq!(term.results[0].matching_results, Some(204));
            }
            other => panic!("expected term aggregation, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_aggregations_recurse() {
        let json = r#"{
            "type": "nested",
            "path": "enriched_text.entities",
            "results": [
                {
                    "key": "x",
                    "aggregations": [{"type": "term", "field": "inner", "results": []}]
                }
            ]
        }"#;
        let parsed: QueryAggregation = serde_json::from_str(json).unwrap();
        match parsed {
            QueryAggregation::Nested(nested) => {
                let inner = nested.results[0].aggregations.as_ref().unwrap();
                assert!(matches!(inner[0], QueryAggregation::Term(_)));
            }
            other => panic!("expected nested aggregation, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_aggregation_type_falls_back_to_base() {
        let json = r#"{"type":"unique_count","field":"author","value":42}"#;
        let parsed: QueryAggregation = serde_json::from_str(json).unwrap();
        match &parsed {
            QueryAggregation::Base(base) => {
                assert_eq!(base.aggregation_type.as_deref(), Some("unique_count"));
                assert_eq!(base.properties["value"], 42);
            }
            other => panic!("expected base fallback, got {other:?}"),
        }
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }

    #[test]
    fn test_query_result_keeps_document_fields() {
        let json = r#"{
            "id": "doc-1",
            "result_metadata": {"score": 1.21},
            "title": "Annual report",
            "text": "…",
            "enriched_text": {"sentiment": {"document": {"label": "positive"}}}
        }"#;
        let result: QueryResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.id.as_deref(), Some("doc-1"));
        assert_eq!(result.result_metadata.unwrap().score, Some(1.21));
        assert_eq!(result.properties["title"], "Annual report");
        assert_eq!(
            result.properties["enriched_text"]["sentiment"]["document"]["label"],
            "positive"
        );
    }

    #[test]
    fn test_document_status_unrecognized() {
        let status = DocumentStatus::from("queued".to_string());
        assert_eq!(status, DocumentStatus::Unrecognized("queued".into()));
        assert_eq!(
            DocumentStatus::from("available with notices".to_string()),
            DocumentStatus::AvailableWithNotices
        );
    }
}
