//! Discovery v1 façade.

use tracing::debug;

use super::types::{
    DeleteDocumentResponse, DocumentAccepted, DocumentOptions, Environment,
    ListCollectionsResponse, ListEnvironmentsResponse, QueryOptions, QueryResponse,
};
use super::{DEFAULT_URL, DEFAULT_VERSION, SERVICE_NAME};
use crate::auth::{Authenticator, CredentialResolver, EnvResolver};
use crate::client::WatsonClient;
use crate::error::{WatsonError, WatsonResult};
use crate::request::{FormPart, ServiceRequest, require};
use crate::response::DetailedResponse;

/// Client for the Discovery v1 REST API.
///
/// Operations are addressed by environment and collection identifiers. The
/// `query` operation runs the Discovery Query Language or a natural-language
/// query; `add_document` ingests files via multipart upload.
#[derive(Debug)]
pub struct Discovery {
    client: WatsonClient,
}

impl Discovery {
    /// New client against the default endpoint and version date.
    pub fn new(authenticator: Authenticator) -> WatsonResult<Self> {
        Self::with_options(DEFAULT_URL, DEFAULT_VERSION, authenticator)
    }

    /// New client with explicit endpoint and version date.
    pub fn with_options(
        url: &str,
        version: &str,
        authenticator: Authenticator,
    ) -> WatsonResult<Self> {
        let client = WatsonClient::new(SERVICE_NAME, url, Some(version), authenticator)?;
        Ok(Self { client })
    }

    /// New client with credentials discovered from the environment
    /// (`DISCOVERY_APIKEY`, `DISCOVERY_URL`, ...).
    pub fn from_env() -> WatsonResult<Self> {
        Self::from_resolver(&EnvResolver)
    }

    /// New client with credentials from an explicit resolver.
    pub fn from_resolver(resolver: &dyn CredentialResolver) -> WatsonResult<Self> {
        let creds = resolver.resolve(SERVICE_NAME)?;
        let authenticator = Authenticator::from_credentials(&creds)?;
        let url = creds.url.as_deref().unwrap_or(DEFAULT_URL);
        Self::with_options(url, DEFAULT_VERSION, authenticator)
    }

    /// Stage a custom header for the next request only.
    pub fn with_header(&self, name: &str, value: &str) -> WatsonResult<()> {
        self.client.with_header(name, value)
    }

    /// Access the underlying transport (default headers, base URL).
    pub fn client_mut(&mut self) -> &mut WatsonClient {
        &mut self.client
    }

    /// List environments in the service instance.
    pub async fn list_environments(
        &self,
        name: Option<&str>,
    ) -> WatsonResult<DetailedResponse<ListEnvironmentsResponse>> {
        let request = ServiceRequest::get(&["v1", "environments"]).query_opt("name", name);
        self.client.send_json(request).await
    }

    /// Get environment details.
    pub async fn get_environment(
        &self,
        environment_id: &str,
    ) -> WatsonResult<DetailedResponse<Environment>> {
        let environment_id = require("environment_id", environment_id)?;

        let request = ServiceRequest::get(&["v1", "environments", environment_id]);
        self.client.send_json(request).await
    }

    /// List collections in an environment.
    pub async fn list_collections(
        &self,
        environment_id: &str,
        name: Option<&str>,
    ) -> WatsonResult<DetailedResponse<ListCollectionsResponse>> {
        let environment_id = require("environment_id", environment_id)?;

        let request = ServiceRequest::get(&["v1", "environments", environment_id, "collections"])
            .query_opt("name", name);
        self.client.send_json(request).await
    }

    /// Query a collection.
    ///
    /// All search criteria travel as query parameters; unset options are
    /// omitted from the URL entirely.
    pub async fn query(
        &self,
        environment_id: &str,
        collection_id: &str,
        options: QueryOptions,
    ) -> WatsonResult<DetailedResponse<QueryResponse>> {
        let environment_id = require("environment_id", environment_id)?;
        let collection_id = require("collection_id", collection_id)?;

        debug!(environment_id, collection_id, "discovery query");

        let request = ServiceRequest::get(&[
            "v1",
            "environments",
            environment_id,
            "collections",
            collection_id,
            "query",
        ])
        .query_opt("filter", options.filter)
        .query_opt("query", options.query)
        .query_opt("natural_language_query", options.natural_language_query)
        .query_opt("aggregation", options.aggregation)
        .query_opt("count", options.count)
        .query_opt("offset", options.offset)
        .query_list("return", options.return_fields.as_deref())
        .query_list("sort", options.sort.as_deref())
        .query_opt("highlight", options.highlight)
        .query_opt("deduplicate", options.deduplicate);

        self.client.send_json(request).await
    }

    /// Add a document to a collection via multipart upload.
    ///
    /// At least one of `file` or `metadata` must be supplied. The metadata
    /// JSON is passed through uninterpreted as a text form part.
    pub async fn add_document(
        &self,
        environment_id: &str,
        collection_id: &str,
        options: DocumentOptions,
    ) -> WatsonResult<DetailedResponse<DocumentAccepted>> {
        let environment_id = require("environment_id", environment_id)?;
        let collection_id = require("collection_id", collection_id)?;

        if options.file.is_none() && options.metadata.is_none() {
            return Err(WatsonError::Validation(
                "at least one of file or metadata is required".to_string(),
            ));
        }

        let mut parts = Vec::new();
        if let Some(file) = options.file {
            parts.push(FormPart::File {
                name: "file".to_string(),
                filename: file.filename,
                content_type: file.content_type,
                data: file.data,
            });
        }
        if let Some(metadata) = options.metadata {
            parts.push(FormPart::Text {
                name: "metadata".to_string(),
                value: serde_json::Value::Object(metadata).to_string(),
            });
        }

        let request = ServiceRequest::post(&[
            "v1",
            "environments",
            environment_id,
            "collections",
            collection_id,
            "documents",
        ])
        .multipart(parts);

        self.client.send_json(request).await
    }

    /// Delete a document from a collection.
    pub async fn delete_document(
        &self,
        environment_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> WatsonResult<DetailedResponse<DeleteDocumentResponse>> {
        let environment_id = require("environment_id", environment_id)?;
        let collection_id = require("collection_id", collection_id)?;
        let document_id = require("document_id", document_id)?;

        let request = ServiceRequest::delete(&[
            "v1",
            "environments",
            environment_id,
            "collections",
            collection_id,
            "documents",
            document_id,
        ]);

        self.client.send_json(request).await
    }
}
