//! Natural Language Understanding v1 façade.

use tracing::debug;

use super::types::{AnalysisResults, AnalyzeOptions, DeleteModelResponse, ListModelsResponse};
use super::{DEFAULT_URL, DEFAULT_VERSION, SERVICE_NAME};
use crate::auth::{Authenticator, CredentialResolver, EnvResolver};
use crate::client::WatsonClient;
use crate::error::{WatsonError, WatsonResult};
use crate::request::{ServiceRequest, require};
use crate::response::DetailedResponse;

/// Client for the Natural Language Understanding v1 REST API.
///
/// `analyze` extracts the requested features from text, HTML, or a public
/// URL; model operations manage deployed custom models.
#[derive(Debug)]
pub struct NaturalLanguageUnderstanding {
    client: WatsonClient,
}

impl NaturalLanguageUnderstanding {
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
    /// (`NATURAL_LANGUAGE_UNDERSTANDING_APIKEY`, ...).
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

    /// Analyze text, HTML, or a public web page.
    ///
    /// One of `text`, `html`, or `url` must be set in `options`; supplying
    /// none fails before any request is issued.
    pub async fn analyze(
        &self,
        options: AnalyzeOptions,
    ) -> WatsonResult<DetailedResponse<AnalysisResults>> {
        if options.text.is_none() && options.html.is_none() && options.url.is_none() {
            return Err(WatsonError::Validation(
                "one of text, html, or url is required".to_string(),
            ));
        }

        debug!(
            has_text = options.text.is_some(),
            has_html = options.html.is_some(),
            url = options.url.as_deref(),
            "nlu analyze"
        );

        let request = ServiceRequest::post(&["v1", "analyze"]).json(&options)?;
        self.client.send_json(request).await
    }

    /// List deployed custom models.
    pub async fn list_models(&self) -> WatsonResult<DetailedResponse<ListModelsResponse>> {
        let request = ServiceRequest::get(&["v1", "models"]);
        self.client.send_json(request).await
    }

    /// Delete a custom model.
    pub async fn delete_model(
        &self,
        model_id: &str,
    ) -> WatsonResult<DetailedResponse<DeleteModelResponse>> {
        let model_id = require("model_id", model_id)?;

        let request = ServiceRequest::delete(&["v1", "models", model_id]);
        self.client.send_json(request).await
    }
}
