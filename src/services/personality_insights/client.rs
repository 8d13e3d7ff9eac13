//! Personality Insights v3 façade.

use bytes::Bytes;
use tracing::debug;

use super::types::{Profile, ProfileContent, ProfileOptions};
use super::{DEFAULT_URL, DEFAULT_VERSION, SERVICE_NAME};
use crate::auth::{Authenticator, CredentialResolver, EnvResolver};
use crate::client::WatsonClient;
use crate::error::{WatsonError, WatsonResult};
use crate::request::{ServiceRequest, require};
use crate::response::DetailedResponse;

/// Client for the Personality Insights v3 REST API.
///
/// Both profile operations accept structured JSON content items or raw
/// text/HTML; the latter bypass JSON encoding and travel with their own
/// content type.
#[derive(Debug)]
pub struct PersonalityInsights {
    client: WatsonClient,
}

impl PersonalityInsights {
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
    /// (`PERSONALITY_INSIGHTS_APIKEY`, ...).
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

    /// Generate a personality profile as JSON.
    pub async fn profile(
        &self,
        content: ProfileContent,
        options: ProfileOptions,
    ) -> WatsonResult<DetailedResponse<Profile>> {
        let request = Self::profile_request(content, &options)?;
        self.client.send_json(request).await
    }

    /// Generate a personality profile as CSV. The response body is returned
    /// as raw bytes, untouched by JSON decoding.
    pub async fn profile_as_csv(
        &self,
        content: ProfileContent,
        options: ProfileOptions,
    ) -> WatsonResult<DetailedResponse<Bytes>> {
        let request = Self::profile_request(content, &options)?
            .query_opt("csv_headers", options.csv_headers)
            .accept("text/csv");
        self.client.send_bytes(request).await
    }

    fn profile_request(
        content: ProfileContent,
        options: &ProfileOptions,
    ) -> WatsonResult<ServiceRequest> {
        debug!(
            raw_scores = ?options.raw_scores,
            consumption_preferences = ?options.consumption_preferences,
            "personality insights profile"
        );

        let request = ServiceRequest::post(&["v3", "profile"])
            .query_opt("raw_scores", options.raw_scores)
            .query_opt(
                "consumption_preferences",
                options.consumption_preferences,
            )
            .header_opt("Content-Language", options.content_language.as_deref())?
            .header_opt("Accept-Language", options.accept_language.as_deref())?;

        match content {
            ProfileContent::Content(items) => {
                if items.content_items.is_empty() {
                    return Err(WatsonError::Validation(
                        "content_items is required".to_string(),
                    ));
                }
                request.json(&items)
            }
            ProfileContent::Text(text) => {
                let text = require("text", &text)?.to_string();
                Ok(request.binary(Bytes::from(text), "text/plain"))
            }
            ProfileContent::Html(html) => {
                let html = require("html", &html)?.to_string();
                Ok(request.binary(Bytes::from(html), "text/html"))
            }
        }
    }
}
