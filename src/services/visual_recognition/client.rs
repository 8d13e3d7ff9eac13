//! Visual Recognition v3 façade.

use serde_json::json;
use tracing::debug;

use super::types::{
    ClassifiedImages, ClassifyOptions, DetectFacesOptions, DetectedFaces, ImagesFile,
};
use super::{DEFAULT_URL, DEFAULT_VERSION, SERVICE_NAME};
use crate::auth::{Authenticator, CredentialResolver, EnvResolver};
use crate::client::WatsonClient;
use crate::error::{WatsonError, WatsonResult};
use crate::request::{FormPart, ServiceRequest};
use crate::response::DetailedResponse;

/// Client for the Visual Recognition v3 REST API.
///
/// Both operations take images as a multipart upload, a URL inside a JSON
/// `parameters` part, or both at once.
#[derive(Debug)]
pub struct VisualRecognition {
    client: WatsonClient,
}

impl VisualRecognition {
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
    /// (`VISUAL_RECOGNITION_APIKEY`, ...).
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

    /// Classify the content of images.
    pub async fn classify(
        &self,
        options: ClassifyOptions,
    ) -> WatsonResult<DetailedResponse<ClassifiedImages>> {
        if options.images_file.is_none() && options.url.is_none() {
            return Err(WatsonError::Validation(
                "at least one of images_file or url is required".to_string(),
            ));
        }

        debug!(
            has_file = options.images_file.is_some(),
            url = options.url.as_deref(),
            "visual recognition classify"
        );

        let mut parameters = serde_json::Map::new();
        if let Some(url) = &options.url {
            parameters.insert("url".to_string(), json!(url));
        }
        if let Some(threshold) = options.threshold {
            parameters.insert("threshold".to_string(), json!(threshold));
        }
        if let Some(owners) = &options.owners {
            parameters.insert("owners".to_string(), json!(owners));
        }
        if let Some(classifier_ids) = &options.classifier_ids {
            parameters.insert("classifier_ids".to_string(), json!(classifier_ids));
        }

        let mut parts = Vec::new();
        if let Some(file) = options.images_file {
            parts.push(Self::file_part(file));
        }
        if !parameters.is_empty() {
            parts.push(FormPart::Text {
                name: "parameters".to_string(),
                value: serde_json::Value::Object(parameters).to_string(),
            });
        }

        let request = ServiceRequest::post(&["v3", "classify"])
            .header_opt("Accept-Language", options.accept_language.as_deref())?
            .multipart(parts);

        self.client.send_json(request).await
    }

    /// Detect faces in images.
    pub async fn detect_faces(
        &self,
        options: DetectFacesOptions,
    ) -> WatsonResult<DetailedResponse<DetectedFaces>> {
        if options.images_file.is_none() && options.url.is_none() {
            return Err(WatsonError::Validation(
                "at least one of images_file or url is required".to_string(),
            ));
        }

        let mut parts = Vec::new();
        if let Some(file) = options.images_file {
            parts.push(Self::file_part(file));
        }
        if let Some(url) = options.url {
            parts.push(FormPart::Text {
                name: "parameters".to_string(),
                value: json!({ "url": url }).to_string(),
            });
        }

        let request = ServiceRequest::post(&["v3", "detect_faces"]).multipart(parts);
        self.client.send_json(request).await
    }

    fn file_part(file: ImagesFile) -> FormPart {
        FormPart::File {
            name: "images_file".to_string(),
            filename: file.filename,
            content_type: file.content_type,
            data: file.data,
        }
    }
}
