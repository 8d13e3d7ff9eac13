//! Speech to Text v1 façade.

use bytes::Bytes;
use tracing::debug;

use super::types::{RecognizeOptions, SpeechModel, SpeechModels, SpeechRecognitionResults};
use super::{DEFAULT_URL, SERVICE_NAME};
use crate::auth::{Authenticator, CredentialResolver, EnvResolver};
use crate::client::WatsonClient;
use crate::error::{WatsonError, WatsonResult};
use crate::request::{ServiceRequest, require};
use crate::response::DetailedResponse;

/// Client for the Speech to Text v1 REST API.
///
/// Unlike the other services, Speech to Text is not date-versioned: no
/// `version` query parameter is sent. Audio travels as the raw request body
/// with an explicit audio content type.
#[derive(Debug)]
pub struct SpeechToText {
    client: WatsonClient,
}

impl SpeechToText {
    /// New client against the default endpoint.
    pub fn new(authenticator: Authenticator) -> WatsonResult<Self> {
        Self::with_url(DEFAULT_URL, authenticator)
    }

    /// New client with an explicit endpoint.
    pub fn with_url(url: &str, authenticator: Authenticator) -> WatsonResult<Self> {
        let client = WatsonClient::new(SERVICE_NAME, url, None, authenticator)?;
        Ok(Self { client })
    }

    /// New client with credentials discovered from the environment
    /// (`SPEECH_TO_TEXT_APIKEY`, ...).
    pub fn from_env() -> WatsonResult<Self> {
        Self::from_resolver(&EnvResolver)
    }

    /// New client with credentials from an explicit resolver.
    pub fn from_resolver(resolver: &dyn CredentialResolver) -> WatsonResult<Self> {
        let creds = resolver.resolve(SERVICE_NAME)?;
        let authenticator = Authenticator::from_credentials(&creds)?;
        let url = creds.url.as_deref().unwrap_or(DEFAULT_URL);
        Self::with_url(url, authenticator)
    }

    /// Stage a custom header for the next request only.
    pub fn with_header(&self, name: &str, value: &str) -> WatsonResult<()> {
        self.client.with_header(name, value)
    }

    /// Access the underlying transport (default headers, base URL).
    pub fn client_mut(&mut self) -> &mut WatsonClient {
        &mut self.client
    }

    /// Recognize speech in an audio payload.
    ///
    /// `content_type` names the audio format (`audio/flac`, `audio/wav`,
    /// `audio/ogg;codecs=opus`, ...). The audio bytes are sent untouched.
    pub async fn recognize(
        &self,
        audio: Bytes,
        content_type: &str,
        options: RecognizeOptions,
    ) -> WatsonResult<DetailedResponse<SpeechRecognitionResults>> {
        let content_type = require("content_type", content_type)?;
        if audio.is_empty() {
            return Err(WatsonError::Validation("audio is required".to_string()));
        }

        debug!(
            content_type,
            audio_bytes = audio.len(),
            model = options.model.as_deref(),
            "speech to text recognize"
        );

        let request = ServiceRequest::post(&["v1", "recognize"])
            .query_opt("model", options.model)
            .query_opt("customization_id", options.customization_id)
            .query_opt("inactivity_timeout", options.inactivity_timeout)
            .query_list("keywords", options.keywords.as_deref())
            .query_opt("keywords_threshold", options.keywords_threshold)
            .query_opt("max_alternatives", options.max_alternatives)
            .query_opt(
                "word_alternatives_threshold",
                options.word_alternatives_threshold,
            )
            .query_opt("word_confidence", options.word_confidence)
            .query_opt("timestamps", options.timestamps)
            .query_opt("profanity_filter", options.profanity_filter)
            .query_opt("smart_formatting", options.smart_formatting)
            .query_opt("speaker_labels", options.speaker_labels)
            .binary(audio, content_type);

        self.client.send_json(request).await
    }

    /// List available recognition models.
    pub async fn list_models(&self) -> WatsonResult<DetailedResponse<SpeechModels>> {
        let request = ServiceRequest::get(&["v1", "models"]);
        self.client.send_json(request).await
    }

    /// Get one recognition model by name.
    pub async fn get_model(
        &self,
        model_id: &str,
    ) -> WatsonResult<DetailedResponse<SpeechModel>> {
        let model_id = require("model_id", model_id)?;

        let request = ServiceRequest::get(&["v1", "models", model_id]);
        self.client.send_json(request).await
    }
}
