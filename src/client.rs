//! Shared HTTP transport for all service façades.
//!
//! A [`WatsonClient`] holds everything that is read-only after construction
//! (base URL, API version date, authentication strategy, default headers, and
//! the pooled `reqwest` client) plus one piece of call-scoped state: the
//! one-shot custom header slot filled by [`WatsonClient::with_header`] and
//! consumed by exactly the next request.
//!
//! Execution is single-attempt: no retry, no circuit breaking. Non-2xx
//! responses are mapped into [`WatsonError::Http`] carrying the status code
//! and the raw body; network-level failures (DNS, connect, TLS) surface as
//! [`WatsonError::Transport`].

use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::auth::Authenticator;
use crate::error::{WatsonError, WatsonResult};
use crate::request::{FormPart, RequestBody, ServiceRequest};
use crate::response::DetailedResponse;

/// Default per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Default connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Opt-out header honored by all Watson services.
const LEARNING_OPT_OUT_HEADER: &str = "X-Watson-Learning-Opt-Out";

/// Shared transport used by every service façade.
#[derive(Debug)]
pub struct WatsonClient {
    service_name: String,
    base_url: Url,
    version: Option<String>,
    authenticator: Authenticator,
    http: reqwest::Client,
    default_headers: HeaderMap,
    /// Headers for the next request only; taken and cleared on send.
    next_request_headers: Mutex<HeaderMap>,
}

impl WatsonClient {
    /// Build a client for one service instance.
    ///
    /// `version` is the API version date attached as a mandatory query
    /// parameter on every call for date-versioned services; pass `None` for
    /// services that are not date-versioned (Speech to Text).
    pub fn new(
        service_name: &str,
        base_url: &str,
        version: Option<&str>,
        authenticator: Authenticator,
    ) -> WatsonResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| WatsonError::Validation(format!("invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(WatsonError::Validation(format!(
                "base URL '{base_url}' cannot carry a path"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(WatsonError::Transport)?;

        Ok(Self {
            service_name: service_name.to_string(),
            base_url,
            version: version.map(str::to_string),
            authenticator,
            http,
            default_headers: HeaderMap::new(),
            next_request_headers: Mutex::new(HeaderMap::new()),
        })
    }

    /// Service name this client was constructed for.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Base endpoint URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// API version date, if the service is date-versioned.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Set a default header sent on every request from this client.
    pub fn set_default_header(&mut self, name: &str, value: &str) -> WatsonResult<()> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| WatsonError::Validation(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| WatsonError::Validation(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(())
    }

    /// Opt out of request logging for Watson service improvement.
    pub fn set_learning_opt_out(&mut self, opt_out: bool) -> WatsonResult<()> {
        self.set_default_header(LEARNING_OPT_OUT_HEADER, if opt_out { "1" } else { "0" })
    }

    /// Stage a custom header for the next request only. It is attached to
    /// exactly one outgoing request and cleared afterwards, whether that
    /// request succeeds or fails.
    pub fn with_header(&self, name: &str, value: &str) -> WatsonResult<()> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| WatsonError::Validation(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| WatsonError::Validation(format!("invalid header value: {e}")))?;
        self.next_request_headers.lock().insert(name, value);
        Ok(())
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Execute a request and deserialize the JSON response body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: ServiceRequest,
    ) -> WatsonResult<DetailedResponse<T>> {
        let response = self.execute(request).await?;
        let status_code = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(WatsonError::Transport)?;
        let result = serde_json::from_slice(&bytes)?;
        Ok(DetailedResponse {
            status_code,
            headers,
            result,
        })
    }

    /// Execute a request and return the raw response bytes, bypassing JSON
    /// decoding (audio, CSV, image payloads).
    pub async fn send_bytes(
        &self,
        request: ServiceRequest,
    ) -> WatsonResult<DetailedResponse<Bytes>> {
        let response = self.execute(request).await?;
        let status_code = response.status();
        let headers = response.headers().clone();
        let result = response.bytes().await.map_err(WatsonError::Transport)?;
        Ok(DetailedResponse {
            status_code,
            headers,
            result,
        })
    }

    /// Execute a request and discard the response body (delete operations).
    pub async fn send_unit(&self, request: ServiceRequest) -> WatsonResult<DetailedResponse<()>> {
        let response = self.execute(request).await?;
        let status_code = response.status();
        let headers = response.headers().clone();
        Ok(DetailedResponse {
            status_code,
            headers,
            result: (),
        })
    }

    /// Single-attempt execution: build the URL, merge headers, attach auth
    /// and body, send, and classify the outcome.
    async fn execute(&self, request: ServiceRequest) -> WatsonResult<reqwest::Response> {
        let url = request.build_url(&self.base_url, self.version.as_deref())?;

        debug!(
            service = %self.service_name,
            method = %request.method,
            url = %url,
            "sending request"
        );

        let mut builder = self.http.request(request.method.clone(), url);

        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        // One-shot headers: taken (and cleared) before the request is sent.
        let one_shot = std::mem::take(&mut *self.next_request_headers.lock());
        for (name, value) in &one_shot {
            builder = builder.header(name, value);
        }

        if let Some(accept) = request.accept_header() {
            builder = builder.header(ACCEPT, accept);
        }

        if let Some(authorization) = self
            .authenticator
            .authorization_header(&self.http)
            .await?
        {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Binary { data, content_type } => {
                builder.header(CONTENT_TYPE, content_type).body(data)
            }
            RequestBody::Multipart(parts) => {
                let mut form = reqwest::multipart::Form::new();
                for part in parts {
                    form = match part {
                        FormPart::Text { name, value } => form.text(name, value),
                        FormPart::File {
                            name,
                            filename,
                            content_type,
                            data,
                        } => {
                            let part = reqwest::multipart::Part::bytes(data.to_vec())
                                .file_name(filename)
                                .mime_str(&content_type)
                                .map_err(|e| {
                                    WatsonError::Validation(format!(
                                        "invalid content type '{content_type}': {e}"
                                    ))
                                })?;
                            form.part(name, part)
                        }
                    };
                }
                builder.multipart(form)
            }
        };

        let response = builder.send().await.map_err(WatsonError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                service = %self.service_name,
                status = status.as_u16(),
                body = %body,
                "service returned error"
            );
            return Err(WatsonError::http(status.as_u16(), body));
        }

        debug!(
            service = %self.service_name,
            status = status.as_u16(),
            "request completed"
        );

        Ok(response)
    }
}
