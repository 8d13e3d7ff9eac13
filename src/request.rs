//! HTTP request descriptors.
//!
//! A [`ServiceRequest`] is the fully-formed description of one REST call:
//! verb, path segments, query string, headers, and body. Façade methods build
//! one per operation and hand it to [`crate::client::WatsonClient`] for
//! execution.
//!
//! Path parameters are carried as whole segments and percent-encoded when the
//! URL is assembled, so a parameter value can never introduce additional path
//! segments. Optional query parameters that are unset are omitted entirely,
//! never sent as an empty string or a null marker.

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::error::{WatsonError, WatsonResult};

// =============================================================================
// Parameter validation
// =============================================================================

/// Fail fast when a required string parameter is empty or blank.
///
/// Used by every façade operation before any request is constructed, so a
/// validation failure issues zero HTTP requests.
pub fn require<'a>(name: &str, value: &'a str) -> WatsonResult<&'a str> {
    if value.trim().is_empty() {
        Err(WatsonError::Validation(format!("{name} is required")))
    } else {
        Ok(value)
    }
}

// =============================================================================
// Request body
// =============================================================================

/// One part of a multipart form body.
#[derive(Debug, Clone)]
pub enum FormPart {
    /// Plain text field.
    Text { name: String, value: String },
    /// File upload with explicit filename and content type.
    File {
        name: String,
        filename: String,
        content_type: String,
        data: Bytes,
    },
}

/// Body of an outgoing request.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body (GET, DELETE).
    #[default]
    Empty,
    /// JSON document, sent with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Raw bytes with an explicit content type (audio uploads, plain text
    /// and HTML documents).
    Binary { data: Bytes, content_type: String },
    /// `multipart/form-data` body.
    Multipart(Vec<FormPart>),
}

// =============================================================================
// Service request
// =============================================================================

/// A fully-described REST call, ready for execution.
#[derive(Debug, Clone)]
pub struct ServiceRequest {
    pub method: Method,
    path: Vec<String>,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    pub body: RequestBody,
    accept: Option<String>,
}

impl ServiceRequest {
    /// New request from a verb and path segments. Segments may be literals
    /// (`"v1"`, `"workspaces"`) or caller-supplied parameters; both are
    /// appended as single, percent-encoded segments.
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            path: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            accept: None,
        }
    }

    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn delete(segments: &[&str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    /// Append a query parameter.
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter when the value is set; omit it entirely when
    /// it is `None`.
    pub fn query_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    /// Append a comma-joined list query parameter when the list is set.
    pub fn query_list(self, name: &str, values: Option<&[String]>) -> Self {
        match values {
            Some(list) if !list.is_empty() => self.query(name, list.join(",")),
            _ => self,
        }
    }

    /// Set a request header.
    pub fn header(mut self, name: &str, value: &str) -> WatsonResult<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| WatsonError::Validation(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| WatsonError::Validation(format!("invalid header value: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Set a request header when the value is present.
    pub fn header_opt(self, name: &str, value: Option<&str>) -> WatsonResult<Self> {
        match value {
            Some(v) => self.header(name, v),
            None => Ok(self),
        }
    }

    /// Set the `Accept` header for content negotiation.
    pub fn accept(mut self, value: &str) -> Self {
        self.accept = Some(value.to_string());
        self
    }

    /// Attach a JSON body. Serialization failures surface as validation
    /// errors since they are caused by caller-supplied input.
    pub fn json<T: Serialize>(mut self, body: &T) -> WatsonResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| WatsonError::Validation(format!("failed to serialize body: {e}")))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// Attach a raw binary body with an explicit content type.
    pub fn binary(mut self, data: Bytes, content_type: &str) -> Self {
        self.body = RequestBody::Binary {
            data,
            content_type: content_type.to_string(),
        };
        self
    }

    /// Attach a multipart form body.
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Assemble the final URL from a base endpoint, the mandatory service
    /// version date (when the service is date-versioned), and this request's
    /// path and query.
    pub fn build_url(&self, base: &Url, version: Option<&str>) -> WatsonResult<Url> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                WatsonError::Validation(format!("base URL '{base}' cannot carry a path"))
            })?;
            segments.pop_if_empty();
            for segment in &self.path {
                segments.push(segment);
            }
        }
        if version.is_some() || !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            if let Some(version) = version {
                pairs.append_pair("version", version);
            }
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn accept_header(&self) -> Option<&str> {
        self.accept.as_deref()
    }
}
