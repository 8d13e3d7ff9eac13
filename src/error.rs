//! Error types for the Watson client.
//!
//! Every fallible operation in this crate returns [`WatsonResult`]. The error
//! taxonomy keeps the three failure classes callers need to distinguish:
//!
//! - [`WatsonError::Validation`]: a required parameter was missing or
//!   malformed; raised before any network I/O.
//! - [`WatsonError::Transport`]: the request never reached the service
//!   (DNS, connect, TLS, timeout).
//! - [`WatsonError::Http`]: the service answered with a non-2xx status; the
//!   status code and the raw response body are always preserved, plus the
//!   parsed service error shape when the body is JSON.
//!
//! Unknown response fields and unknown enum values are never errors; only a
//! body that is not valid JSON where JSON was expected surfaces as
//! [`WatsonError::Deserialization`].

use serde::Deserialize;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type WatsonResult<T> = Result<T, WatsonError>;

/// Error returned by every client operation.
#[derive(Debug, Error)]
pub enum WatsonError {
    /// A required parameter was missing or malformed. No request was issued.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// Credentials could not be resolved or exchanged for a token.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Network-level failure: the request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service returned a non-2xx status.
    #[error("service error {status}: {body}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body, preserved even when it is not the documented
        /// error shape.
        body: String,
        /// Parsed service error, when the body was JSON.
        error: Option<ApiError>,
    },

    /// The response body was not valid JSON where JSON was expected.
    #[error("malformed response body: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl WatsonError {
    /// Build an HTTP error from a status code and raw body, parsing the
    /// documented error shape opportunistically. The raw body is kept either
    /// way.
    pub fn http(status: u16, body: String) -> Self {
        let error = serde_json::from_str::<ApiError>(&body).ok();
        WatsonError::Http {
            status,
            body,
            error,
        }
    }

    /// Status code of an HTTP error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            WatsonError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body shape documented by the Watson services.
///
/// The services are not consistent about which of these fields they populate
/// (some send `error`, some `message`, some both), so every field is
/// optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "moreInfo", alias = "more_information")]
    pub more_info: Option<String>,
}

impl ApiError {
    /// Best-effort human-readable message: `error` when present, otherwise
    /// `message`.
    pub fn description(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_parses_documented_shape() {
        let err = WatsonError::http(404, r#"{"error":"not found","code":404}"#.to_string());
        match &err {
            WatsonError::Http {
                status,
                body,
                error,
            } => {
                assert_eq!(*status, 404);
                assert_eq!(body, r#"{"error":"not found","code":404}"#);
                let parsed = error.as_ref().unwrap();
                assert_eq!(parsed.description(), Some("not found"));
                assert_eq!(parsed.code, Some(404));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn test_http_error_keeps_unparseable_body() {
        let err = WatsonError::http(502, "<html>Bad Gateway</html>".to_string());
        match &err {
            WatsonError::Http { body, error, .. } => {
                assert_eq!(body, "<html>Bad Gateway</html>");
                assert!(error.is_none());
            }
            other => panic!("expected Http error, got {other:?}"),
        }
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_api_error_message_fallback() {
        let parsed: ApiError =
            serde_json::from_str(r#"{"message":"Resource not found","extra":true}"#).unwrap();
        assert_eq!(parsed.description(), Some("Resource not found"));
        assert!(parsed.error.is_none());
    }
}
