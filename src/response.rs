//! Response wrapper returned by every operation.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// Composite result of one REST call: status code, response headers, and the
/// typed (or raw) body.
///
/// Non-2xx responses never produce a `DetailedResponse`; they surface as
/// [`crate::error::WatsonError::Http`] instead.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status_code: StatusCode,
    pub headers: HeaderMap,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Discard status and headers, keeping only the typed result.
    pub fn into_result(self) -> T {
        self.result
    }

    /// Map the body while keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DetailedResponse<U> {
        DetailedResponse {
            status_code: self.status_code,
            headers: self.headers,
            result: f(self.result),
        }
    }
}
