//! IBM Watson Speech to Text v1.
//!
//! Audio transcription with word timestamps, confidence scores, keyword
//! spotting, and speaker labels. This service is not date-versioned.
//!
//! # References
//!
//! - [API Reference](https://cloud.ibm.com/apidocs/speech-to-text)

mod client;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::SpeechToText;

/// Service name used for credential resolution.
pub const SERVICE_NAME: &str = "speech_to_text";

/// Default service endpoint.
pub const DEFAULT_URL: &str = "https://stream.watsonplatform.net/speech-to-text/api";
