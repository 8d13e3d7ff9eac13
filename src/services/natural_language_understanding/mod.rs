//! IBM Watson Natural Language Understanding v1.
//!
//! Feature extraction from text: sentiment, emotion, entities, keywords,
//! concepts, categories, relations, and semantic roles.
//!
//! # References
//!
//! - [API Reference](https://cloud.ibm.com/apidocs/natural-language-understanding)

mod client;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::NaturalLanguageUnderstanding;

/// Service name used for credential resolution.
pub const SERVICE_NAME: &str = "natural_language_understanding";

/// Default service endpoint.
pub const DEFAULT_URL: &str =
    "https://gateway.watsonplatform.net/natural-language-understanding/api";

/// Default API version date.
pub const DEFAULT_VERSION: &str = "2018-03-16";
