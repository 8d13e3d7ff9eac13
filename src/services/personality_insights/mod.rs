//! IBM Watson Personality Insights v3.
//!
//! Personality characteristics inferred from authored text: Big Five
//! dimensions with facets, Needs, Values, and consumption preferences.
//!
//! # References
//!
//! - [API Reference](https://cloud.ibm.com/apidocs/personality-insights)

mod client;
pub mod types;


pub use client::PersonalityInsights;

/// Service name used for credential resolution.
pub const SERVICE_NAME: &str = "personality_insights";

/// Default service endpoint.
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/personality-insights/api";

/// Default API version date.
pub const DEFAULT_VERSION: &str = "2017-10-13";
