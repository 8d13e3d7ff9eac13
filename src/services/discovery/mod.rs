//! IBM Watson Discovery v1.
//!
//! Search and content analytics over ingested document collections. Results
//! are schemaless: each hit keeps its full document body, and aggregations
//! are polymorphic on their `type` field.
//!
//! # References
//!
//! - [API Reference](https://cloud.ibm.com/apidocs/discovery)

mod client;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::Discovery;

/// Service name used for credential resolution.
pub const SERVICE_NAME: &str = "discovery";

/// Default service endpoint.
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/discovery/api";

/// Default API version date.
pub const DEFAULT_VERSION: &str = "2018-08-01";
