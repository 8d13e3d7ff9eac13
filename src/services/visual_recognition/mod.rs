//! IBM Watson Visual Recognition v3.
//!
//! Image classification with prebuilt and custom classifiers, and face
//! detection with age and gender estimates.
//!
//! # References
//!
//! - [API Reference](https://cloud.ibm.com/apidocs/visual-recognition)

mod client;
pub mod types;


pub use client::VisualRecognition;

/// Service name used for credential resolution.
pub const SERVICE_NAME: &str = "visual_recognition";

/// Default service endpoint.
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/visual-recognition/api";

/// Default API version date.
pub const DEFAULT_VERSION: &str = "2018-03-19";
