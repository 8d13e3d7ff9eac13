//! IBM Watson Assistant (Conversation v1).
//!
//! Multi-turn dialog against a workspace. The service owns all dialog state;
//! the client's only job per turn is to echo the opaque `context` object
//! from the previous response back with the next request.
//!
//! # Example
//!
//! ```rust,no_run
//! use watson_sdk::{Assistant, Authenticator};
//! use watson_sdk::services::assistant::types::{MessageInput, MessageOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let assistant = Assistant::new(Authenticator::iam(
//!         std::env::var("CONVERSATION_APIKEY")?,
//!     )?)?;
//!
//!     let mut context = None;
//!     for line in ["hello", "I'd like a large pizza"] {
//!         let response = assistant
//!             .message(
//!                 "workspace-id",
//!                 MessageOptions {
//!                     input: Some(MessageInput::text(line)),
//!                     context: context.take(),
//!                     ..Default::default()
//!                 },
//!             )
//!             .await?
//!             .into_result();
//!         // Thread the returned context into the next turn, unmodified.
//!         context = response.context.clone();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # References
//!
//! - [API Reference](https://cloud.ibm.com/apidocs/assistant-v1)

mod client;
pub mod types;


pub use client::Assistant;

/// Service name used for credential resolution.
pub const SERVICE_NAME: &str = "conversation";

/// Default service endpoint.
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/conversation/api";

/// Default API version date.
pub const DEFAULT_VERSION: &str = "2018-07-10";
