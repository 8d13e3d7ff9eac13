//! Typed async client SDK for IBM Watson cloud services.
//!
//! One façade per service (Assistant, Discovery, Natural Language
//! Understanding, Personality Insights, Speech to Text, Visual Recognition),
//! each exposing one method per documented REST operation. Façades build
//! [`request::ServiceRequest`] descriptors, send them through the shared
//! [`client::WatsonClient`] transport, and deserialize JSON responses into
//! the typed models under [`services`].
//!
//! The client is deliberately thin: parameter validation, URL templating,
//! JSON (de)serialization, and authentication attachment. One attempt per
//! call, no retry: callers receive the status code and raw body of every
//! failure and can layer their own policy on top.

pub mod auth;
pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod services;

// Re-export commonly used items for convenience
pub use auth::{Authenticator, CredentialResolver, Credentials, EnvResolver};
pub use client::WatsonClient;
pub use error::{ApiError, WatsonError, WatsonResult};
pub use response::DetailedResponse;
pub use services::assistant::Assistant;
pub use services::discovery::Discovery;
pub use services::natural_language_understanding::NaturalLanguageUnderstanding;
pub use services::personality_insights::PersonalityInsights;
pub use services::speech_to_text::SpeechToText;
pub use services::visual_recognition::VisualRecognition;
