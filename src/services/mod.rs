//! Per-service façades.
//!
//! Each submodule follows the same layout: `client.rs` with the façade
//! struct (one method per REST operation), `types.rs` with the wire models,
//! and `tests.rs` with mocked-transport tests.

pub mod assistant;
pub mod discovery;
pub mod natural_language_understanding;
pub mod personality_insights;
pub mod speech_to_text;
pub mod visual_recognition;
