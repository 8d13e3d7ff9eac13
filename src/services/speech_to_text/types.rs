//! Wire models for the Speech to Text v1 API.

use serde::{Deserialize, Serialize};

// =============================================================================
// Recognition options
// =============================================================================

/// Options for the `recognize` operation. Everything here travels as query
/// parameters; the audio itself is the raw request body.
#[derive(Debug, Clone, Default)]
pub struct RecognizeOptions {
    /// Recognition model, e.g. `en-US_BroadbandModel`.
    pub model: Option<String>,
    /// Customization ID of a custom language model.
    pub customization_id: Option<String>,
    /// Seconds of non-speech before the stream is ended. `-1` disables.
    pub inactivity_timeout: Option<i64>,
    /// Keywords to spot in the audio.
    pub keywords: Option<Vec<String>>,
    /// Minimum confidence for a keyword match, in `[0, 1]`.
    pub keywords_threshold: Option<f64>,
    /// Maximum number of alternative transcripts.
    pub max_alternatives: Option<i64>,
    /// Minimum confidence for word alternatives, in `[0, 1]`.
    pub word_alternatives_threshold: Option<f64>,
    /// Include per-word confidence scores.
    pub word_confidence: Option<bool>,
    /// Include per-word start/end timestamps.
    pub timestamps: Option<bool>,
    /// Mask profanity in the transcript (US English only).
    pub profanity_filter: Option<bool>,
    /// Convert dates, times, and numbers to conventional representations.
    pub smart_formatting: Option<bool>,
    /// Label which speaker said which words.
    pub speaker_labels: Option<bool>,
}

// =============================================================================
// Recognition results
// =============================================================================

/// Response of `recognize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechRecognitionResults {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_labels: Option<Vec<SpeakerLabelsResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// One final or interim recognition result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechRecognitionResult {
    #[serde(rename = "final")]
    pub final_results: bool,
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords_result: Option<
        std::collections::HashMap<String, Vec<KeywordResult>>,
    >,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_alternatives: Option<Vec<WordAlternativeResults>>,
}

/// One alternative transcript.
///
/// `timestamps` entries are `[word, start, end]` triples and `word_confidence`
/// entries are `[word, confidence]` pairs, mirroring the wire arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechRecognitionAlternative {
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Vec<WordTimestamp>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_confidence: Option<Vec<WordConfidence>>,
}

/// `[word, start_seconds, end_seconds]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTimestamp(pub String, pub f64, pub f64);

/// `[word, confidence]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordConfidence(pub String, pub f64);

/// A spotted keyword occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_text: Option<String>,
    pub start_time: f64,
    pub end_time: f64,
    pub confidence: f64,
}

/// Alternative hypotheses for one time span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordAlternativeResults {
    pub start_time: f64,
    pub end_time: f64,
    #[serde(default)]
    pub alternatives: Vec<WordAlternativeResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordAlternativeResult {
    pub confidence: f64,
    pub word: String,
}

/// Speaker attribution for one word span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeakerLabelsResult {
    pub from: f64,
    pub to: f64,
    pub speaker: i64,
    pub confidence: f64,
    #[serde(rename = "final")]
    pub final_results: bool,
}

// =============================================================================
// Models
// =============================================================================

/// A recognition model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechModel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
}

/// Feature flags carried by a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_language_model: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_labels: Option<bool>,
}

/// Response of `list_models`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechModels {
    #[serde(default)]
    pub models: Vec<SpeechModel>,
}
