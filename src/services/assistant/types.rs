//! Wire models for the Assistant (Conversation v1) API.
//!
//! Field names map to the documented JSON wire names; unset optional fields
//! are omitted from serialized bodies entirely. Unknown fields in responses
//! are ignored, and enum-typed fields decode undocumented values into an
//! `Unrecognized` variant instead of failing, so newly introduced
//! server-side values never break existing clients.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Opaque conversation context
// =============================================================================

/// Dialog state the service returns and the caller echoes back unmodified on
/// the next message. The client never interprets its contents; key order is
/// preserved across a round trip.
pub type Context = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// Message request/response
// =============================================================================

/// User input for a message turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MessageInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Body of a `message` call. Every field is optional; absent fields are
/// omitted from the serialized body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,
}

/// Response to a `message` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,
}

/// Intent detected in the user input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeIntent {
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Entity detected in the user input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntity {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Opaque metadata attached by the workspace author; round-tripped
    /// verbatim like the conversation context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Context>,
}

/// Output returned by the dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputData {
    #[serde(default)]
    pub log_messages: Vec<LogMessage>,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<Vec<RuntimeResponseGeneric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited: Option<Vec<String>>,
}

/// Dialog log message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: LogLevel,
    pub msg: String,
}

/// Severity of a dialog log message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    /// A value this client does not know about yet.
    Unrecognized(String),
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for LogLevel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "info" => Self::Info,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_string()
    }
}

// =============================================================================
// Generic dialog responses (discriminated on `response_type`)
// =============================================================================

/// Text response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Image response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Option-picker response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
    #[serde(default)]
    pub options: Vec<DialogNodeOutputOptionsElement>,
}

/// One selectable option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeOutputOptionsElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// Typing-indicator pause response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericPause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typing: Option<bool>,
}

/// Disambiguation suggestion response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericSuggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<DialogSuggestion>,
}

/// One disambiguation suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogSuggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// Shared base shape kept when the discriminator value is not recognized.
/// Everything the service sent is preserved and re-emitted on serialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    #[serde(flatten)]
    pub properties: Context,
}

/// Polymorphic dialog output, dispatched on the `response_type` field.
///
/// Documented discriminator values deserialize into their variant shape; an
/// unrecognized value falls back to [`RuntimeResponseGeneric::Base`] with
/// all received fields intact, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeResponseGeneric {
    Text(GenericText),
    Image(GenericImage),
    Option(GenericOption),
    Pause(GenericPause),
    Suggestion(GenericSuggestion),
    Base(GenericBase),
}

impl RuntimeResponseGeneric {
    /// The wire value of the discriminator field.
    pub fn response_type(&self) -> Option<&str> {
        match self {
            Self::Text(_) => Some("text"),
            Self::Image(_) => Some("image"),
            Self::Option(_) => Some("option"),
            Self::Pause(_) => Some("pause"),
            Self::Suggestion(_) => Some("suggestion"),
            Self::Base(base) => base.response_type.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for RuntimeResponseGeneric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let tag = value
            .get("response_type")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let parsed = match tag.as_str() {
            "text" => serde_json::from_value(value).map(Self::Text),
            "image" => serde_json::from_value(value).map(Self::Image),
            "option" => serde_json::from_value(value).map(Self::Option),
            "pause" => serde_json::from_value(value).map(Self::Pause),
            "suggestion" => serde_json::from_value(value).map(Self::Suggestion),
            _ => serde_json::from_value(value).map(Self::Base),
        };
        parsed.map_err(D::Error::custom)
    }
}

impl Serialize for RuntimeResponseGeneric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        fn tagged<T: Serialize, E: serde::ser::Error>(
            tag: &str,
            inner: &T,
        ) -> Result<serde_json::Value, E> {
            let mut object = serde_json::Map::new();
            object.insert(
                "response_type".to_string(),
                serde_json::Value::String(tag.to_string()),
            );
            if let serde_json::Value::Object(fields) =
                serde_json::to_value(inner).map_err(E::custom)?
            {
                object.extend(fields);
            }
            Ok(serde_json::Value::Object(object))
        }

        let value = match self {
            Self::Text(inner) => tagged("text", inner)?,
            Self::Image(inner) => tagged("image", inner)?,
            Self::Option(inner) => tagged("option", inner)?,
            Self::Pause(inner) => tagged("pause", inner)?,
            Self::Suggestion(inner) => tagged("suggestion", inner)?,
            Self::Base(inner) => serde_json::to_value(inner).map_err(S::Error::custom)?,
        };
        value.serialize(serializer)
    }
}

// =============================================================================
// Workspaces
// =============================================================================

/// Training status of a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkspaceStatus {
    NonExistent,
    Training,
    Failed,
    Available,
    Unavailable,
    /// A value this client does not know about yet.
    Unrecognized(String),
}

impl WorkspaceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NonExistent => "Non Existent",
            Self::Training => "Training",
            Self::Failed => "Failed",
            Self::Available => "Available",
            Self::Unavailable => "Unavailable",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for WorkspaceStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Non Existent" => Self::NonExistent,
            "Training" => Self::Training,
            "Failed" => Self::Failed,
            "Available" => Self::Available,
            "Unavailable" => Self::Unavailable,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<WorkspaceStatus> for String {
    fn from(status: WorkspaceStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Workspace summary returned by list/get operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkspaceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Context>,
}

/// Response of `list_workspaces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceCollection {
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Pagination block shared by collection responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Body of `create_workspace` and `update_workspace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Context>,
}

// =============================================================================
// Operation options
// =============================================================================

/// Options for the `message` operation.
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub input: Option<MessageInput>,
    pub alternate_intents: Option<bool>,
    pub context: Option<Context>,
    pub entities: Option<Vec<RuntimeEntity>>,
    pub intents: Option<Vec<RuntimeIntent>>,
    pub output: Option<OutputData>,
    /// Whether to include the audit properties in the response.
    pub include_audit: Option<bool>,
}

impl MessageOptions {
    pub fn into_request(self) -> MessageRequest {
        MessageRequest {
            input: self.input,
            alternate_intents: self.alternate_intents,
            context: self.context,
            entities: self.entities,
            intents: self.intents,
            output: self.output,
        }
    }
}

/// Options for the `list_workspaces` operation.
#[derive(Debug, Clone, Default)]
pub struct ListWorkspacesOptions {
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
}
