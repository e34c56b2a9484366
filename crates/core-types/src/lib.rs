use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Shared error type for the core crates. Component crates define richer
/// enums and convert into this at the facade boundary.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    #[error("{message}")]
    Message { message: String },
}

impl CoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PromptId(pub String);

impl PromptId {
    pub fn new() -> Self {
        Self(format!("prompt_{}", Uuid::new_v4()))
    }
}

impl Default for PromptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PresetId(pub String);

impl PresetId {
    pub fn new() -> Self {
        Self(format!("preset_{}", Uuid::new_v4()))
    }
}

/// Configuration of one `{{name}}` placeholder inside a prompt.
///
/// Derived by scanning prompt content; preserved across edits keyed by
/// `name`. `name` is unique within a prompt and matches
/// `[A-Za-z_][A-Za-z0-9_]*`.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-full", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct VariableConfig {
    pub name: String,
    pub kind: VariableKind,
    #[cfg_attr(
        feature = "serde-full",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub default_value: Option<String>,
    #[cfg_attr(
        feature = "serde-full",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub select_options: Option<Vec<String>>,
    #[cfg_attr(
        feature = "serde-full",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub preset_id: Option<PresetId>,
}

impl VariableConfig {
    /// Default configuration for a newly discovered placeholder.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Text,
            default_value: None,
            select_options: None,
            preset_id: None,
        }
    }
}

#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-full", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VariableKind {
    Text,
    Textarea,
    Select,
    Exclude,
    Preset,
}

impl Default for VariableKind {
    fn default() -> Self {
        VariableKind::Text
    }
}

/// One stored prompt, the data contract shared with the persistence
/// collaborator. The core never assumes anything about the storage medium.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-full", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct PromptEntry {
    pub id: PromptId,
    pub name: String,
    pub content: String,
    #[cfg_attr(feature = "serde-full", serde(default))]
    pub variables: Vec<VariableConfig>,
    #[cfg_attr(feature = "serde-full", serde(default))]
    pub execution_count: u32,
    #[cfg_attr(
        feature = "serde-full",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub last_executed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[cfg_attr(feature = "serde-full", serde(default))]
    pub pinned: bool,
}

impl PromptEntry {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: PromptId::new(),
            name: name.into(),
            content: content.into(),
            variables: Vec::new(),
            execution_count: 0,
            last_executed_at: None,
            created_at: Utc::now(),
            pinned: false,
        }
    }
}

/// Key event as observed at the host-page boundary. Field names follow the
/// DOM `KeyboardEvent` wire format.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyEvent {
    pub key: String,
    pub code: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// True while an IME composition session is active.
    pub is_composing: bool,
}

impl KeyEvent {
    pub fn of(key: &str) -> Self {
        Self {
            key: key.to_string(),
            code: key.to_string(),
            ..Self::default()
        }
    }

    /// Bare Enter: no modifier held and no IME composition in progress.
    pub fn is_plain_enter(&self) -> bool {
        self.key == "Enter"
            && !self.shift
            && !self.ctrl
            && !self.alt
            && !self.meta
            && !self.is_composing
    }
}

/// How text is written into a host page's editable surface.
///
/// `Modern` sets the content property directly and dispatches a synthetic
/// input event. `Legacy` goes through the browser's insert-text command so
/// hosts whose frameworks revert direct writes observe the change on their
/// native input path. Chosen per adapter at configuration time, never
/// probed at runtime.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-full", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InsertionMode {
    Modern,
    Legacy,
}
