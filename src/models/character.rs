//! Character and persona data models
//!
//! Input objects handed to the prompt builder by the surrounding
//! application, which owns their storage and editing.

use serde::{Deserialize, Serialize};

/// A fictional character the user chats with
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Character {
    /// Character name
    pub name: String,
    /// Personality description
    #[serde(default)]
    pub personality: String,
    /// Backstory
    #[serde(default)]
    pub backstory: String,
    /// Things the character should remember across chats
    #[serde(default)]
    pub memories: Vec<String>,
}

/// The user's persona presented to the character
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Persona {
    /// Persona name
    pub name: String,
    /// Age (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Background (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Backstory (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backstory: Option<String>,
    /// Anything else the character should know (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}
