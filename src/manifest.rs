//! The extension manifest document.
//!
//! Field order in the structs is the key order of the written file. Optional
//! parts are skipped when absent so that a project without a popup has no
//! `default_popup` key at all rather than a `null`.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Manifest format version written into every project.
pub const MANIFEST_VERSION: u32 = 3;

/// Initial version of every generated extension.
pub const INITIAL_VERSION: &str = "1.0";

/// `manifest.json` of a generated extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest_version: u32,
    pub name: String,
    pub version: String,
    pub description: String,
    pub permissions: Vec<String>,
    pub icons: IconPaths,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_scripts: Option<Vec<ContentScript>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_page: Option<String>,
}

/// Icon paths keyed by pixel size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPaths {
    #[serde(rename = "16")]
    pub size_16: String,
    #[serde(rename = "48")]
    pub size_48: String,
    #[serde(rename = "128")]
    pub size_128: String,
}

impl Default for IconPaths {
    fn default() -> Self {
        Self {
            size_16: "icons/icon16.png".to_string(),
            size_48: "icons/icon48.png".to_string(),
            size_128: "icons/icon128.png".to_string(),
        }
    }
}

/// Toolbar action. Empty unless the popup is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_popup: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub service_worker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentScript {
    pub matches: Vec<String>,
    pub css: Vec<String>,
    pub js: Vec<String>,
    pub exclude_matches: Vec<String>,
}

impl Manifest {
    /// The base manifest, before any optional feature is applied.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            manifest_version: MANIFEST_VERSION,
            name: name.into(),
            version: INITIAL_VERSION.to_string(),
            description: description.into(),
            permissions: Vec::new(),
            icons: IconPaths::default(),
            action: Action::default(),
            background: None,
            content_scripts: None,
            options_page: None,
        }
    }

    /// Pretty-printed JSON with two-space indentation and no trailing newline.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
