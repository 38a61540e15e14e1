//! Config struct definition and default implementation.

use super::types::*;
use crate::features::Feature;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a generate run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Optional features to ask about. Asked in canonical order regardless
    /// of the order listed here.
    #[serde(default = "default_features")]
    pub features: Vec<Feature>,

    /// Whether icons are copied from the bundle or written empty.
    #[serde(default)]
    pub icon_mode: IconMode,

    /// Directory holding the bundled icons. Defaults to `icons/` next to the
    /// executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons_dir: Option<PathBuf>,

    /// Directory in which the project directory is created. Defaults to the
    /// current working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            features: default_features(),
            icon_mode: IconMode::default(),
            icons_dir: None,
            output_dir: None,
        }
    }
}
