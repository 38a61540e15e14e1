//! Supporting types for the config model.

use crate::features::Feature;
use serde::{Deserialize, Serialize};

/// How the three icon files of a project are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Copy the bundled placeholder images. Missing images are skipped.
    #[default]
    Copy,
    /// Write empty files.
    Placeholder,
}

pub(super) fn default_features() -> Vec<Feature> {
    Feature::ALL.to_vec()
}
