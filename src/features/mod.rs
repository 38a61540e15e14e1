//! Optional extension features.
//!
//! Each feature is a yes/no question plus everything that answer controls:
//! the manifest fields it adds and the files it writes. Keeping the three
//! together means a flag can never enable a file group without its manifest
//! entry, or the reverse.

mod templates;

use crate::error::Result;
use crate::manifest::{Background, ContentScript, Manifest};
use crate::prompt::{Question, QuestionKey};
use serde::{Deserialize, Serialize};

pub use templates::ProjectFile;

/// An optional, independently toggleable part of a generated extension.
///
/// Variant order is the order questions are asked and files are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Background,
    ContentScripts,
    Popup,
    Options,
}

impl Feature {
    /// Every feature, in canonical order.
    pub const ALL: [Feature; 4] = [
        Feature::Background,
        Feature::ContentScripts,
        Feature::Popup,
        Feature::Options,
    ];

    /// Identifier of this feature's question in the configuration record.
    pub fn key(self) -> &'static str {
        match self {
            Feature::Background => "background",
            Feature::ContentScripts => "contentScripts",
            Feature::Popup => "popup",
            Feature::Options => "options",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Feature::Background => "Include background service worker? (y/n): ",
            Feature::ContentScripts => "Include content scripts? (y/n): ",
            Feature::Popup => "Include popup? (y/n): ",
            Feature::Options => "Include options page? (y/n): ",
        }
    }

    pub fn question(self) -> Question {
        Question::new(QuestionKey::Feature(self), self.prompt())
    }

    /// Add this feature's fields to `manifest`.
    pub fn apply_to_manifest(self, manifest: &mut Manifest) {
        match self {
            Feature::Background => {
                manifest.background = Some(Background {
                    service_worker: templates::BACKGROUND_JS.to_string(),
                });
            }
            Feature::ContentScripts => {
                manifest
                    .content_scripts
                    .get_or_insert_with(Vec::new)
                    .push(ContentScript {
                        matches: vec!["<all_urls>".to_string()],
                        css: vec![templates::CONTENT_CSS.to_string()],
                        js: vec![templates::CONTENT_JS.to_string()],
                        exclude_matches: Vec::new(),
                    });
            }
            Feature::Popup => {
                manifest.action.default_popup = Some(templates::POPUP_HTML.to_string());
            }
            Feature::Options => {
                manifest.options_page = Some(templates::OPTIONS_HTML.to_string());
            }
        }
    }

    /// Files this feature contributes, relative to the project root.
    ///
    /// `name` is the extension's display name, interpolated verbatim.
    pub fn files(self, name: &str) -> Result<Vec<ProjectFile>> {
        templates::render(self, name)
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
