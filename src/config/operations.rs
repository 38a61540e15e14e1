//! Config loading, validation, and command-line overrides.

use super::model::Config;
use super::types::IconMode;
use crate::cli::GenerateArgs;
use crate::error::{CrxError, Result};
use crate::features::Feature;
use std::path::Path;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".crx-scaffold.yaml";

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CrxError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string. Unknown fields are ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CrxError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    #[cfg(test)]
    pub(crate) fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CrxError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Resolve the config for a run started in `cwd`.
    ///
    /// An explicit path must exist. Otherwise `cwd/.crx-scaffold.yaml` is used
    /// when present, and the defaults when not.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let default_path = cwd.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "loading config");
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `features` entries must be unique
    pub fn validate(&self) -> Result<()> {
        for (i, feature) in self.features.iter().enumerate() {
            if self.features[..i].contains(feature) {
                return Err(CrxError::ConfigError(format!(
                    "config validation failed: feature '{}' is listed more than once",
                    feature
                )));
            }
        }
        Ok(())
    }

    /// Apply command-line flags on top of the file config.
    pub fn apply_args(&mut self, args: &GenerateArgs) {
        if let Some(output) = &args.output {
            self.output_dir = Some(output.clone());
        }
        if let Some(icons) = &args.icons {
            self.icons_dir = Some(icons.clone());
        }
        if args.placeholder_icons {
            self.icon_mode = IconMode::Placeholder;
        }
        if args.no_content_scripts {
            self.features.retain(|f| *f != Feature::ContentScripts);
        }
    }

    /// Active features in canonical order.
    pub fn active_features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|feature| self.features.contains(feature))
            .collect()
    }
}
