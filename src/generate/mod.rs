//! Project generation.
//!
//! Turns a completed [`ConfigRecord`] into a project directory:
//!
//! 1. `<output>/<slug>/` is created (idempotent)
//! 2. `manifest.json` is written with one patch per enabled feature
//! 3. `icons/` is filled from the bundle, or with empty placeholders
//! 4. Each enabled feature writes its files
//!
//! Directory and file write failures abort generation and leave whatever was
//! already written in place. Icons that cannot be copied are skipped.

mod icons;
mod slug;


use crate::error::{CrxError, Result};
use crate::fs::ProjectFs;
use crate::manifest::Manifest;
use crate::prompt::ConfigRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use icons::{ICON_FILES, ICONS_DIR, IconSource, locate_icon_source};
pub use slug::slugify;

/// File name of the manifest in the project root.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Where and how a project is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory in which the project directory is created.
    pub output_dir: PathBuf,
    pub icon_source: IconSource,
}

/// What a generate run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    /// The project directory.
    pub root: PathBuf,
    /// Files written, relative to `root`, in write order. Includes icons.
    pub files: Vec<PathBuf>,
    /// Icons that could not be copied from the bundle.
    pub missing_icons: Vec<&'static str>,
}

/// Build the manifest for `record`.
pub fn build_manifest(record: &ConfigRecord) -> Manifest {
    let mut manifest = Manifest::new(record.name(), record.description());
    for feature in record.enabled_features() {
        feature.apply_to_manifest(&mut manifest);
    }
    manifest
}

/// Generate the project described by `record`.
pub fn generate(
    record: ConfigRecord,
    fs: &impl ProjectFs,
    options: &GenerateOptions,
) -> Result<GeneratedProject> {
    let name = record.name();
    if name.trim().is_empty() {
        return Err(CrxError::ConfigError(
            "extension name is required".to_string(),
        ));
    }

    let root = options.output_dir.join(slugify(name));
    debug!(root = %root.display(), "generating project");
    fs.create_dir_all(&root)?;

    let mut files = Vec::new();

    let manifest = build_manifest(&record).to_json_pretty()?;
    write(fs, &root, Path::new(MANIFEST_FILE), manifest.as_bytes(), &mut files)?;

    let missing_icons = icons::write_icons(fs, &root.join(ICONS_DIR), &options.icon_source)?;
    files.extend(
        ICON_FILES
            .into_iter()
            .filter(|icon| !missing_icons.contains(icon))
            .map(|icon| Path::new(ICONS_DIR).join(icon)),
    );

    for feature in record.enabled_features() {
        for file in feature.files(name)? {
            write(
                fs,
                &root,
                Path::new(file.path),
                file.contents.as_bytes(),
                &mut files,
            )?;
        }
    }

    Ok(GeneratedProject {
        root,
        files,
        missing_icons,
    })
}

fn write(
    fs: &impl ProjectFs,
    root: &Path,
    relative: &Path,
    contents: &[u8],
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    fs.write_file(&root.join(relative), contents)?;
    debug!(file = %relative.display(), "wrote file");
    written.push(relative.to_path_buf());
    Ok(())
}
