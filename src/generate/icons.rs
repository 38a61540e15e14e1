//! Icon assets of a generated project.

use crate::error::Result;
use crate::fs::ProjectFs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Icon files every project gets, matching the manifest's icon paths.
pub const ICON_FILES: [&str; 3] = ["icon16.png", "icon48.png", "icon128.png"];

/// Directory of the project that holds the icons.
pub const ICONS_DIR: &str = "icons";

/// Where icon contents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Copy same-named images from this directory.
    Bundled(PathBuf),
    /// Write the icons compiled into the binary.
    Embedded,
    /// Write empty files.
    Placeholder,
}

const EMBEDDED_ICONS: [&[u8]; 3] = [
    include_bytes!("../../assets/icons/icon16.png"),
    include_bytes!("../../assets/icons/icon48.png"),
    include_bytes!("../../assets/icons/icon128.png"),
];

/// Pick the icon source for copy mode.
///
/// A `configured` directory is always used as given. Otherwise `icons/` next
/// to the running executable is used when it exists, and the icons embedded
/// in the binary are written when it does not.
pub fn locate_icon_source(configured: Option<&Path>) -> IconSource {
    if let Some(dir) = configured {
        return IconSource::Bundled(dir.to_path_buf());
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ICONS_DIR)))
        .filter(|dir| dir.is_dir())
        .map_or(IconSource::Embedded, IconSource::Bundled)
}

/// Create `icons_dir` and fill it from `source`.
///
/// Returns the icons that could not be copied. Copy failures are not errors;
/// failing to create the directory or to write an embedded or placeholder
/// icon is.
pub(super) fn write_icons(
    fs: &impl ProjectFs,
    icons_dir: &Path,
    source: &IconSource,
) -> Result<Vec<&'static str>> {
    fs.create_dir_all(icons_dir)?;

    let mut missing = Vec::new();
    for (icon, embedded) in ICON_FILES.into_iter().zip(EMBEDDED_ICONS) {
        let target = icons_dir.join(icon);
        match source {
            IconSource::Bundled(dir) => {
                if let Err(e) = fs.copy_file(&dir.join(icon), &target) {
                    debug!(icon, error = %e, "skipping icon");
                    missing.push(icon);
                }
            }
            IconSource::Embedded => fs.write_file(&target, embedded)?,
            IconSource::Placeholder => fs.write_file(&target, b"")?,
        }
    }
    Ok(missing)
}
