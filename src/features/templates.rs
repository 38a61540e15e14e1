//! File templates for each optional feature.

use super::Feature;
use crate::error::{CrxError, Result};
use crate::template::render_template;
use std::collections::HashMap;

pub(super) const BACKGROUND_JS: &str = "background.js";
pub(super) const CONTENT_JS: &str = "content.js";
pub(super) const CONTENT_CSS: &str = "content.css";
pub(super) const POPUP_HTML: &str = POPUP.html;
pub(super) const OPTIONS_HTML: &str = OPTIONS.html;

/// File names of an extension page and the word used in its title.
struct Page {
    title: &'static str,
    html: &'static str,
    css: &'static str,
    js: &'static str,
}

const POPUP: Page = Page {
    title: "Popup",
    html: "popup.html",
    css: "popup.css",
    js: "popup.js",
};

const OPTIONS: Page = Page {
    title: "Options",
    html: "options.html",
    css: "options.css",
    js: "options.js",
};

const PAGE_HTML: &str = r#"
<!DOCTYPE html>
<html>
<head>
  <title>{name} {page}</title>
  <link rel="stylesheet" type="text/css" href="{css}">
</head>
<body>
  <h1>{name} {page}</h1>
  <script src="{js}"></script>
</body>
</html>"#;

const PAGE_CSS: &str = "body {{ font-family: Arial, sans-serif; }}";

const PAGE_JS: &str = "console.log('{name} {page} script loaded');";

/// A file to write, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub path: &'static str,
    pub contents: String,
}

impl ProjectFile {
    fn new(path: &'static str, contents: impl Into<String>) -> Self {
        Self {
            path,
            contents: contents.into(),
        }
    }
}

pub(super) fn render(feature: Feature, name: &str) -> Result<Vec<ProjectFile>> {
    let files = match feature {
        Feature::Background => vec![ProjectFile::new(
            BACKGROUND_JS,
            "// Background service worker",
        )],
        Feature::ContentScripts => vec![
            ProjectFile::new(CONTENT_JS, "// Content script JS"),
            ProjectFile::new(CONTENT_CSS, "/* Content script CSS */"),
        ],
        Feature::Popup => page_files(name, &POPUP)?,
        Feature::Options => page_files(name, &OPTIONS)?,
    };
    Ok(files)
}

/// The html/css/js triple of an extension page.
fn page_files(name: &str, page: &Page) -> Result<Vec<ProjectFile>> {
    let vars = HashMap::from([
        ("name", name),
        ("page", page.title),
        ("css", page.css),
        ("js", page.js),
    ]);

    [(page.html, PAGE_HTML), (page.css, PAGE_CSS), (page.js, PAGE_JS)]
        .into_iter()
        .map(|(path, template)| -> Result<ProjectFile> {
            let contents =
                render_template(template, &vars).map_err(|e| CrxError::TemplateError {
                    file: path.to_string(),
                    message: e.to_string(),
                })?;
            Ok(ProjectFile::new(path, contents))
        })
        .collect()
}
