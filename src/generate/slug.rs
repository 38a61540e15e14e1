//! Directory names derived from extension names.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Lowercase `name` and replace every run of whitespace with a single hyphen.
///
/// The name is not trimmed here: leading or trailing whitespace becomes a
/// leading or trailing hyphen.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}
