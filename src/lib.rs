//! crx-scaffold: interactive scaffolding for browser extension projects.
//!
//! A run is two stages. The [`prompt`] sequencer asks a fixed list of
//! questions and builds a [`prompt::ConfigRecord`]; the [`generate`] stage
//! turns that record into a project directory holding `manifest.json`,
//! icons, and the files of each enabled [`features::Feature`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod features;
pub mod fs;
pub mod generate;
pub mod manifest;
pub mod prompt;
pub mod telemetry;
pub mod template;

#[cfg(test)]
mod test_support;
