//! CLI argument parsing for crx-scaffold.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// crx-scaffold: interactive scaffolding for browser extension projects.
///
/// Asks for the extension name, a description and which optional parts to
/// include, then writes a ready-to-load project directory named after the
/// extension.
#[derive(Parser, Debug)]
#[command(name = "crx-scaffold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for crx-scaffold.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new extension project interactively.
    ///
    /// Prompts for the name, description, and optional parts (background
    /// service worker, content scripts, popup, options page), then writes
    /// manifest.json, icons, and the selected files.
    Generate(GenerateArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    /// Tool config file (defaults to ./.crx-scaffold.yaml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory in which the project directory is created.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory holding icon16.png, icon48.png and icon128.png to copy.
    #[arg(long)]
    pub icons: Option<PathBuf>,

    /// Write empty icon placeholders instead of copying bundled icons.
    #[arg(long)]
    pub placeholder_icons: bool,

    /// Do not ask about (or generate) content scripts.
    #[arg(long)]
    pub no_content_scripts: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
