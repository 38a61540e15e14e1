//! Implementation of the `crx-scaffold generate` command.
//!
//! # What `crx-scaffold generate` does
//!
//! 1. Loads the tool config (`--config`, `./.crx-scaffold.yaml`, or defaults)
//!    and applies command-line overrides
//! 2. Asks the name, description and one yes/no question per active feature
//! 3. Stops with a warning if the name is blank; nothing is written
//! 4. Otherwise generates `<output>/<slug>/` and reports success


use crate::cli::GenerateArgs;
use crate::config::{Config, IconMode};
use crate::error::{CrxError, Result};
use crate::fs::LocalFs;
use crate::generate::{GenerateOptions, GeneratedProject, IconSource, generate, locate_icon_source};
use crate::prompt::{Abort, LineInput, Outcome, Question, StdioInput, run_sequence};
use std::path::Path;
use tracing::info;

/// How a generate run ended.
#[derive(Debug)]
pub(crate) enum RunResult {
    Generated(GeneratedProject),
    Aborted(Abort),
}

/// Execute the `crx-scaffold generate` command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        CrxError::ConfigError(format!("failed to determine current directory: {}", e))
    })?;

    let mut config = Config::discover(args.config.as_deref(), &cwd)?;
    config.apply_args(&args);

    let mut input = StdioInput::stdio();
    match run_generate(&config, &cwd, &mut input)? {
        RunResult::Aborted(reason) => {
            println!("\n{}\n", reason);
        }
        RunResult::Generated(project) => {
            info!(
                root = %project.root.display(),
                files = project.files.len(),
                missing_icons = project.missing_icons.len(),
                "project generated"
            );
            println!("\nExtension generated successfully!");
        }
    }

    Ok(())
}

/// Ask the questions on `input` and generate the project relative to `cwd`.
pub(crate) fn run_generate(
    config: &Config,
    cwd: &Path,
    input: &mut impl LineInput,
) -> Result<RunResult> {
    let questions = Question::sequence(&config.active_features());

    let record = match run_sequence(&questions, input)? {
        Outcome::Completed(record) => record,
        Outcome::Aborted(reason) => return Ok(RunResult::Aborted(reason)),
    };

    let options = generate_options(config, cwd);
    let project = generate(record, &LocalFs, &options)?;
    Ok(RunResult::Generated(project))
}

fn generate_options(config: &Config, cwd: &Path) -> GenerateOptions {
    let output_dir = match &config.output_dir {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    };

    let icon_source = match config.icon_mode {
        IconMode::Copy => {
            let configured = config.icons_dir.as_ref().map(|dir| cwd.join(dir));
            locate_icon_source(configured.as_deref())
        }
        IconMode::Placeholder => IconSource::Placeholder,
    };

    GenerateOptions {
        output_dir,
        icon_source,
    }
}
