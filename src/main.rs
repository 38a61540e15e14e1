//! Entry point for the `crx-scaffold` CLI. It parses arguments, dispatches to
//! the command handler, and maps errors to exit codes.

use crx_scaffold::cli::Cli;
use crx_scaffold::{commands, exit_codes, telemetry};
use std::process::ExitCode;

fn main() -> ExitCode {
    telemetry::init_telemetry();
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            tracing::debug!(error = ?err, "command failed");

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
