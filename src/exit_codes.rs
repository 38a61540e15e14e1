//! Exit code constants for the crx-scaffold CLI.
//!
//! - 0: Success (including a run aborted for a missing extension name)
//! - 1: Runtime failure (bad config, unreadable input, a file that could not be written)
//! - 2: Usage error (missing or unknown sub-command, reported by clap)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Runtime failure: invalid configuration, an unreadable input stream, or a
/// project directory or file that could not be written.
pub const FAILURE: i32 = 1;

/// Usage error: clap exits with this code on a missing or unknown sub-command.
pub const USAGE_ERROR: i32 = 2;
