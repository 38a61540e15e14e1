//! Filesystem capability for project generation.
//!
//! The generator only needs three operations: create a directory tree, write
//! a file, and copy a file. They are expressed as the [`ProjectFs`] trait so
//! the generator can be driven against the local disk or a test double.

pub mod atomic;
mod project_fs;

pub use atomic::atomic_write;
pub use project_fs::{LocalFs, ProjectFs};
