//! Tool configuration for crx-scaffold.
//!
//! An optional YAML file (`.crx-scaffold.yaml` in the working directory, or
//! the path given with `--config`) selects which optional features are asked
//! about and how icons are produced. Unknown fields are ignored and missing
//! fields take their defaults.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
pub use types::IconMode;
