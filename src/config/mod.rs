//! Configuration model for flowgen.
//!
//! This module defines the Config struct that represents `flowgen.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;


pub use model::{CONFIG_FILE_NAME, Config, default_template_globs};
