//! Command implementations for flowgen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the file helpers they share.

mod agents;
mod generate;
mod schedule;
mod templates;
mod validate_cmd;

use crate::cli::Command;
use crate::config::Config;
use crate::error::{FlowgenError, Result};
use crate::template::{FileSource, TemplateSource};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args, config),
        Command::Validate(args) => validate_cmd::cmd_validate(args),
        Command::Feedback(args) => schedule::cmd_feedback(args, config),
        Command::Sprints(args) => schedule::cmd_sprints(args, config),
        Command::Agents(args) => agents::cmd_agents(args, config),
        Command::Templates(args) => templates::cmd_templates(args, config),
    }
}

/// Read a workflow document from a JSON or YAML file.
pub(crate) fn read_document(path: &Path) -> Result<Value> {
    let identifier = path.to_str().ok_or_else(|| {
        FlowgenError::UserError(format!("path is not valid UTF-8: '{}'", path.display()))
    })?;

    FileSource::new()
        .fetch(identifier)
        .map_err(|e| FlowgenError::UserError(e.to_string()))
}

/// Render a value as pretty JSON.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| FlowgenError::UserError(format!("failed to serialize output: {}", e)))
}
