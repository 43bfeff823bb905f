//! CLI argument parsing for flowgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Flowgen: template-driven rapid-iteration workflow plans.
///
/// Templates are JSON or YAML documents with `{{name}}` placeholders.
/// Generated workflows can be validated, scheduled into checkpoints and
/// sprints, and turned into role-based agent configurations.
#[derive(Parser, Debug)]
#[command(name = "flowgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file (default: ./flowgen.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for flowgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a workflow document from a named template.
    ///
    /// Prints the generated document as JSON.
    Generate(GenerateArgs),

    /// Validate a workflow document file.
    ///
    /// Checks required sections, metadata fields, phase completeness and
    /// checkpoint timing. Exits with code 2 when the document is invalid.
    Validate(ValidateArgs),

    /// Print feedback checkpoints for a focus area.
    Feedback(FeedbackArgs),

    /// Print a sprint breakdown as JSON.
    Sprints(SprintsArgs),

    /// Print the agent configuration for a workflow document.
    Agents(AgentsArgs),

    /// List templates available in the template directory.
    Templates(TemplatesArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Name of the template (file stem inside the template directory).
    pub name: String,

    /// Directory to load templates from (overrides config).
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    /// Variable to substitute, as KEY=VALUE. May be repeated.
    #[arg(long = "var", value_parser = parse_variable)]
    pub vars: Vec<(String, String)>,

    /// JSON file with an object of variables. `--var` entries take precedence.
    #[arg(long)]
    pub vars_file: Option<PathBuf>,

    /// Add feedback checkpoints for the workflow's focus area.
    #[arg(long)]
    pub checkpoints: bool,

    /// Project length in days for `--checkpoints` (overrides config).
    #[arg(long)]
    pub days: Option<u32>,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Workflow document (.json, .yaml or .yml).
    pub file: PathBuf,

    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `feedback` command.
#[derive(Parser, Debug)]
pub struct FeedbackArgs {
    /// Focus area (technical, product, research). Others use technical.
    pub focus_area: String,

    /// Project length in days (overrides config).
    #[arg(long)]
    pub days: Option<u32>,
}

/// Arguments for the `sprints` command.
#[derive(Parser, Debug)]
pub struct SprintsArgs {
    /// Total project length in days (overrides config).
    pub days: Option<u32>,

    /// Sprint length in days (overrides config).
    #[arg(short, long)]
    pub length: Option<u32>,
}

/// Arguments for the `agents` command.
#[derive(Parser, Debug)]
pub struct AgentsArgs {
    /// Workflow document (.json, .yaml or .yml).
    pub file: PathBuf,
}

/// Arguments for the `templates` command.
#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Directory to load templates from (overrides config).
    #[arg(long)]
    pub template_dir: Option<PathBuf>,
}

/// Parse a `KEY=VALUE` variable argument.
fn parse_variable(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("variable name is empty in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}
