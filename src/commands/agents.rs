//! Implementation of the `flowgen agents` command.

use super::{read_document, to_pretty_json};
use crate::agent::generate_agent_config_with;
use crate::cli::AgentsArgs;
use crate::config::Config;
use crate::error::Result;

/// Execute the `flowgen agents` command.
pub fn cmd_agents(args: AgentsArgs, config: &Config) -> Result<()> {
    let workflow = read_document(&args.file)?;
    let agent_config = generate_agent_config_with(&workflow, config.execution.clone());

    if agent_config.agents.is_empty() {
        eprintln!("Warning: no recognised focus_area in metadata; no agents assigned");
    }

    println!("{}", to_pretty_json(&agent_config)?);
    Ok(())
}
