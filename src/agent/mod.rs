//! Agent configuration for generated workflows.
//!
//! - **Config**: the serializable [`AgentConfig`] shape
//! - **Generator**: role sets per focus area and sync points from checkpoints
//!
//! The focus area in a workflow's metadata picks four agents; each rapid
//! iteration checkpoint becomes a review where all of them meet.

mod config;
mod generator;

#[cfg(test)]
mod tests;

pub use config::{
    AgentConfig, AgentRole, Coordination, DEFAULT_RETRY_COUNT, DEFAULT_TIMEOUT_SECONDS, Execution,
    Priority, SyncPoint,
};
pub use generator::{RoleSpec, generate_agent_config, generate_agent_config_with, role_set};
