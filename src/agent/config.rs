//! Agent configuration schema.
//!
//! An [`AgentConfig`] serializes to:
//!
//! ```json
//! {
//!   "agents": {
//!     "architect": { "role": "system_design", "priority": "high" }
//!   },
//!   "coordination": {
//!     "mode": "parallel",
//!     "sync_points": [
//!       { "timing": "Day 2: Architecture review", "type": "review", "participants": ["architect"] }
//!     ],
//!     "communication": "shared_context"
//!   },
//!   "execution": { "timeout": 3600, "retry_count": 3, "checkpoint_frequency": "daily" }
//! }
//! ```
//!
//! `timeout` and `retry_count` describe the plan; nothing here enforces them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Default execution timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 3600;

/// Default retry count.
pub const DEFAULT_RETRY_COUNT: u32 = 3;

/// Agent priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Role assignment for one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRole {
    /// What the agent is responsible for (e.g. `system_design`).
    pub role: String,
    pub priority: Priority,
}

/// How agents work together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordination {
    pub mode: String,
    pub sync_points: Vec<SyncPoint>,
    pub communication: String,
}

impl Default for Coordination {
    fn default() -> Self {
        Self {
            mode: "parallel".to_string(),
            sync_points: Vec::new(),
            communication: "shared_context".to_string(),
        }
    }
}

/// A point where all configured agents meet to review progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPoint {
    /// The checkpoint entry this sync point was derived from, as written.
    pub timing: Value,
    #[serde(rename = "type")]
    pub kind: String,
    /// Agent names, in role-table order.
    pub participants: Vec<String>,
}

/// Execution parameters handed to whatever runs the agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Execution {
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    #[serde(default = "default_checkpoint_frequency")]
    pub checkpoint_frequency: String,
}

impl Default for Execution {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            retry_count: default_retry_count(),
            checkpoint_frequency: default_checkpoint_frequency(),
        }
    }
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_retry_count() -> u32 {
    DEFAULT_RETRY_COUNT
}

fn default_checkpoint_frequency() -> String {
    "daily".to_string()
}

/// Role-based agent configuration for a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agents keyed by name.
    ///
    /// Key order is not meaningful; serialized keys come out sorted. The
    /// coordination order of agents is the `participants` list of each
    /// sync point, which follows the focus area's role table.
    pub agents: BTreeMap<String, AgentRole>,
    pub coordination: Coordination,
    pub execution: Execution,
}

impl AgentConfig {
    /// Config with no agents and default coordination and execution.
    pub fn base(execution: Execution) -> Self {
        Self {
            agents: BTreeMap::new(),
            coordination: Coordination::default(),
            execution,
        }
    }
}
