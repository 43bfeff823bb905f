//! Derive an agent configuration from a workflow document.

use super::config::{AgentConfig, AgentRole, Execution, Priority, SyncPoint};
use crate::focus::FocusArea;
use serde_json::Value;

/// Agent name, role, and priority for one member of a role set.
pub type RoleSpec = (&'static str, &'static str, Priority);

/// The four agents assigned to a focus area, in coordination order.
pub fn role_set(focus: FocusArea) -> [RoleSpec; 4] {
    match focus {
        FocusArea::Technical => [
            ("architect", "system_design", Priority::High),
            ("developer", "implementation", Priority::High),
            ("tester", "quality_assurance", Priority::Medium),
            ("devops", "deployment", Priority::Medium),
        ],
        FocusArea::Product => [
            ("product_manager", "requirements", Priority::High),
            ("designer", "user_experience", Priority::High),
            ("researcher", "user_research", Priority::Medium),
            ("analyst", "metrics", Priority::Medium),
        ],
        FocusArea::Research => [
            ("researcher", "investigation", Priority::High),
            ("analyst", "data_analysis", Priority::High),
            ("reviewer", "peer_review", Priority::Medium),
            ("writer", "documentation", Priority::Medium),
        ],
    }
}

/// Generate an agent configuration using the default execution settings.
///
/// See [`generate_agent_config_with`].
///
/// ```
/// use flowgen::agent::generate_agent_config;
/// use serde_json::json;
///
/// let config = generate_agent_config(&json!({"metadata": {"focus_area": "technical"}}));
/// assert_eq!(config.agents.len(), 4);
/// assert!(config.coordination.sync_points.is_empty());
/// ```
pub fn generate_agent_config(workflow: &Value) -> AgentConfig {
    generate_agent_config_with(workflow, Execution::default())
}

/// Generate an agent configuration for `workflow`.
///
/// - `metadata.focus_area` selects the role set; a missing or unrecognised
///   focus area leaves `agents` empty.
/// - Each entry of `sections.rapid_iteration_checkpoints` becomes a review
///   sync point attended by every configured agent.
pub fn generate_agent_config_with(workflow: &Value, execution: Execution) -> AgentConfig {
    let mut config = AgentConfig::base(execution);

    let focus = workflow
        .pointer("/metadata/focus_area")
        .and_then(Value::as_str)
        .and_then(FocusArea::parse);

    let mut participants = Vec::new();
    if let Some(focus) = focus {
        for (name, role, priority) in role_set(focus) {
            config.agents.insert(
                name.to_string(),
                AgentRole {
                    role: role.to_string(),
                    priority,
                },
            );
            participants.push(name.to_string());
        }
    }

    match workflow.pointer("/sections/rapid_iteration_checkpoints") {
        Some(Value::Array(checkpoints)) => {
            config.coordination.sync_points = checkpoints
                .iter()
                .map(|checkpoint| SyncPoint {
                    timing: checkpoint.clone(),
                    kind: "review".to_string(),
                    participants: participants.clone(),
                })
                .collect();
        }
        Some(Value::Null) | None => {}
        Some(_) => {
            tracing::warn!("rapid_iteration_checkpoints is not an array; no sync points derived");
        }
    }

    tracing::debug!(
        focus = ?focus,
        agents = config.agents.len(),
        sync_points = config.coordination.sync_points.len(),
        "generated agent config"
    );
    config
}
