//! Tests for agent config generation.

use super::*;
use crate::focus::FocusArea;
use crate::schedule::{attach_checkpoints, generate_feedback_loops};
use serde_json::json;

#[test]
fn test_technical_roles() {
    let config = generate_agent_config(&json!({"metadata": {"focus_area": "technical"}}));

    let names: Vec<&str> = config.agents.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["architect", "developer", "devops", "tester"]);
    assert_eq!(
        config.agents["architect"],
        AgentRole {
            role: "system_design".to_string(),
            priority: Priority::High
        }
    );
    assert_eq!(config.agents["tester"].priority, Priority::Medium);
    assert!(config.coordination.sync_points.is_empty());
}

#[test]
fn test_product_and_research_roles() {
    let product = generate_agent_config(&json!({"metadata": {"focus_area": "product"}}));
    assert_eq!(product.agents["designer"].role, "user_experience");
    assert_eq!(product.agents["researcher"].role, "user_research");

    let research = generate_agent_config(&json!({"metadata": {"focus_area": "research"}}));
    assert_eq!(research.agents["researcher"].role, "investigation");
    assert_eq!(research.agents["writer"].priority, Priority::Medium);
}

#[test]
fn test_every_role_set_has_two_high_two_medium() {
    for focus in FocusArea::ALL {
        let set = role_set(focus);
        let high = set.iter().filter(|r| r.2 == Priority::High).count();
        assert_eq!(high, 2, "{}", focus);
    }
}

#[test]
fn test_missing_metadata_gives_base_config() {
    let config = generate_agent_config(&json!({}));
    assert_eq!(config, AgentConfig::base(Execution::default()));
    assert!(config.agents.is_empty());
    assert_eq!(config.coordination.mode, "parallel");
    assert_eq!(config.coordination.communication, "shared_context");
    assert_eq!(config.execution.timeout, 3600);
    assert_eq!(config.execution.retry_count, 3);
    assert_eq!(config.execution.checkpoint_frequency, "daily");
}

#[test]
fn test_unknown_focus_leaves_agents_empty() {
    for focus in [json!("marketing"), json!(7), json!(null)] {
        let config = generate_agent_config(&json!({"metadata": {"focus_area": focus}}));
        assert!(config.agents.is_empty());
    }
}

#[test]
fn test_sync_points_from_checkpoints() {
    let config = generate_agent_config(&json!({
        "metadata": {"focus_area": "technical"},
        "sections": {"rapid_iteration_checkpoints": ["Day 2: Architecture review", "Day 4: Code quality check"]}
    }));

    let sync_points = &config.coordination.sync_points;
    assert_eq!(sync_points.len(), 2);
    assert_eq!(sync_points[0].timing, json!("Day 2: Architecture review"));
    assert_eq!(sync_points[1].kind, "review");
    assert_eq!(
        sync_points[0].participants,
        vec!["architect", "developer", "tester", "devops"]
    );
}

#[test]
fn test_sync_points_without_agents_have_no_participants() {
    let config = generate_agent_config(&json!({
        "sections": {"rapid_iteration_checkpoints": ["Week 1"]}
    }));
    assert_eq!(config.coordination.sync_points.len(), 1);
    assert!(config.coordination.sync_points[0].participants.is_empty());
}

#[test]
fn test_non_array_checkpoints_ignored() {
    let config = generate_agent_config(&json!({
        "metadata": {"focus_area": "product"},
        "sections": {"rapid_iteration_checkpoints": "Day 3"}
    }));
    assert!(config.coordination.sync_points.is_empty());
}

#[test]
fn test_custom_execution_settings() {
    let execution = Execution {
        timeout: 600,
        retry_count: 1,
        checkpoint_frequency: "weekly".to_string(),
    };
    let config = generate_agent_config_with(&json!({}), execution.clone());
    assert_eq!(config.execution, execution);
}

#[test]
fn test_feedback_loops_feed_sync_points() {
    let mut workflow = json!({"metadata": {"focus_area": "research"}, "sections": {}});
    attach_checkpoints(&mut workflow, &generate_feedback_loops("research", 10));

    let config = generate_agent_config(&workflow);
    assert_eq!(config.coordination.sync_points.len(), 5);
    assert_eq!(
        config.coordination.sync_points[4].timing,
        json!("Day 10: Hypothesis refinement")
    );
}

#[test]
fn test_serialized_shape() {
    let config = generate_agent_config(&json!({
        "metadata": {"focus_area": "technical"},
        "sections": {"rapid_iteration_checkpoints": ["Day 2: a"]}
    }));
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(
        value["agents"]["devops"],
        json!({"role": "deployment", "priority": "medium"})
    );
    assert_eq!(
        value["coordination"]["sync_points"][0],
        json!({
            "timing": "Day 2: a",
            "type": "review",
            "participants": ["architect", "developer", "tester", "devops"]
        })
    );
    assert_eq!(
        value["execution"],
        json!({"timeout": 3600, "retry_count": 3, "checkpoint_frequency": "daily"})
    );
}

#[test]
fn test_participants_follow_role_table_and_cover_agents() {
    for focus in FocusArea::ALL {
        let config = generate_agent_config(&json!({
            "metadata": {"focus_area": focus.as_str()},
            "sections": {"rapid_iteration_checkpoints": ["Day 1: a"]}
        }));

        let participants = &config.coordination.sync_points[0].participants;
        let table_order: Vec<&str> = role_set(focus).iter().map(|r| r.0).collect();
        assert_eq!(participants, &table_order);

        let mut sorted = participants.clone();
        sorted.sort();
        let keys: Vec<String> = config.agents.keys().cloned().collect();
        assert_eq!(sorted, keys);
    }
}
