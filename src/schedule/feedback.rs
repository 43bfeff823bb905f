//! Feedback checkpoint generation.

use crate::focus::FocusArea;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Number of checkpoints in every focus area's label list.
pub const CHECKPOINTS_PER_PLAN: usize = 5;

/// Default project length in days.
pub const DEFAULT_TOTAL_DAYS: u32 = 14;

/// A review point `day` days into the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub day: u32,
    pub label: String,
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", self.day, self.label)
    }
}

/// Checkpoint labels for a focus area, in schedule order.
pub fn checkpoint_labels(focus: FocusArea) -> [&'static str; CHECKPOINTS_PER_PLAN] {
    match focus {
        FocusArea::Technical => [
            "Architecture review",
            "Code quality check",
            "Integration testing",
            "Performance validation",
            "Security audit",
        ],
        FocusArea::Product => [
            "User feedback collection",
            "Feature validation",
            "Usability testing",
            "Market response analysis",
            "Stakeholder review",
        ],
        FocusArea::Research => [
            "Methodology validation",
            "Preliminary results review",
            "Peer feedback session",
            "Data quality check",
            "Hypothesis refinement",
        ],
    }
}

/// Spread the focus area's checkpoints evenly across `total_days`.
///
/// The interval is `max(1, total_days / 5)`; checkpoint `i` lands on day
/// `(i + 1) * interval`, capped at `total_days`, and is emitted only while
/// `i * interval < total_days`. For any `total_days >= 1` this yields strictly
/// increasing days, so the cap never produces duplicates.
pub fn generate_feedback_checkpoints(focus: FocusArea, total_days: u32) -> Vec<Checkpoint> {
    let interval = (total_days / CHECKPOINTS_PER_PLAN as u32).max(1);

    checkpoint_labels(focus)
        .iter()
        .zip(0u32..)
        .take_while(|&(_, i)| i.saturating_mul(interval) < total_days)
        .map(|(label, i)| Checkpoint {
            day: i.saturating_add(1).saturating_mul(interval).min(total_days),
            label: (*label).to_string(),
        })
        .collect()
}

/// Feedback checkpoints as `"Day <n>: <label>"` strings.
///
/// Unrecognised focus areas use the technical checkpoint list.
///
/// ```
/// use flowgen::schedule::generate_feedback_loops;
///
/// let loops = generate_feedback_loops("product", 10);
/// assert_eq!(loops[0], "Day 2: User feedback collection");
/// assert_eq!(loops.len(), 5);
/// ```
pub fn generate_feedback_loops(focus_area: &str, total_days: u32) -> Vec<String> {
    let focus = FocusArea::parse(focus_area).unwrap_or_else(|| {
        tracing::debug!(focus_area, "unknown focus area, using technical checkpoints");
        FocusArea::Technical
    });

    generate_feedback_checkpoints(focus, total_days)
        .iter()
        .map(Checkpoint::to_string)
        .collect()
}

/// Store checkpoints at `sections.rapid_iteration_checkpoints`.
///
/// Creates `sections` when it is missing or not an object. Does nothing if
/// `workflow` itself is not an object.
pub fn attach_checkpoints(workflow: &mut Value, checkpoints: &[String]) {
    let Some(root) = workflow.as_object_mut() else {
        tracing::warn!("cannot attach checkpoints to a non-object workflow");
        return;
    };

    let sections = root
        .entry("sections")
        .or_insert_with(|| Value::Object(Default::default()));
    if !sections.is_object() {
        *sections = Value::Object(Default::default());
    }

    if let Value::Object(map) = sections {
        map.insert(
            "rapid_iteration_checkpoints".to_string(),
            Value::Array(checkpoints.iter().cloned().map(Value::String).collect()),
        );
    }
}
