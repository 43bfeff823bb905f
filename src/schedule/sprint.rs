//! Sprint breakdown over a project timeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default sprint length in days.
pub const DEFAULT_SPRINT_LENGTH: u32 = 7;

/// What a sprint concentrates on, by its position in the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintFocus {
    /// First ~30% of the project.
    Foundation,
    /// Up to ~70% of the project.
    Development,
    /// The remainder.
    Refinement,
}

impl SprintFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SprintFocus::Foundation => "foundation",
            SprintFocus::Development => "development",
            SprintFocus::Refinement => "refinement",
        }
    }
}

impl fmt::Display for SprintFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sprint of a breakdown. Days are 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    /// 1-based sprint number.
    pub sprint: u32,
    pub start_day: u32,
    pub end_day: u32,
    /// `end_day - start_day + 1`.
    pub duration: u32,
    pub focus: SprintFocus,
}

/// Focus for sprint `sprint_number` of `total_sprints`.
///
/// The ratio `sprint_number / total_sprints` selects foundation (<= 0.3),
/// development (<= 0.7) or refinement.
pub fn get_sprint_focus(sprint_number: u32, total_sprints: u32) -> SprintFocus {
    if total_sprints == 0 {
        return SprintFocus::Refinement;
    }
    let ratio = f64::from(sprint_number) / f64::from(total_sprints);

    if ratio <= 0.3 {
        SprintFocus::Foundation
    } else if ratio <= 0.7 {
        SprintFocus::Development
    } else {
        SprintFocus::Refinement
    }
}

/// Split `total_days` into consecutive sprints of `sprint_length` days.
///
/// The last sprint is shortened so it ends on `total_days`. Sprints are
/// contiguous with no gaps or overlaps. Returns an empty breakdown when either
/// argument is zero.
///
/// ```
/// use flowgen::schedule::{SprintFocus, calculate_sprint_breakdown};
///
/// let sprints = calculate_sprint_breakdown(10, 7);
/// assert_eq!(sprints.len(), 2);
/// assert_eq!((sprints[1].start_day, sprints[1].end_day), (8, 10));
/// assert_eq!(sprints[1].focus, SprintFocus::Refinement);
/// ```
pub fn calculate_sprint_breakdown(total_days: u32, sprint_length: u32) -> Vec<Sprint> {
    if sprint_length == 0 {
        tracing::debug!(total_days, "sprint length of zero yields no sprints");
        return Vec::new();
    }

    let number_of_sprints = total_days.div_ceil(sprint_length);

    (0..number_of_sprints)
        .map(|i| {
            let start_day = i * sprint_length + 1;
            let end_day = ((i + 1).saturating_mul(sprint_length)).min(total_days);
            Sprint {
                sprint: i + 1,
                start_day,
                end_day,
                duration: end_day - start_day + 1,
                focus: get_sprint_focus(i + 1, number_of_sprints),
            }
        })
        .collect()
}
