//! Checkpoint timing checks.
//!
//! Checkpoints are free-text labels such as `"Day 3: Architecture review"` or
//! `"End of Week 2 demo"`. The first `Day <n>` marker gives an offset of `n`
//! days; failing that, the first `Week <n>` marker gives `7 * n` days.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static DAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Day (\d+)").expect("day marker pattern is a valid regex"));

static WEEK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Week (\d+)").expect("week marker pattern is a valid regex"));

/// Extract the day offset a checkpoint refers to.
///
/// Returns `None` when the text has no temporal marker, or when the number
/// does not fit in a `u64` day count.
///
/// ```
/// use flowgen::validate::parse_checkpoint_offset;
///
/// assert_eq!(parse_checkpoint_offset("Day 3: Review"), Some(3));
/// assert_eq!(parse_checkpoint_offset("Week 2 demo"), Some(14));
/// assert_eq!(parse_checkpoint_offset("Retrospective"), None);
/// ```
pub fn parse_checkpoint_offset(checkpoint: &str) -> Option<u64> {
    if let Some(caps) = DAY_MARKER.captures(checkpoint) {
        return caps[1].parse().ok();
    }
    let caps = WEEK_MARKER.captures(checkpoint)?;
    caps[1].parse::<u64>().ok()?.checked_mul(7)
}

/// Check that the timed checkpoints in a list are strictly increasing.
///
/// Checkpoints without a marker, and those at offset zero, are ignored. The
/// remaining offsets must strictly increase in list order.
pub fn checkpoints_in_order<S: AsRef<str>>(checkpoints: &[S]) -> bool {
    offsets_increasing(
        checkpoints
            .iter()
            .filter_map(|c| parse_checkpoint_offset(c.as_ref())),
    )
}

/// Validate checkpoint timing on an arbitrary JSON value.
///
/// Returns `false` if `checkpoints` is not an array. Non-string entries carry
/// no marker and are ignored like untimed strings.
pub fn validate_checkpoint_timing(checkpoints: &Value) -> bool {
    let Some(items) = checkpoints.as_array() else {
        return false;
    };

    offsets_increasing(
        items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(parse_checkpoint_offset),
    )
}

fn offsets_increasing(offsets: impl Iterator<Item = u64>) -> bool {
    let mut previous: Option<u64> = None;
    for offset in offsets.filter(|&d| d > 0) {
        if previous.is_some_and(|p| offset <= p) {
            return false;
        }
        previous = Some(offset);
    }
    true
}
