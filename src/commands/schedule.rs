//! Implementation of the `flowgen feedback` and `flowgen sprints` commands.

use super::to_pretty_json;
use crate::cli::{FeedbackArgs, SprintsArgs};
use crate::config::Config;
use crate::error::Result;
use crate::schedule::{calculate_sprint_breakdown, generate_feedback_loops};

/// Execute the `flowgen feedback` command: one checkpoint per line.
pub fn cmd_feedback(args: FeedbackArgs, config: &Config) -> Result<()> {
    let days = args.days.unwrap_or(config.total_days);
    for checkpoint in generate_feedback_loops(&args.focus_area, days) {
        println!("{}", checkpoint);
    }
    Ok(())
}

/// Execute the `flowgen sprints` command.
pub fn cmd_sprints(args: SprintsArgs, config: &Config) -> Result<()> {
    let days = args.days.unwrap_or(config.total_days);
    let length = args.length.unwrap_or(config.sprint_length);

    let sprints = calculate_sprint_breakdown(days, length);
    println!("{}", to_pretty_json(&sprints)?);
    Ok(())
}
