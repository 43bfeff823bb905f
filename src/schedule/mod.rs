//! Schedule derivation: feedback checkpoints and sprint breakdowns.
//!
//! Everything here is a pure function of its numeric and focus-area inputs.
//! Results describe a plan; nothing is scheduled or executed.

mod feedback;
mod sprint;


pub use feedback::{
    CHECKPOINTS_PER_PLAN, Checkpoint, DEFAULT_TOTAL_DAYS, attach_checkpoints, checkpoint_labels,
    generate_feedback_checkpoints, generate_feedback_loops,
};
pub use sprint::{
    DEFAULT_SPRINT_LENGTH, Sprint, SprintFocus, calculate_sprint_breakdown, get_sprint_focus,
};
