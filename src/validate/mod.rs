//! Validation of generated workflow documents.
//!
//! This module provides deterministic, hardcoded checks:
//! - Structure: required sections, metadata fields, phase completeness
//! - Timing: checkpoint day/week markers must strictly increase
//!
//! Findings are returned as data, never as errors; callers decide what an
//! invalid document means for them.

mod timing;
mod types;
mod workflow;


pub use timing::{checkpoints_in_order, parse_checkpoint_offset, validate_checkpoint_timing};
pub use types::ValidationReport;
pub use workflow::{REQUIRED_METADATA, REQUIRED_SECTIONS, validate_workflow};
