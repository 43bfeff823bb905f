//! Flowgen: template-driven generation of rapid-iteration workflow plans.
//!
//! The pipeline:
//!
//! 1. [`template::TemplateStore`] loads JSON/YAML templates and generates
//!    workflow documents by substituting `{{name}}` placeholders.
//! 2. [`validate::validate_workflow`] checks a document's structure and
//!    [`validate::validate_checkpoint_timing`] its checkpoint order.
//! 3. [`schedule`] derives feedback checkpoints and sprint breakdowns.
//! 4. [`agent::generate_agent_config`] turns a document into a role-based
//!    agent configuration.
//!
//! ```
//! use flowgen::agent::generate_agent_config;
//! use flowgen::schedule::{attach_checkpoints, generate_feedback_loops};
//! use flowgen::template::{TemplateStore, vars};
//! use flowgen::validate::validate_workflow;
//! use serde_json::json;
//!
//! let mut store = TemplateStore::new();
//! store.insert("rapid", json!({
//!     "metadata": {"template_name": "rapid", "focus_area": "{{focus}}"},
//!     "sections": {}
//! }));
//!
//! let mut workflow = store.generate("rapid", &vars([("focus", "product")]))?;
//! assert!(validate_workflow(&workflow).valid);
//!
//! attach_checkpoints(&mut workflow, &generate_feedback_loops("product", 10));
//! let config = generate_agent_config(&workflow);
//! assert_eq!(config.coordination.sync_points.len(), 5);
//! # Ok::<(), flowgen::error::FlowgenError>(())
//! ```

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod focus;
pub mod schedule;
pub mod template;
pub mod validate;
