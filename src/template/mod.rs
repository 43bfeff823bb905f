//! Template loading and workflow generation.
//!
//! This module provides:
//!
//! - **Substitution**: `{{name}}` placeholder replacement over JSON values
//! - **Sources**: where raw templates come from (files, memory)
//! - **Store**: the named registry that generates fresh workflow documents
//!
//! # Template Syntax
//!
//! Any string inside a template may reference variables:
//!
//! ```text
//! {
//!   "metadata": { "template_name": "{{name}}", "focus_area": "{{focus}}" },
//!   "sections": { "goal": "Ship {{feature}} in {{days}} days" }
//! }
//! ```
//!
//! Unknown variables are left in place.

mod source;
mod store;
mod substitute;


pub use source::{FileSource, MemorySource, SourceError, TemplateFormat, TemplateSource};
pub use store::TemplateStore;
pub use substitute::{
    Variables, placeholders, substitute, substitute_str, unresolved, variables_from_json, vars,
};
