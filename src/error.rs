//! Error types for flowgen.
//!
//! Uses thiserror for derive macros. Structural problems in a workflow
//! document are not errors; they are reported as data by
//! [`crate::validate::validate_workflow`].

use crate::exit_codes;
use thiserror::Error;

/// Main error type for flowgen operations.
#[derive(Error, Debug)]
pub enum FlowgenError {
    /// The template source could not supply the requested template.
    #[error("Failed to load template {name}: {cause}")]
    Load {
        /// Name the template was being registered under.
        name: String,
        /// Message of the underlying failure.
        cause: String,
    },

    /// `generate` was called with a name nothing was registered under.
    #[error("Template {0} not found")]
    NotFound(String),

    /// User provided invalid arguments, config, or input files.
    #[error("{0}")]
    UserError(String),

    /// A workflow document failed validation.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl FlowgenError {
    /// Build a load error from any displayable cause.
    pub fn load(name: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        FlowgenError::Load {
            name: name.into(),
            cause: cause.to_string(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FlowgenError::Load { .. } => exit_codes::LOAD_FAILURE,
            FlowgenError::NotFound(_) => exit_codes::LOAD_FAILURE,
            FlowgenError::UserError(_) => exit_codes::USER_ERROR,
            FlowgenError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for flowgen operations.
pub type Result<T> = std::result::Result<T, FlowgenError>;
