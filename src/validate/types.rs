//! Result type for workflow validation.

use serde::{Deserialize, Serialize};

/// Findings from validating a workflow document.
///
/// Errors make the document invalid; warnings are informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `true` when `errors` is empty.
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Build a report, deriving `valid` from the errors.
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Format the report for terminal output.
    ///
    /// ```text
    /// Workflow is invalid (1 error, 2 warnings)
    ///
    /// Errors:
    ///   - Missing required section: sections
    ///
    /// Warnings:
    ///   - Missing metadata field: template_name
    ///   - Missing metadata field: focus_area
    /// ```
    pub fn format_report(&self) -> String {
        let status = if self.valid { "valid" } else { "invalid" };
        let mut msg = format!(
            "Workflow is {} ({} {}, {} {})\n",
            status,
            self.errors.len(),
            plural(self.errors.len(), "error"),
            self.warnings.len(),
            plural(self.warnings.len(), "warning"),
        );

        if !self.errors.is_empty() {
            msg.push_str("\nErrors:\n");
            for error in &self.errors {
                msg.push_str(&format!("  - {}\n", error));
            }
        }

        if !self.warnings.is_empty() {
            msg.push_str("\nWarnings:\n");
            for warning in &self.warnings {
                msg.push_str(&format!("  - {}\n", warning));
            }
        }

        msg
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
