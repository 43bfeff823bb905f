//! Structural checks for generated workflow documents.

use super::types::ValidationReport;
use serde_json::Value;

/// Top-level keys every workflow document must carry.
pub const REQUIRED_SECTIONS: [&str; 2] = ["metadata", "sections"];

/// Metadata fields that should be present; their absence is a warning.
pub const REQUIRED_METADATA: [&str; 2] = ["template_name", "focus_area"];

/// Validate the structure of a workflow document.
///
/// Checks, all evaluated independently:
/// 1. `metadata` and `sections` exist at the top level (errors)
/// 2. `metadata` carries `template_name` and `focus_area` (warnings)
/// 3. every phase group in `sections` (a key containing `"phase"` whose value
///    is an object) has phases with `deliverables` and `success_criteria`
///    arrays (warnings)
///
/// A key holding `null`, `false`, `""` or `0` counts as absent. A document
/// that is not an object has neither required section.
///
/// # Example
///
/// ```
/// use flowgen::validate::validate_workflow;
/// use serde_json::json;
///
/// let report = validate_workflow(&json!({"metadata": {}, "sections": {}}));
/// assert!(report.valid);
/// assert_eq!(report.warnings.len(), 2);
/// ```
pub fn validate_workflow(workflow: &Value) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for section in REQUIRED_SECTIONS {
        if field(workflow, section).is_none() {
            errors.push(format!("Missing required section: {}", section));
        }
    }

    if let Some(metadata) = field(workflow, "metadata") {
        for name in REQUIRED_METADATA {
            if field(metadata, name).is_none() {
                warnings.push(format!("Missing metadata field: {}", name));
            }
        }
    }

    if let Some(Value::Object(sections)) = field(workflow, "sections") {
        let phase_groups = sections
            .iter()
            .filter(|(key, _)| key.contains("phase"))
            .filter_map(|(_, group)| group.as_object());

        for group in phase_groups {
            for (phase_name, phase) in group {
                if !has_array(phase, "deliverables") {
                    warnings.push(format!("Phase {} missing deliverables array", phase_name));
                }
                if !has_array(phase, "success_criteria") {
                    warnings.push(format!(
                        "Phase {} missing success_criteria array",
                        phase_name
                    ));
                }
            }
        }
    }

    let report = ValidationReport::new(errors, warnings);
    tracing::debug!(
        valid = report.valid,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validated workflow"
    );
    report
}

/// Look up a field of an object, treating falsy values as absent.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !is_falsy(v))
}

/// `null`, `false`, `""` and numeric zero. Empty arrays and objects are present.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn has_array(phase: &Value, key: &str) -> bool {
    phase.get(key).is_some_and(Value::is_array)
}
