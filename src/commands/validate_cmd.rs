//! Implementation of the `flowgen validate` command.

use super::read_document;
use crate::cli::ValidateArgs;
use crate::error::{FlowgenError, Result};
use crate::validate::{validate_checkpoint_timing, validate_workflow};
use serde_json::Value;

/// Execute the `flowgen validate` command.
///
/// Prints the validation report. Fails with a validation error when the
/// document has errors, when its rapid iteration checkpoints are out of
/// order or not a list, or (with `--strict`) when it has warnings. Absent or
/// `null` checkpoints skip the timing check.
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let workflow = read_document(&args.file)?;
    let report = validate_workflow(&workflow);

    print!("{}", report.format_report());

    let timing = match workflow.pointer("/sections/rapid_iteration_checkpoints") {
        None | Some(Value::Null) => None,
        Some(checkpoints @ Value::Array(_)) => Some(if validate_checkpoint_timing(checkpoints) {
            Timing::Ok
        } else {
            Timing::OutOfOrder
        }),
        Some(_) => Some(Timing::NotAList),
    };
    if let Some(timing) = timing {
        println!();
        println!("Checkpoint timing: {}", timing.as_str());
    }

    let mut problems = Vec::new();
    if !report.valid {
        problems.push(format!("{} error(s)", report.errors.len()));
    }
    match timing {
        Some(Timing::OutOfOrder) => problems.push("checkpoint timing out of order".to_string()),
        Some(Timing::NotAList) => {
            problems.push("rapid_iteration_checkpoints is not a list".to_string())
        }
        Some(Timing::Ok) | None => {}
    }
    if args.strict && !report.warnings.is_empty() {
        problems.push(format!("{} warning(s) in strict mode", report.warnings.len()));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(FlowgenError::ValidationError(problems.join(", ")))
    }
}

/// Outcome of the checkpoint timing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timing {
    Ok,
    OutOfOrder,
    NotAList,
}

impl Timing {
    fn as_str(self) -> &'static str {
        match self {
            Timing::Ok => "ok",
            Timing::OutOfOrder => "out of order",
            Timing::NotAList => "not a list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(file: std::path::PathBuf, strict: bool) -> ValidateArgs {
        ValidateArgs { file, strict }
    }

    #[test]
    fn valid_document_passes() {
        let dir = TempDir::new().unwrap();
        let file = write(
            dir.path(),
            "ok.json",
            r#"{"metadata": {"template_name": "t", "focus_area": "technical"},
                "sections": {"rapid_iteration_checkpoints": ["Day 2: a", "Week 1: b"]}}"#,
        );
        assert!(cmd_validate(args(file, true)).is_ok());
    }

    #[test]
    fn missing_sections_fails_with_validation_error() {
        let dir = TempDir::new().unwrap();
        let file = write(dir.path(), "bad.yaml", "metadata:\n  template_name: t\n");
        let err = cmd_validate(args(file, false)).unwrap_err();
        assert!(matches!(err, FlowgenError::ValidationError(_)));
        assert_eq!(err.to_string(), "Validation failed: 1 error(s)");
    }

    #[test]
    fn out_of_order_checkpoints_fail() {
        let dir = TempDir::new().unwrap();
        let file = write(
            dir.path(),
            "late.json",
            r#"{"metadata": {"template_name": "t", "focus_area": "technical"},
                "sections": {"rapid_iteration_checkpoints": ["Day 9: a", "Day 3: b"]}}"#,
        );
        let err = cmd_validate(args(file, false)).unwrap_err();
        assert!(err.to_string().contains("checkpoint timing out of order"));
    }

    #[test]
    fn null_checkpoints_skip_timing_check() {
        let dir = TempDir::new().unwrap();
        let file = write(
            dir.path(),
            "null.json",
            r#"{"metadata": {"template_name": "t", "focus_area": "technical"},
                "sections": {"rapid_iteration_checkpoints": null}}"#,
        );
        assert!(cmd_validate(args(file, true)).is_ok());
    }

    #[test]
    fn non_list_checkpoints_fail_as_not_a_list() {
        let dir = TempDir::new().unwrap();
        let file = write(
            dir.path(),
            "scalar.json",
            r#"{"metadata": {"template_name": "t", "focus_area": "technical"},
                "sections": {"rapid_iteration_checkpoints": "Day 3: a"}}"#,
        );
        let err = cmd_validate(args(file, false)).unwrap_err();
        assert!(matches!(err, FlowgenError::ValidationError(_)));
        assert!(err.to_string().contains("rapid_iteration_checkpoints is not a list"));
        assert!(!err.to_string().contains("out of order"));
    }

    #[test]
    fn warnings_only_fail_in_strict_mode() {
        let dir = TempDir::new().unwrap();
        let file = write(dir.path(), "warn.json", r#"{"metadata": {}, "sections": {}}"#);
        assert!(cmd_validate(args(file.clone(), false)).is_ok());
        let err = cmd_validate(args(file, true)).unwrap_err();
        assert!(err.to_string().contains("2 warning(s) in strict mode"));
    }

    #[test]
    fn unreadable_file_is_user_error() {
        let dir = TempDir::new().unwrap();
        let err = cmd_validate(args(dir.path().join("absent.json"), false)).unwrap_err();
        assert!(matches!(err, FlowgenError::UserError(_)));
    }
}
