//! Implementation of the `flowgen generate` command.

use super::{read_document, to_pretty_json};
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{FlowgenError, Result};
use crate::schedule::{attach_checkpoints, generate_feedback_loops};
use crate::template::{TemplateStore, Variables, unresolved, variables_from_json};
use std::path::PathBuf;

/// Execute the `flowgen generate` command.
///
/// Loads the template directory, substitutes variables, optionally attaches
/// feedback checkpoints, and prints the document as JSON.
pub fn cmd_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let template_dir = args
        .template_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.template_dir));

    let mut store = TemplateStore::new();
    store.load_dir(&template_dir, &config.template_globs)?;

    let variables = collect_variables(&args)?;
    let mut workflow = store.generate(&args.name, &variables)?;

    if args.checkpoints {
        let focus_area = workflow
            .pointer("/metadata/focus_area")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let days = args.days.unwrap_or(config.total_days);
        attach_checkpoints(&mut workflow, &generate_feedback_loops(&focus_area, days));
    }

    let leftover = unresolved(&workflow, &variables);
    if !leftover.is_empty() {
        let names: Vec<&str> = leftover.iter().map(String::as_str).collect();
        eprintln!("Warning: unresolved placeholders: {}", names.join(", "));
    }

    println!("{}", to_pretty_json(&workflow)?);
    Ok(())
}

/// Merge `--vars-file` and `--var` values; command-line pairs win.
fn collect_variables(args: &GenerateArgs) -> Result<Variables> {
    let mut variables = match &args.vars_file {
        Some(path) => {
            let doc = read_document(path)?;
            variables_from_json(&doc).ok_or_else(|| {
                FlowgenError::UserError(format!(
                    "variables file '{}' must contain an object",
                    path.display()
                ))
            })?
        }
        None => Variables::new(),
    };

    for (key, value) in &args.vars {
        variables.insert(key.clone(), value.clone());
    }

    Ok(variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args_with(vars: Vec<(&str, &str)>, vars_file: Option<PathBuf>) -> GenerateArgs {
        GenerateArgs {
            name: "sprint".to_string(),
            template_dir: None,
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            vars_file,
            checkpoints: false,
            days: None,
        }
    }

    #[test]
    fn command_line_vars_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vars.json");
        std::fs::write(&path, r#"{"name": "from-file", "days": 10}"#).unwrap();

        let variables =
            collect_variables(&args_with(vec![("name", "from-cli")], Some(path))).unwrap();
        assert_eq!(variables["name"], "from-cli");
        assert_eq!(variables["days"], "10");
    }

    #[test]
    fn vars_file_must_be_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vars.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = collect_variables(&args_with(vec![], Some(path))).unwrap_err();
        assert!(err.to_string().contains("must contain an object"));
    }

    #[test]
    fn generate_from_template_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("sprint.json"),
            r#"{"metadata": {"template_name": "{{name}}", "focus_area": "product"}, "sections": {}}"#,
        )
        .unwrap();

        let mut args = args_with(vec![("name", "atlas")], None);
        args.template_dir = Some(dir.path().to_path_buf());
        args.checkpoints = true;
        assert!(cmd_generate(args, &Config::default()).is_ok());
    }

    #[test]
    fn generate_unknown_template_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut args = args_with(vec![], None);
        args.template_dir = Some(dir.path().to_path_buf());

        let err = cmd_generate(args, &Config::default()).unwrap_err();
        assert!(matches!(err, FlowgenError::NotFound(_)));
    }
}
