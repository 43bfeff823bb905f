//! Implementation of the `flowgen templates` command.

use crate::cli::TemplatesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::template::{TemplateStore, placeholders};
use std::path::PathBuf;

/// Execute the `flowgen templates` command.
///
/// Lists each loadable template with the placeholders it expects.
pub fn cmd_templates(args: TemplatesArgs, config: &Config) -> Result<()> {
    let template_dir = args
        .template_dir
        .unwrap_or_else(|| PathBuf::from(&config.template_dir));

    let mut store = TemplateStore::new();
    let names = store.load_dir(&template_dir, &config.template_globs)?;

    if names.is_empty() {
        println!("No templates found in {}", template_dir.display());
        return Ok(());
    }

    for name in &names {
        let vars: Vec<String> = store
            .get(name)
            .map(|t| placeholders(t).into_iter().collect())
            .unwrap_or_default();
        if vars.is_empty() {
            println!("{}", name);
        } else {
            println!("{}  ({})", name, vars.join(", "));
        }
    }
    Ok(())
}
