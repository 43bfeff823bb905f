//! Placeholder substitution over JSON values.
//!
//! Strings anywhere in a value may contain `{{name}}` placeholders, where
//! `name` is one or more ASCII word characters. Each placeholder whose name is
//! present in the variable mapping is replaced by the mapped value; unknown
//! names are left exactly as written.
//!
//! # Syntax
//!
//! - `{{name}}` - Substitutes the value of variable `name`
//! - `{{ name }}`, `{{}}`, `{{a-b}}` - Not placeholders, copied through unchanged
//!
//! There is no escape sequence: any text matching the placeholder pattern is
//! treated as a placeholder.

use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Variable mapping from placeholder name to replacement text.
pub type Variables = HashMap<String, String>;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern is a valid regex")
});

/// Substitute placeholders throughout a value.
///
/// Returns a new value; the input is never modified. Arrays keep their order
/// and objects keep their keys. Numbers, booleans and null come back as-is.
///
/// # Examples
///
/// ```
/// use flowgen::template::{substitute, vars};
/// use serde_json::json;
///
/// let template = json!({
///     "title": "{{project}} sprint",
///     "steps": ["Plan {{project}}", "Ship {{release}}"],
///     "days": 14
/// });
///
/// let out = substitute(&template, &vars([("project", "Atlas")]));
/// assert_eq!(out["title"], "Atlas sprint");
/// assert_eq!(out["steps"][1], "Ship {{release}}");
/// assert_eq!(out["days"], 14);
/// ```
pub fn substitute(value: &Value, variables: &Variables) -> Value {
    match value {
        Value::String(s) => Value::String(substitute_str(s, variables)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| substitute(item, variables))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), substitute(item, variables)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

/// Substitute placeholders in a single string.
///
/// All placeholders are resolved in one left-to-right pass, so replacement
/// text is never itself rescanned.
pub fn substitute_str(text: &str, variables: &Variables) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| match variables.get(&caps[1]) {
            Some(replacement) => replacement.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Collect every placeholder name that appears anywhere in a value.
pub fn placeholders(value: &Value) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    collect_placeholders(value, &mut names);
    names
}

/// Placeholder names in `value` that `variables` does not cover.
pub fn unresolved(value: &Value, variables: &Variables) -> BTreeSet<String> {
    placeholders(value)
        .into_iter()
        .filter(|name| !variables.contains_key(name))
        .collect()
}

fn collect_placeholders(value: &Value, names: &mut BTreeSet<String>) {
    match value {
        Value::String(s) => {
            for caps in PLACEHOLDER.captures_iter(s) {
                names.insert(caps[1].to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_placeholders(item, names);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_placeholders(item, names);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Build a variable mapping from a JSON object.
///
/// Strings are taken verbatim; numbers and booleans are coerced to their JSON
/// text. Null, arrays and nested objects have no string form and are skipped.
/// Returns `None` if `value` is not an object.
pub fn variables_from_json(value: &Value) -> Option<Variables> {
    let map = value.as_object()?;
    let mut variables = Variables::with_capacity(map.len());

    for (key, item) in map {
        let text = match item {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                tracing::warn!(variable = %key, "skipping variable without a string form");
                continue;
            }
        };
        variables.insert(key.clone(), text);
    }

    Some(variables)
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> Variables
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
