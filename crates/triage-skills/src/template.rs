//! Prompt templates
//!
//! Placeholders have the form `{{name}}`. Unknown names are left in place.

use crate::error::{Error, Result};
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::HashMap;

/// Render a template against context variables
pub fn render(template: &str, variables: &HashMap<String, Value>) -> Result<String> {
    let re = Regex::new(r"\{\{\s*(\w+)\s*\}\}").map_err(|e| Error::Template(e.to_string()))?;

    let rendered = re.replace_all(template, |cap: &Captures<'_>| match variables.get(&cap[1]) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
        None => cap[0].to_string(),
    });

    Ok(rendered.into_owned())
}
