//! Template context sources.
//! Context variables come from the configuration, a context file, stdin and
//! `key=value` assignments, merged in that order.

use crate::config::parse_json_or_yaml;
use crate::error::{Error, Result};
use crate::processor::Context;
use std::io::Read;
use std::path::Path;

/// Reads a JSON or YAML context file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Context> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(Error::IoError)?;
    parse_json_or_yaml(&content)
}

/// Reads a JSON object from stdin. Empty input yields an empty context.
pub fn load_from_stdin() -> Result<Context> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_context(&buffer)
}

/// Parses a JSON object into a context.
///
/// # Errors
/// * `Error::ConfigError` if `input` is not a JSON object
pub fn parse_context(input: &str) -> Result<Context> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Context::new());
    }
    serde_json::from_str(input)
        .map_err(|e| Error::ConfigError(format!("Failed to parse context as JSON: {e}")))
}

/// Splits a `key=value` assignment. The value is kept as a string.
pub fn parse_assignment(assignment: &str) -> Result<(String, serde_json::Value)> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), serde_json::Value::String(value.to_string())))
        }
        _ => Err(Error::ConfigError(format!(
            "Invalid assignment '{assignment}', expected KEY=VALUE"
        ))),
    }
}

/// Layers `overrides` on top of `base`, key by key.
pub fn merge(mut base: Context, overrides: Context) -> Context {
    base.extend(overrides);
    base
}
