//! Reading JSON documents from a file or stdin, and printing results.

use anyhow::{Context, Result};
use authnorm_core::Record;
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Reads a JSON document from `path`, or from stdin when `None`.
pub fn read_json(path: Option<&Path>) -> Result<Value> {
    let data = match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("read JSON file: {}", p.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read JSON from stdin")?;
            buf
        }
    };
    parse_json(&data)
}

pub fn parse_json(data: &str) -> Result<Value> {
    serde_json::from_str(data).context("parse JSON input")
}

/// Requires a JSON object at the top level.
pub fn into_record(value: Value) -> Result<Record> {
    match value {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("expected a JSON object, got {}", kind(&other)),
    }
}

pub fn read_record(path: Option<&Path>) -> Result<Record> {
    into_record(read_json(path)?)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Pretty-prints `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
