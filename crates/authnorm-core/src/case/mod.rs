//! Recursive key-case conversion over JSON trees.
//!
//! Records have their keys renamed (unless excluded), sequences are mapped
//! element-wise, and scalars are returned unchanged. The input tree is never
//! modified; a fresh tree is always returned.

mod camel;
mod snake;

pub use camel::camel_key;
pub use snake::snake_key;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Record;

/// Options for [`to_snake_case`] and [`to_camel_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CaseOptions {
    /// Keep the original key next to the renamed one.
    #[serde(default)]
    pub keep_original: bool,
}

/// Converts every record key in `input` to snake_case, except `excluded` keys.
pub fn to_snake_case<K: AsRef<str>>(input: &Value, excluded: &[K], options: CaseOptions) -> Value {
    convert(input, excluded, options, &snake_key)
}

/// Converts every record key in `input` to camelCase, except `excluded` keys.
pub fn to_camel_case<K: AsRef<str>>(input: &Value, excluded: &[K], options: CaseOptions) -> Value {
    convert(input, excluded, options, &camel_key)
}

fn convert<K: AsRef<str>>(
    input: &Value,
    excluded: &[K],
    options: CaseOptions,
    rename: &dyn Fn(&str) -> String,
) -> Value {
    match input {
        Value::Object(record) => Value::Object(convert_record(record, excluded, options, rename)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| convert(item, excluded, options, rename))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

fn convert_record<K: AsRef<str>>(
    record: &Record,
    excluded: &[K],
    options: CaseOptions,
    rename: &dyn Fn(&str) -> String,
) -> Record {
    let mut out = Record::new();

    for (key, value) in record {
        let is_excluded = excluded.iter().any(|e| e.as_ref() == key.as_str());
        let renamed = if is_excluded { key.clone() } else { rename(key) };
        let converted = convert(value, excluded, options, rename);

        if !options.keep_original {
            out.insert(renamed, converted);
            continue;
        }

        if renamed != *key && record.contains_key(&renamed) {
            // The record already carries a property under the renamed key.
            tracing::trace!(key = %key, renamed = %renamed, "keeping original key only");
        } else if renamed != *key {
            out.insert(renamed, converted.clone());
        }
        out.insert(key.clone(), converted);
    }

    out
}
