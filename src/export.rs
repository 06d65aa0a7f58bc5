// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::config::Config;
use crate::value::Value;

/// Export a parsed configuration to JSON.
///
/// Mapping:
/// - `int`, `int64`, `float`, `bool`, `string` → JSON scalars
/// - arrays and lists → JSON arrays
/// - groups → JSON objects, keys in document order
/// - non-finite floats → `null`
///
/// # Examples
/// ```
/// use libconfig::{Config, export};
/// # use std::str::FromStr;
///
/// # fn main() -> Result<(), libconfig::ConfigError> {
/// let config = Config::from_str("ports = [80, 443];")?;
/// assert_eq!(export::config_to_json_string(&config), r#"{"ports":[80,443]}"#);
/// # Ok(())
/// # }
/// ```
pub fn config_to_json(config: &Config) -> serde_json::Value {
    value_to_json(config.root())
}

pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Int(n) => json!(n),
        Value::Int64(n) => json!(n),
        Value::Float(f) => json!(f),
        Value::Bool(b) => json!(b),
        Value::String(s) => json!(s),
        Value::Array(items) | Value::List(items) => {
            serde_json::Value::Array(items.iter().map(value_to_json).collect())
        }
        Value::Group(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

/// Compact JSON text.
pub fn config_to_json_string(config: &Config) -> String {
    config_to_json(config).to_string()
}

/// Indented JSON text.
pub fn config_to_json_pretty(config: &Config) -> String {
    format!("{:#}", config_to_json(config))
}
