//! Common utilities for output formatters

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Print data as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize JSON: {}", e),
    }
}

/// Print data as YAML
pub fn print_yaml<T: Serialize + ?Sized>(data: &T) {
    match serde_yml::to_string(data) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Failed to serialize YAML: {}", e),
    }
}

/// Text of a JSON value for a table cell
///
/// Strings print without quotes, null prints empty, and nested values
/// print as compact JSON.
pub(crate) fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Two-column field/value table for a JSON object
pub(crate) fn key_value_table(value: &Value) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["Field", "Value"]);

    match value.as_object() {
        Some(object) => {
            for (key, field) in object {
                table.add_row(vec![key.clone(), cell_text(field)]);
            }
        }
        None => {
            table.add_row(vec![String::new(), cell_text(value)]);
        }
    }
    table
}

/// Output an opaque API body
pub fn output_value(value: &Value, format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!();
            println!("{}", key_value_table(value));
        }
        OutputFormat::Json => print_json(value),
        OutputFormat::Yaml => print_yaml(value),
    }
}

/// Output a single string result (URL, ID) under a field name
pub fn output_text(field: &str, text: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", text),
        OutputFormat::Json => print_json(&serde_json::json!({ field: text })),
        OutputFormat::Yaml => print_yaml(&serde_json::json!({ field: text })),
    }
}
