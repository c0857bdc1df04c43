//! MeritTemplate output formatter

use comfy_table::{presets::NOTHING, Table};
use serde_json::Value;

use super::common::{cell_text, key_value_table, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::merit::{MeritTemplate, TemplateChoice};

/// Output templates in the specified format
pub fn output_templates(templates: &[MeritTemplate], format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            table.set_header(vec!["ID", "Title", "Fields"]);
            for template in templates {
                table.add_row(vec![
                    template.id.clone(),
                    template.title().to_string(),
                    template.enabled_field_settings.len().to_string(),
                ]);
            }
            println!();
            println!("{table}");
            println!("\nTotal: {} templates", templates.len());
        }
        OutputFormat::Json => print_json(templates),
        OutputFormat::Yaml => print_yaml(templates),
    }
}

/// Output `(id, title)` template choices
pub fn output_template_choices(choices: &[TemplateChoice], format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            table.set_header(vec!["ID", "Title"]);
            for (id, title) in choices {
                table.add_row(vec![id.as_deref().unwrap_or(""), title.as_str()]);
            }
            println!();
            println!("{table}");
        }
        OutputFormat::Json => print_json(choices),
        OutputFormat::Yaml => print_yaml(choices),
    }
}

/// Template body with its fetched fields attached under `fields`
fn template_document(template: &MeritTemplate, fields: Option<&[Value]>) -> Value {
    let mut document = serde_json::to_value(template).unwrap_or(Value::Null);
    if let (Some(fields), Some(object)) = (fields, document.as_object_mut()) {
        object.insert("fields".to_string(), Value::Array(fields.to_vec()));
    }
    document
}

fn fields_table(fields: &[Value]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["Field ID", "Name", "Type"]);
    for field in fields {
        table.add_row(vec![
            cell_text(&field["id"]),
            cell_text(&field["name"]),
            cell_text(&field["fieldType"]),
        ]);
    }
    table
}

/// Output a single template, with its fields when they were fetched
pub fn output_template(template: &MeritTemplate, fields: Option<&[Value]>, format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut summary = template.clone();
            summary.enabled_field_settings.clear();
            if let Ok(value) = serde_json::to_value(&summary) {
                println!();
                println!("{}", key_value_table(&value));
            }
            if let Some(fields) = fields {
                println!();
                println!("{}", fields_table(fields));
            }
        }
        OutputFormat::Json => print_json(&template_document(template, fields)),
        OutputFormat::Yaml => print_yaml(&template_document(template, fields)),
    }
}
