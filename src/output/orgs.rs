//! Organization output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{key_value_table, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::merit::Org;

/// Output organizations in the specified format
pub fn output_orgs(orgs: &[Org], format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!();
            println!("{}", build_table(orgs));
            println!("\nTotal: {} organizations", orgs.len());
        }
        OutputFormat::Json => print_json(orgs),
        OutputFormat::Yaml => print_yaml(orgs),
    }
}

/// Output a single organization in the specified format
pub fn output_org(org: &Org, format: &OutputFormat) {
    match format {
        OutputFormat::Table => match serde_json::to_value(org) {
            Ok(value) => {
                println!();
                println!("{}", key_value_table(&value));
            }
            Err(e) => eprintln!("Failed to render organization: {}", e),
        },
        OutputFormat::Json => print_json(org),
        OutputFormat::Yaml => print_yaml(org),
    }
}

fn build_table(orgs: &[Org]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["ID", "Name", "Description"]);

    for org in orgs {
        table.add_row(vec![
            org.id.as_str(),
            org.name(),
            org.description().unwrap_or(""),
        ]);
    }
    table
}
