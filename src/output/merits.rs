//! Merit output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{key_value_table, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::merit::Merit;

/// Output merits in the specified format
pub fn output_merits(merits: &[Merit], format: &OutputFormat) {
    match format {
        OutputFormat::Table => output_table(merits),
        OutputFormat::Json => print_json(merits),
        OutputFormat::Yaml => print_yaml(merits),
    }
}

/// Output a single merit in the specified format
pub fn output_merit(merit: &Merit, format: &OutputFormat) {
    match format {
        OutputFormat::Table => match serde_json::to_value(merit) {
            Ok(value) => {
                println!();
                println!("{}", key_value_table(&value));
            }
            Err(e) => eprintln!("Failed to render merit: {}", e),
        },
        OutputFormat::Json => print_json(merit),
        OutputFormat::Yaml => print_yaml(merit),
    }
}

fn build_table(merits: &[Merit]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["ID", "Title", "Status", "Active", "Recipient"]);

    for merit in merits {
        let active = if merit.is_active() { "Yes" } else { "No" };
        table.add_row(vec![
            merit.id(),
            merit.title(),
            merit.status().unwrap_or(""),
            active,
            merit.recipient_email(),
        ]);
    }
    table
}

fn output_table(merits: &[Merit]) {
    println!();
    println!("{}", build_table(merits));
    println!("\nTotal: {} merits", merits.len());
}
