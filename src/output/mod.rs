//! Output formatting module
//!
//! Renders API results as a table, JSON or YAML.

mod common;
mod merits;
mod orgs;
mod templates;

pub use common::{output_text, output_value, print_json, print_yaml};
pub use merits::{output_merit, output_merits};
pub use orgs::{output_org, output_orgs};
pub use templates::{output_template, output_template_choices, output_templates};
