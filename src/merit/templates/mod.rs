//! Field and MeritTemplate module

mod api;
mod commands;
mod models;

pub use api::EMPTY_CHOICE_LABEL;
pub use commands::{run_template_command, run_templates_command};
pub use models::{FieldSetting, MeritTemplate, MeritTemplatesResponse, TemplateChoice};
