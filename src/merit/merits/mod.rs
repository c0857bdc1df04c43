//! Merit module

mod api;
mod commands;
mod models;

pub use commands::{
    read_payload, run_edit_command, run_issue_command, run_merit_command, run_merits_command,
    run_revoke_command, run_transfer_command, run_translate_command,
};
pub use models::{Merit, MeritQuery, MeritsResponse};
