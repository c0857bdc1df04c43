//! Member module

mod api;
mod commands;

pub use commands::run_member_command;
