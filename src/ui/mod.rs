//! UI utilities for terminal output
//!
//! Progress spinners for listing calls and confirmation prompts for
//! destructive merit operations.

mod confirm;
mod spinner;

pub use confirm::confirm_action;
pub use spinner::{create_spinner, finish_spinner};
