//! Org linking and Login with Merit module

mod api;
mod commands;

pub use commands::{
    run_link_url_command, run_login_url_command, run_member_id_command, run_org_id_command,
};
