//! Arguments for merit commands

use std::path::PathBuf;

use clap::Parser;

use crate::config::api;

/// Arguments for 'merits'
#[derive(Parser, Debug)]
pub struct MeritsArgs {
    /// Filter by MeritTemplate ID
    #[arg(short, long)]
    pub template: Option<String>,

    /// Filter by merit status (e.g. Accepted, Pending, Unapproved)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by recipient email
    #[arg(short, long)]
    pub email: Option<String>,

    /// Number of merits to fetch
    #[arg(long, default_value_t = api::DEFAULT_LIMIT)]
    pub limit: u32,
}

/// Arguments for commands addressing one merit
#[derive(Parser, Debug)]
pub struct MeritArgs {
    /// Merit ID
    pub id: String,
}

/// Arguments for 'send' and 'propose'
#[derive(Parser, Debug)]
pub struct PayloadArgs {
    /// JSON file with the merit payload ('-' reads stdin)
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Arguments for 'edit'
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Merit ID
    pub id: String,

    /// JSON file with the fields to change ('-' reads stdin)
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Arguments for 'revoke'
#[derive(Parser, Debug)]
pub struct RevokeArgs {
    /// Merit ID
    pub id: String,

    /// Reason shown to the recipient
    #[arg(short, long)]
    pub reason: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for 'transfer' and 'translate'
#[derive(Parser, Debug)]
pub struct EmailArgs {
    /// Merit ID
    pub id: String,

    /// Member email
    #[arg(short, long)]
    pub email: String,
}
