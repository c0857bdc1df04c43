//! Arguments for org, template and member commands

use clap::Parser;

use crate::config::api;

/// Arguments for 'search'
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Org name fragment (at least 3 characters)
    pub query: String,
}

/// Arguments for 'templates'
#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Number of templates to fetch
    #[arg(long, default_value_t = api::DEFAULT_LIMIT)]
    pub limit: u32,

    /// Only print (id, title) choices for pickers
    #[arg(long)]
    pub choices: bool,

    /// Start the choices with an empty entry
    #[arg(long, requires = "choices")]
    pub include_none: bool,
}

/// Arguments for 'template'
#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// MeritTemplate ID
    pub id: String,

    /// Also fetch the fields enabled on the template
    #[arg(long)]
    pub fields: bool,
}

/// Arguments for 'member'
#[derive(Parser, Debug)]
pub struct MemberArgs {
    /// Member ID
    pub id: String,

    /// List the merits held by the member instead of the profile
    #[arg(short, long)]
    pub merits: bool,

    /// Only list active merits (implies --merits)
    #[arg(short, long)]
    pub active: bool,

    /// Only list merits issued from this template (implies --merits)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Show the access merit the member holds with the org
    #[arg(long, conflicts_with_all = ["merits", "active", "template"])]
    pub access: bool,

    /// Number of merits to fetch
    #[arg(long, default_value_t = api::DEFAULT_LIMIT)]
    pub limit: u32,
}

impl MemberArgs {
    /// Whether the command lists merits rather than the profile
    pub fn lists_merits(&self) -> bool {
        self.merits || self.active || self.template.is_some()
    }
}
