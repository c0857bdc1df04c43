//! CLI argument parsing

mod common;
mod linking;
mod merits;
mod orgs;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use linking::{LinkUrlArgs, LoginUrlArgs, TokenArgs};
pub use merits::{EditArgs, EmailArgs, MeritArgs, MeritsArgs, PayloadArgs, RevokeArgs};
pub use orgs::{MemberArgs, SearchArgs, TemplateArgs, TemplatesArgs};

/// Issue and query Merit digital credentials
#[derive(Parser, Debug)]
#[command(name = "meritctl")]
#[command(version)]
#[command(about = "Issue and query Merit digital credentials", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Merit application ID
    #[arg(long, global = true, env = "MERIT_APP_ID", hide_env_values = true)]
    pub app_id: Option<String>,

    /// Merit application secret
    #[arg(long, global = true, env = "MERIT_APP_SECRET", hide_env_values = true)]
    pub app_secret: Option<String>,

    /// Organization ID the commands act on
    #[arg(long, global = true, env = "MERIT_ORG_ID")]
    pub org: Option<String>,

    /// Use the sandbox API (also enabled by MERIT_SANDBOX=1)
    #[arg(long, global = true)]
    pub sandbox: bool,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, destructive commands need --yes
    #[arg(short, long, global = true)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Request a URL an org admin opens to link the org to this app
    LinkUrl(LinkUrlArgs),

    /// Exchange an org ID token for the org ID
    OrgId(TokenArgs),

    /// Request a Login with Merit URL for members
    LoginUrl(LoginUrlArgs),

    /// Exchange a member ID token for the member ID
    MemberId(TokenArgs),

    /// Show the organization
    Org,

    /// Search organizations by name
    Search(SearchArgs),

    /// List the org's merit templates
    #[command(visible_alias = "tpls")]
    Templates(TemplatesArgs),

    /// Show a merit template
    #[command(visible_alias = "tpl")]
    Template(TemplateArgs),

    /// List the org's merits
    Merits(MeritsArgs),

    /// Show a merit
    Merit(MeritArgs),

    /// Show a member, their merits or their access merit
    Member(MemberArgs),

    /// Send a merit
    Send(PayloadArgs),

    /// Propose a merit for approval
    Propose(PayloadArgs),

    /// Edit a merit
    Edit(EditArgs),

    /// Revoke a merit
    Revoke(RevokeArgs),

    /// Transfer a merit to a new email
    Transfer(EmailArgs),

    /// Get the static lookup URL of a merit for a member email
    Translate(EmailArgs),
}

impl Command {
    /// Whether the command only needs app credentials (no org session)
    pub fn is_app_level(&self) -> bool {
        matches!(self, Command::LinkUrl(_) | Command::OrgId(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["meritctl", "org"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.output, OutputFormat::Table);
        assert!(!cli.sandbox);
        assert!(!cli.batch);
        assert!(matches!(cli.command, Command::Org));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "meritctl", "merits", "-o", "json", "--org", "org-1", "--sandbox",
        ]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.org.as_deref(), Some("org-1"));
        assert!(cli.sandbox);
    }

    #[test]
    fn test_merits_filters() {
        let cli = Cli::parse_from([
            "meritctl", "merits", "-t", "t-1", "-s", "Pending", "-e", "a@x.io", "--limit", "5",
        ]);
        let Command::Merits(args) = cli.command else {
            panic!("expected merits command");
        };
        assert_eq!(args.template.as_deref(), Some("t-1"));
        assert_eq!(args.status.as_deref(), Some("Pending"));
        assert_eq!(args.email.as_deref(), Some("a@x.io"));
        assert_eq!(args.limit, 5);
    }

    #[test]
    fn test_merits_default_limit() {
        let cli = Cli::parse_from(["meritctl", "merits"]);
        let Command::Merits(args) = cli.command else {
            panic!("expected merits command");
        };
        assert_eq!(args.limit, 100);
    }

    #[test]
    fn test_member_lists_merits() {
        let cli = Cli::parse_from(["meritctl", "member", "mem-1", "--active"]);
        let Command::Member(args) = cli.command else {
            panic!("expected member command");
        };
        assert!(args.lists_merits());

        let cli = Cli::parse_from(["meritctl", "member", "mem-1"]);
        let Command::Member(args) = cli.command else {
            panic!("expected member command");
        };
        assert!(!args.lists_merits());
    }

    #[test]
    fn test_member_access_conflicts_with_merits() {
        let result = Cli::try_parse_from(["meritctl", "member", "mem-1", "--access", "--merits"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_url_repeatable_flags() {
        let cli = Cli::parse_from([
            "meritctl",
            "login-url",
            "--success-url",
            "https://app/ok",
            "--failure-url",
            "https://app/fail",
            "-p",
            "CanViewAllStandardMeritsFromOrg",
            "--scope-org",
            "abc",
            "--scope-org",
            "def",
        ]);
        let Command::LoginUrl(args) = cli.command else {
            panic!("expected login-url command");
        };
        assert_eq!(args.permissions, vec!["CanViewAllStandardMeritsFromOrg"]);
        assert_eq!(args.scope_orgs, vec!["abc", "def"]);
    }

    #[test]
    fn test_revoke_requires_reason() {
        assert!(Cli::try_parse_from(["meritctl", "revoke", "m-1"]).is_err());
        let cli = Cli::parse_from(["meritctl", "revoke", "m-1", "-r", "Expired", "-y"]);
        let Command::Revoke(args) = cli.command else {
            panic!("expected revoke command");
        };
        assert_eq!(args.reason, "Expired");
        assert!(args.yes);
    }

    #[test]
    fn test_app_level_commands() {
        let cli = Cli::parse_from(["meritctl", "org-id", "tok"]);
        assert!(cli.command.is_app_level());
        let cli = Cli::parse_from(["meritctl", "org"]);
        assert!(!cli.command.is_app_level());
    }

    #[test]
    fn test_invalid_output_format_rejected() {
        assert!(Cli::try_parse_from(["meritctl", "org", "-o", "csv"]).is_err());
    }
}
