//! Arguments for app linking and Login with Merit commands

use clap::Parser;

/// Arguments for 'link-url'
#[derive(Parser, Debug)]
pub struct LinkUrlArgs {
    /// Where Merit redirects after the org approves the link
    #[arg(long)]
    pub success_url: String,

    /// Where Merit redirects when the link is declined
    #[arg(long)]
    pub failure_url: String,
}

/// Arguments for 'login-url'
#[derive(Parser, Debug)]
pub struct LoginUrlArgs {
    /// Where Merit redirects after the member logs in
    #[arg(long)]
    pub success_url: String,

    /// Where Merit redirects when the login fails
    #[arg(long)]
    pub failure_url: String,

    /// Permission requested from the member (repeatable)
    ///
    /// CanViewPublicProfile is always requested.
    #[arg(short, long = "permission")]
    pub permissions: Vec<String>,

    /// Org ID for CanViewAllStandardMeritsFromOrg (repeatable)
    #[arg(long = "scope-org")]
    pub scope_orgs: Vec<String>,
}

/// Arguments for commands exchanging a one-time token
#[derive(Parser, Debug)]
pub struct TokenArgs {
    /// One-time token received on the redirect URL
    pub token: String,
}
