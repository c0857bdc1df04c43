//! Linking command handlers

use log::debug;

use crate::cli::{Cli, Command};
use crate::merit::{AppClient, OrgSession};
use crate::output::output_text;

/// Run the link-url command
pub async fn run_link_url_command(
    app: &AppClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::LinkUrl(args) = &cli.command else {
        unreachable!()
    };

    debug!("Requesting link URL for app '{}'", app.app_id());
    match app
        .request_link_url(&args.success_url, &args.failure_url)
        .await?
    {
        Some(url) => {
            output_text("request_linkapp_url", &url, &cli.output);
            Ok(())
        }
        None => Err("Failed to request a link URL".into()),
    }
}

/// Run the org-id command
pub async fn run_org_id_command(
    app: &AppClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::OrgId(args) = &cli.command else {
        unreachable!()
    };

    match app.exchange_org_token(&args.token).await? {
        Some(org_id) => {
            output_text("orgId", &org_id, &cli.output);
            Ok(())
        }
        None => Err("Failed to exchange the org ID token".into()),
    }
}

/// Run the login-url command
pub async fn run_login_url_command(
    session: &OrgSession,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::LoginUrl(args) = &cli.command else {
        unreachable!()
    };

    let url = session
        .login_with_merit_url(
            &args.success_url,
            &args.failure_url,
            args.permissions.as_slice(),
            args.scope_orgs.as_slice(),
        )
        .await?;

    match url {
        Some(url) => {
            output_text("request_loginwithmerit_url", &url, &cli.output);
            Ok(())
        }
        None => Err("Failed to request a Login with Merit URL".into()),
    }
}

/// Run the member-id command
pub async fn run_member_id_command(
    session: &OrgSession,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::MemberId(args) = &cli.command else {
        unreachable!()
    };

    match session.member_id_from_token(&args.token).await? {
        Some(member_id) => {
            output_text("memberId", &member_id, &cli.output);
            Ok(())
        }
        None => Err("Failed to exchange the member ID token".into()),
    }
}
