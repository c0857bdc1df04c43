//! meritctl - Main entry point

use clap::Parser;
use log::{debug, info};

use meritctl::merit::{
    run_edit_command, run_issue_command, run_link_url_command, run_login_url_command,
    run_member_command, run_member_id_command, run_merit_command, run_merits_command,
    run_org_command, run_org_id_command, run_revoke_command, run_search_command,
    run_template_command, run_templates_command, run_transfer_command, run_translate_command,
};
use meritctl::{AppClient, Cli, Command, CredentialResolver, Environment, OrgSession};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting meritctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let resolver = CredentialResolver::new();
    let app_id = resolver.app_id(cli.app_id.as_deref())?;
    let app_secret = resolver.app_secret(cli.app_secret.as_deref())?;
    let environment = Environment::from_sandbox(resolver.sandbox(cli.sandbox));
    debug!("Using {} environment ({})", environment, environment.base_url());

    let app = AppClient::new(app_id, app_secret, environment);

    if cli.command.is_app_level() {
        return match &cli.command {
            Command::LinkUrl(_) => run_link_url_command(&app, cli).await,
            Command::OrgId(_) => run_org_id_command(&app, cli).await,
            _ => unreachable!(),
        };
    }

    let org_id = resolver.org_id(cli.org.as_deref())?;
    let session = OrgSession::new(app, org_id).await;
    debug!("Session token status: {:?}", session.token_status().await);

    match &cli.command {
        Command::LinkUrl(_) | Command::OrgId(_) => unreachable!(),
        Command::LoginUrl(_) => run_login_url_command(&session, cli).await,
        Command::MemberId(_) => run_member_id_command(&session, cli).await,
        Command::Org => run_org_command(&session, cli).await,
        Command::Search(_) => run_search_command(&session, cli).await,
        Command::Templates(_) => run_templates_command(&session, cli).await,
        Command::Template(_) => run_template_command(&session, cli).await,
        Command::Merits(_) => run_merits_command(&session, cli).await,
        Command::Merit(_) => run_merit_command(&session, cli).await,
        Command::Member(_) => run_member_command(&session, cli).await,
        Command::Send(_) | Command::Propose(_) => run_issue_command(&session, cli).await,
        Command::Edit(_) => run_edit_command(&session, cli).await,
        Command::Revoke(_) => run_revoke_command(&session, cli).await,
        Command::Transfer(_) => run_transfer_command(&session, cli).await,
        Command::Translate(_) => run_translate_command(&session, cli).await,
    }
}
