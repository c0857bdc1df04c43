//! Organization command handlers

use crate::cli::{Cli, Command};
use crate::merit::OrgSession;
use crate::output::{output_org, output_orgs};
use crate::ui::{create_spinner, finish_spinner};

/// Run the org command
pub async fn run_org_command(
    session: &OrgSession,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    match session.org_info().await? {
        Some(org) => {
            output_org(&org, &cli.output);
            Ok(())
        }
        None => Err(format!("Organization '{}' not found", session.org_id()).into()),
    }
}

/// Run the org search command
pub async fn run_search_command(
    session: &OrgSession,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Search(args) = &cli.command else {
        unreachable!()
    };

    let spinner = create_spinner("Searching organizations...", cli.batch);
    let result = session.search_orgs(&args.query).await;
    finish_spinner(spinner);

    let orgs = result?;
    if orgs.is_empty() {
        eprintln!("No organizations match '{}'", args.query);
        return Ok(());
    }
    output_orgs(&orgs, &cli.output);
    Ok(())
}
