//! MeritTemplate command handlers

use log::debug;

use crate::cli::{Cli, Command};
use crate::merit::OrgSession;
use crate::output::{output_template, output_template_choices, output_templates};
use crate::ui::{create_spinner, finish_spinner};

/// Run the templates list command
pub async fn run_templates_command(
    session: &OrgSession,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Templates(args) = &cli.command else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching merit templates...", cli.batch);

    if args.choices {
        let result = session.merit_template_choices(args.include_none).await;
        finish_spinner(spinner);
        output_template_choices(&result?, &cli.output);
        return Ok(());
    }

    let result = session.all_org_merit_templates(args.limit).await;
    finish_spinner(spinner);
    let templates = result?;
    debug!("Fetched {} templates", templates.len());

    output_templates(&templates, &cli.output);
    Ok(())
}

/// Run the template details command
pub async fn run_template_command(
    session: &OrgSession,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Template(args) = &cli.command else {
        unreachable!()
    };

    let Some(template) = session.merit_template(&args.id).await? else {
        return Err(format!("Merit template '{}' not found", args.id).into());
    };

    if !args.fields {
        output_template(&template, None, &cli.output);
        return Ok(());
    }

    let spinner = create_spinner("Fetching template fields...", cli.batch);
    let result = session.template_field_choices(&args.id).await;
    finish_spinner(spinner);

    let fields = result?;
    output_template(&template, Some(fields.as_slice()), &cli.output);
    Ok(())
}
