//! Merit command handlers

use std::io::Read;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::{MeritError, Result};
use crate::merit::OrgSession;
use crate::output::{output_merit, output_merits, output_text};
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::MeritQuery;

/// Read a JSON object payload from a file, or stdin for `-`
pub fn read_payload(path: &Path) -> Result<Value> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| MeritError::Io(format!("{}: {}", path.display(), e)))?
    };

    let payload: Value = serde_json::from_str(&raw)?;
    if !payload.is_object() {
        return Err(MeritError::Json(format!(
            "{}: payload must be a JSON object",
            path.display()
        )));
    }
    Ok(payload)
}

/// Run the merits list command
pub async fn run_merits_command(
    session: &OrgSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Merits(args) = &cli.command else {
        unreachable!()
    };

    let mut query = MeritQuery::new().limit(args.limit);
    if let Some(template) = &args.template {
        query = query.template(template);
    }
    if let Some(status) = &args.status {
        query = query.status(status);
    }
    if let Some(email) = &args.email {
        query = query.email(email);
    }

    let spinner = create_spinner("Fetching merits...", cli.batch);
    let result = session.all_merits(&query).await;
    finish_spinner(spinner);

    output_merits(&result?, &cli.output);
    Ok(())
}

/// Run the merit details command
pub async fn run_merit_command(
    session: &OrgSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Merit(args) = &cli.command else {
        unreachable!()
    };

    match session.merit(&args.id).await? {
        Some(merit) => {
            output_merit(&merit, &cli.output);
            Ok(())
        }
        None => Err(format!("Merit '{}' not found", args.id).into()),
    }
}

/// Run the send or propose command
pub async fn run_issue_command(
    session: &OrgSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (args, propose) = match &cli.command {
        Command::Send(args) => (args, false),
        Command::Propose(args) => (args, true),
        _ => unreachable!(),
    };

    let payload = read_payload(&args.file)?;
    debug!("Loaded merit payload from {}", args.file.display());

    let merit_id = if propose {
        session.propose_merit(&payload).await?
    } else {
        session.send_merit(&payload).await?
    };

    match merit_id {
        Some(id) => {
            output_text("id", &id, &cli.output);
            Ok(())
        }
        None if propose => Err("Failed to propose the merit".into()),
        None => Err("Failed to send the merit".into()),
    }
}

/// Run the merit edit command
pub async fn run_edit_command(
    session: &OrgSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Edit(args) = &cli.command else {
        unreachable!()
    };

    let payload = read_payload(&args.file)?;
    if !session.edit_merit(&args.id, &payload).await? {
        return Err(format!("Failed to edit merit '{}'", args.id).into());
    }
    eprintln!("Merit '{}' updated", args.id);
    Ok(())
}

/// Run the merit revoke command
pub async fn run_revoke_command(
    session: &OrgSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Revoke(args) = &cli.command else {
        unreachable!()
    };

    let prompt = format!("Revoke merit '{}' ({})?", args.id, args.reason);
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        eprintln!("Aborted");
        return Ok(());
    }

    if !session.revoke_merit(&args.id, &args.reason).await? {
        return Err(format!("Failed to revoke merit '{}'", args.id).into());
    }
    eprintln!("Merit '{}' revoked", args.id);
    Ok(())
}

/// Run the merit transfer command
pub async fn run_transfer_command(
    session: &OrgSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Transfer(args) = &cli.command else {
        unreachable!()
    };

    match session.transfer_email(&args.id, &args.email).await? {
        Some(new_id) => {
            output_text("id", &new_id, &cli.output);
            Ok(())
        }
        None => Err(format!("Failed to transfer merit '{}'", args.id).into()),
    }
}

/// Run the merit translate command
pub async fn run_translate_command(
    session: &OrgSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Translate(args) = &cli.command else {
        unreachable!()
    };

    match session.translate_uuid(&args.id, &args.email).await? {
        Some(url) => {
            output_text("translationUrl", &url, &cli.output);
            Ok(())
        }
        None => Err(format!("Failed to translate merit '{}'", args.id).into()),
    }
}
