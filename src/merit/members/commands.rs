//! Member command handlers

use log::debug;

use crate::cli::{Cli, Command};
use crate::merit::OrgSession;
use crate::output::{output_merits, output_value};
use crate::ui::{create_spinner, finish_spinner};

/// Run the member command
///
/// Shows the member profile by default, the access merit with `--access`,
/// or the member's merits when any merit filter is given.
pub async fn run_member_command(
    session: &OrgSession,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Member(args) = &cli.command else {
        unreachable!()
    };

    if args.lists_merits() {
        debug!(
            "Listing merits of member '{}' (active only: {})",
            args.id, args.active
        );
        let spinner = create_spinner("Fetching member merits...", cli.batch);
        let result = if args.active {
            session
                .active_member_merits(&args.id, args.template.as_deref(), args.limit)
                .await
        } else {
            session
                .member_merits(&args.id, args.template.as_deref(), args.limit)
                .await
        };
        finish_spinner(spinner);

        output_merits(&result?, &cli.output);
        return Ok(());
    }

    let (body, what) = if args.access {
        (session.member_access_merit(&args.id).await?, "Access merit")
    } else {
        (session.member_info(&args.id).await?, "Member")
    };

    match body {
        Some(body) => {
            output_value(&body, &cli.output);
            Ok(())
        }
        None => Err(format!("{} for member '{}' not found", what, args.id).into()),
    }
}
