use clap::ArgMatches;
use console::style;
use tracing::{error, info};

use hostctl_core::{DeletionOutcome, delete_ops, events};

use super::helpers::load_config_with_warning;
use crate::interaction::TerminalInteraction;

pub(crate) fn handle_delete_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = matches.get_one::<String>("target").map(String::as_str);
    let force = matches.get_flag("force");

    info!(event = "cli.delete_started", target = ?target, force = force);

    let config = load_config_with_warning();
    let mut interaction = TerminalInteraction::new();

    match delete_ops::delete_projects(&config, target, force, &mut interaction) {
        Ok(outcome) => {
            if let DeletionOutcome::Reconciled { deleted } = &outcome {
                info!(event = "cli.delete_completed", count = deleted.len());
            } else {
                info!(event = "cli.delete_skipped", outcome = ?outcome);
            }
            Ok(())
        }
        Err(e) => {
            interaction.abandon();
            eprintln!("{} {}", style("Error:").red().bold(), e);

            error!(
                event = "cli.delete_failed",
                target = ?target,
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
