use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use hostctl_core::{Project, client, events};

use super::helpers::load_config_with_warning;
use crate::table::TableFormatter;

#[derive(Serialize)]
struct ProjectOutput<'a> {
    id: &'a str,
    name: &'a str,
    cluster: &'a str,
}

impl<'a> From<&'a Project> for ProjectOutput<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            id: project.id(),
            name: project.name(),
            cluster: project.cluster().name(),
        }
    }
}

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let config = load_config_with_warning();

    match client::list_remote_projects(&config) {
        Ok(projects) => {
            if json_output {
                let output: Vec<ProjectOutput> = projects.iter().map(ProjectOutput::from).collect();
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if projects.is_empty() {
                println!("No services found.");
            } else {
                let formatter = TableFormatter::new(&projects);
                formatter.print_table(&projects);
            }

            info!(event = "cli.list_completed", count = projects.len());

            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list services: {}", e);

            error!(
                event = "cli.list_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
