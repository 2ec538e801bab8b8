use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("hostctl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage services deployed to hostctl clusters")
        .long_about("hostctl talks to the hosted API to list and delete the services of your account, and keeps the locally tracked targets in ~/.hostctl/state.json in sync.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("delete")
                .about("Delete one or more services")
                .long_about("Delete a service by target name, or pick services interactively when no known target is given. Services in local clusters can't be deleted.")
                .arg(
                    Arg::new("target")
                        .long("target")
                        .short('t')
                        .help("Target alias or <cluster>/<service-id> to delete")
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .short('f')
                        .help("Delete without asking for confirmation")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("list")
                .about("List services of your account")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}
