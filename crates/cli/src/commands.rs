//! Clap command tree definition.

use clap::{value_parser, Arg, ArgAction, Command};

/// Default location of the persisted travel history.
pub const DEFAULT_HISTORY_PATH: &str = "schengen-history.json";

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("schengen")
        .about("Schengen 90/180 stay calculator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("history")
                .long("history")
                .help("Travel history file (default: schengen-history.json)")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Engine config file (default: schengen.toml next to the history file)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("add")
                .about("Record a past or planned stay")
                .arg(Arg::new("entry").required(true).help("Entry date, YYYY-MM-DD"))
                .arg(Arg::new("exit").required(true).help("Exit date, YYYY-MM-DD")),
        )
        .subcommand(
            Command::new("remove")
                .about("Delete a recorded stay by its position in `list`")
                .arg(
                    Arg::new("index")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(Command::new("list").about("Show recorded stays and any problems with them"))
        .subcommand(
            Command::new("rejoin")
                .about("Store the date you plan to re-enter the area")
                .arg(Arg::new("date").required(true).help("Rejoin date, YYYY-MM-DD")),
        )
        .subcommand(
            Command::new("check")
                .about("Work out how many days you can stay")
                .arg(
                    Arg::new("rejoin")
                        .long("rejoin")
                        .help("Rejoin date (default: stored date, then today)"),
                )
                .arg(
                    Arg::new("stay")
                        .long("stay")
                        .help("Extra stay as ENTRY:EXIT, may be repeated")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("no-history")
                        .long("no-history")
                        .help("Ignore the history file, use only --stay")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage the engine config file")
                .subcommand_required(true)
                .subcommand(Command::new("init").about("Write a default config file if missing")),
        )
}
