//! ArgMatches → CliAction conversion.

use clap::ArgMatches;
use schengen_core::RawInterval;

/// The result of parsing the command line.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    /// Append a stay to the history.
    Add(RawInterval),
    /// Delete the stay at this position.
    Remove(usize),
    /// Print the history.
    List,
    /// Store the planned rejoin date.
    SetRejoin(String),
    /// Evaluate the advisory.
    Check {
        rejoin: Option<String>,
        stays: Vec<RawInterval>,
        use_history: bool,
    },
    /// Write a default config file.
    ConfigInit,
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "add" => Ok(CliAction::Add(RawInterval::new(
            required(sub_matches, "entry")?,
            required(sub_matches, "exit")?,
        ))),
        "remove" => sub_matches
            .get_one::<usize>("index")
            .copied()
            .map(CliAction::Remove)
            .ok_or_else(|| "Missing argument: index".to_string()),
        "list" => Ok(CliAction::List),
        "rejoin" => Ok(CliAction::SetRejoin(required(sub_matches, "date")?)),
        "check" => {
            let stays = sub_matches
                .get_many::<String>("stay")
                .into_iter()
                .flatten()
                .map(|s| parse_stay(s))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(CliAction::Check {
                rejoin: sub_matches.get_one::<String>("rejoin").cloned(),
                stays,
                use_history: !sub_matches.get_flag("no-history"),
            })
        }
        "config" => match sub_matches.subcommand_name() {
            Some("init") => Ok(CliAction::ConfigInit),
            _ => Err("Usage: config init".to_string()),
        },
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required(matches: &ArgMatches, name: &str) -> Result<String, String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

/// Split an `ENTRY:EXIT` pair.
///
/// The dates themselves are checked later, together with the history.
pub fn parse_stay(text: &str) -> Result<RawInterval, String> {
    match text.split_once(':') {
        Some((entry, exit)) if !entry.trim().is_empty() && !exit.trim().is_empty() => {
            Ok(RawInterval::new(entry.trim(), exit.trim()))
        }
        _ => Err(format!("Invalid stay '{}': expected ENTRY:EXIT", text)),
    }
}
