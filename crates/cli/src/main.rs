//! Schengen CLI: record stays and check the 90/180-day allowance.
//!
//! Every invocation runs one command against the history file and exits:
//! `schengen [flags] COMMAND`. Exit code 0 on success, 1 on any error.

mod commands;
mod format;
mod logging;
mod parse;
mod state;

use std::path::PathBuf;
use std::process;

use schengen_core::RawInterval;
use schengen_engine::{validate_rows, Engine, EngineConfig, CONFIG_FILE_NAME};
use tracing::info;

use commands::{build_cli, DEFAULT_HISTORY_PATH};
use format::{
    format_ack, format_advisory, format_error, format_error_message, format_history, format_issues,
    OutputMode,
};
use parse::{matches_to_action, CliAction};
use state::HistoryStore;

fn main() {
    let cli = build_cli();
    let matches = cli.get_matches();

    logging::init(matches.get_count("verbose"));

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_error_message(&e, output_mode));
            process::exit(1);
        }
    };

    let paths = Paths::from_matches(&matches);
    match run(action, &paths, output_mode) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    }
}

/// Files the CLI reads and writes.
struct Paths {
    history: PathBuf,
    config: PathBuf,
}

impl Paths {
    /// `--config` defaults to `schengen.toml` next to the history file.
    fn from_matches(matches: &clap::ArgMatches) -> Self {
        let history = matches
            .get_one::<String>("history")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_PATH));
        let config = matches
            .get_one::<String>("config")
            .map(PathBuf::from)
            .unwrap_or_else(|| match history.parent() {
                Some(dir) => dir.join(CONFIG_FILE_NAME),
                None => PathBuf::from(CONFIG_FILE_NAME),
            });
        Paths { history, config }
    }
}

/// Execute one action, returning the text for stdout or the error for stderr.
fn run(action: CliAction, paths: &Paths, mode: OutputMode) -> Result<String, String> {
    let fail = |e: schengen_core::Error| format_error(&e, mode);

    match action {
        CliAction::Add(row) => {
            let mut store = HistoryStore::open(&paths.history).map_err(fail)?;
            store.add(row);
            warn_issues(&store, mode);
            store.save().map_err(fail)?;
            let index = store.history().stays.len() - 1;
            Ok(format_ack(&format!("Added stay {}", index), mode))
        }
        CliAction::Remove(index) => {
            let mut store = HistoryStore::open(&paths.history).map_err(fail)?;
            let removed = store.remove(index).ok_or_else(|| {
                format_error_message(
                    &format!(
                        "No stay at index {} ({} recorded)",
                        index,
                        store.history().stays.len()
                    ),
                    mode,
                )
            })?;
            store.save().map_err(fail)?;
            Ok(format_ack(
                &format!("Removed stay {} -> {}", removed.entry, removed.exit),
                mode,
            ))
        }
        CliAction::List => {
            let store = HistoryStore::open(&paths.history).map_err(fail)?;
            let history = store.history();
            let issues = validate_rows(&history.stays, history.rejoin_date.as_deref());
            Ok(format_history(history, &issues, mode))
        }
        CliAction::SetRejoin(date) => {
            let mut store = HistoryStore::open(&paths.history).map_err(fail)?;
            store.set_rejoin_date(date.trim());
            warn_issues(&store, mode);
            store.save().map_err(fail)?;
            Ok(format_ack(&format!("Rejoin date set to {}", date.trim()), mode))
        }
        CliAction::Check {
            rejoin,
            stays,
            use_history,
        } => {
            let config = EngineConfig::load_or_default(&paths.config).map_err(fail)?;
            let engine = Engine::new(config).map_err(fail)?;

            let (mut rows, stored_rejoin): (Vec<RawInterval>, Option<String>) = if use_history {
                let store = HistoryStore::open(&paths.history).map_err(fail)?;
                let history = store.history().clone();
                (history.stays, history.rejoin_date)
            } else {
                (Vec::new(), None)
            };
            rows.extend(stays);
            let rejoin = rejoin.or(stored_rejoin);

            if mode == OutputMode::Human {
                let problems = format_issues(&validate_rows(&rows, rejoin.as_deref()));
                if !problems.is_empty() {
                    eprintln!("{}", problems);
                }
            }

            let advisory = engine.project(&rows, rejoin.as_deref()).map_err(fail)?;
            Ok(format_advisory(&advisory, mode))
        }
        CliAction::ConfigInit => {
            EngineConfig::write_default_if_missing(&paths.config).map_err(fail)?;
            info!(path = %paths.config.display(), "Config file ready");
            Ok(format_ack(
                &format!("Config at {}", paths.config.display()),
                mode,
            ))
        }
    }
}

/// Print validation problems for the stored history to stderr.
fn warn_issues(store: &HistoryStore, mode: OutputMode) {
    if mode != OutputMode::Human {
        return;
    }
    let history = store.history();
    let problems = format_issues(&validate_rows(
        &history.stays,
        history.rejoin_date.as_deref(),
    ));
    if !problems.is_empty() {
        eprintln!("{}", problems);
    }
}
