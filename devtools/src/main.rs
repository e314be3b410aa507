use crate::config::{Cli, Command};
use crate::errors::display_user_error;
use anyhow::Result;
use clap::Parser;
use devtools_history::{KeyValueStore, UsageHistoryStore};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod output;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            display_user_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

/// Run the command and return its exit status
fn run(cli: &Cli) -> Result<u8> {
    let history = cli.open_history()?;
    execute(&history, &cli.command, cli.json)
}

fn execute<S: KeyValueStore>(
    history: &UsageHistoryStore<S>,
    command: &Command,
    json: bool,
) -> Result<u8> {
    match command {
        Command::Record {
            tool_id,
            tool_name,
            tool_category,
        } => history.record(tool_id, tool_name, tool_category),
        Command::Remove { tool_id } => history.remove(tool_id),
        Command::Clear => history.clear(),
        Command::Recent { limit } => {
            let entries = history.recent(*limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{}", output::entries_table(&entries));
            }
        }
        Command::Top { limit } => {
            let entries = history.most_used(*limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{}", output::entries_table(&entries));
            }
        }
        Command::Contains { tool_id } => {
            let found = history.contains(tool_id);
            if json {
                println!("{found}");
            }
            return Ok(if found { 0 } else { 1 });
        }
        Command::Stats => {
            let stats = history.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", output::stats_table(&stats));
            }
        }
        Command::Dump => println!("{}", serde_json::to_string(&history.load())?),
    }
    Ok(0)
}
