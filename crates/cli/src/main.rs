//! SimpleDB CLI - line-protocol shell for the SimpleDB store.
//!
//! Modes:
//! - **Exec mode**: `simpledb -e "SET a 1" -e "GET a"` - run the given lines, exit
//! - **Script mode**: `simpledb --script FILE` - read lines from a file
//! - **REPL mode**: `simpledb` - interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `printf 'SET a 1\nGET a\n' | simpledb` - line-by-line from stdin
//!
//! Responses go to stdout; diagnostics go to stderr. Outside the REPL an
//! interrupt ends the session like end of input.
//! `simpledb --print-config > simpledb.toml` writes a starting config file.

mod commands;
mod config;
mod format;
mod repl;
mod state;

use std::fs::File;
use std::io::{self, BufReader, Cursor, IsTerminal};
use std::path::Path;
use std::process;

use anyhow::Context;
use tracing::info;

use commands::build_cli;
use config::ShellConfig;
use format::OutputMode;
use repl::SessionEnd;
use state::SessionState;

fn main() {
    match run() {
        Ok(_) => process::exit(0),
        Err(e) => {
            eprintln!("(error) {:#}", e);
            process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<SessionEnd> {
    let matches = build_cli().get_matches();

    if matches.get_flag("print-config") {
        print!("{}", ShellConfig::default_toml());
        return Ok(SessionEnd::End);
    }

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ShellConfig::from_file(Path::new(path))?,
        None => ShellConfig::default(),
    };
    config.apply_flags(&matches);
    init_logging(&config)?;

    let mode = if config.json {
        OutputMode::Json
    } else {
        OutputMode::Protocol
    };
    let mut state = SessionState::new();

    let end = if let Some(lines) = matches.get_many::<String>("exec") {
        let script = lines.map(String::as_str).collect::<Vec<_>>().join("\n");
        repl::run_session(&mut state, Cursor::new(script), io::stdout().lock(), mode)?
    } else if let Some(path) = matches.get_one::<String>("script") {
        let file = File::open(path).with_context(|| format!("Failed to open script '{}'", path))?;
        end_on_interrupt()?;
        repl::run_session(&mut state, BufReader::new(file), io::stdout().lock(), mode)?
    } else if io::stdin().is_terminal() {
        let history = config.history_path();
        repl::run_repl(&mut state, mode, history.as_deref())?
    } else {
        end_on_interrupt()?;
        repl::run_pipe(&mut state, mode)?
    };

    let metrics = state.session().metrics();
    info!(
        target: "simpledb::session",
        ?end,
        commands = metrics.commands,
        errors = metrics.errors,
        commits = metrics.commits,
        "Session finished"
    );
    Ok(end)
}

/// Treat SIGINT outside the REPL like end of input.
///
/// Every response is flushed as it is written, so nothing is pending when
/// the handler exits.
fn end_on_interrupt() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        info!(target: "simpledb::session", end = ?SessionEnd::Eof, "Interrupted");
        process::exit(0);
    })
    .context("Failed to install interrupt handler")
}

/// Install the stderr subscriber. Stdout carries only protocol responses.
fn init_logging(config: &ShellConfig) -> anyhow::Result<()> {
    let level = config.level_filter()?;
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}
