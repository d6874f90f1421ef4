//! Clap argument definition.
//!
//! SimpleDB commands themselves arrive on the line protocol, not as
//! subcommands; clap only parses the process flags.

use clap::{Arg, ArgAction, Command};

/// Build the CLI argument tree.
pub fn build_cli() -> Command {
    Command::new("simpledb")
        .about("In-memory key/value store with nested transactions")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Read shell settings from a TOML file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Diagnostics written to stderr: off, error, warn, info, debug, trace"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit one JSON object per response instead of the text protocol")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-history")
                .long("no-history")
                .help("Do not load or save REPL history")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .short('f')
                .value_name("FILE")
                .help("Read commands from a file instead of stdin")
                .conflicts_with("exec"),
        )
        .arg(
            Arg::new("print-config")
                .long("print-config")
                .help("Print a commented default config file and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exec")
                .long("exec")
                .short('e')
                .value_name("COMMAND")
                .help("Run a command and exit (repeatable, runs in order)")
                .action(ArgAction::Append),
        )
}
