//! # tablestakes CLI Library
//!
//! Command-line driver for the tablestakes Hold'em engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code. Output streams are injected so tests can capture them.
//!
//! ```
//! use std::io;
//! let args = vec!["tablestakes", "eval", "As", "Ks", "Qs", "Js", "10s"];
//! let code = tablestakes_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal and check down a single hand for inspection
//! - `eval`: Rank the best hand from hole and board cards
//! - `sim`: Play advisory-only sessions and write JSONL hand histories
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{COMMANDS, Commands, TablestakesCli};
use commands::{
    SimOptions, handle_cfg_command, handle_deal_command, handle_eval_command, handle_sim_command,
};
pub use error::CliError;

/// Parse `args` and run the selected subcommand.
///
/// Returns [`exit_code::SUCCESS`] or [`exit_code::ERROR`]. Help and version
/// requests print to `out` and succeed.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TablestakesCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Eval { cards, json } => handle_eval_command(&cards, json, out),
        Commands::Sim {
            hands,
            players,
            seed,
            output,
            advisor,
        } => handle_sim_command(
            SimOptions {
                hands,
                players,
                seed,
                output,
                advisor,
            },
            out,
            err,
        ),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: tablestakes <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: tablestakes --help");
    exit_code::ERROR
}
