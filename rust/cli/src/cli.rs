//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tablestakes",
    version,
    about = "Texas Hold'em rules engine: deal, evaluate and simulate hands"
)]
pub struct TablestakesCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal one hand, check it down and show every hole card and the board
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: Option<u8>,
    },
    /// Rank the best hand from two hole cards and up to five board cards
    Eval {
        /// Cards such as `As Kd 10h`; the first two are the hole cards
        #[arg(required = true, num_args = 2..=7)]
        cards: Vec<String>,
        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play hands between advisory participants and record them as JSONL
    Sim {
        #[arg(long, default_value_t = 100)]
        hands: u64,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// Hand history file; omitted means no history is written
        #[arg(long)]
        output: Option<String>,
        /// Advisor name, or `mixed` for one personality per seat
        #[arg(long)]
        advisor: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

pub const COMMANDS: &[&str] = &["deal", "eval", "sim", "cfg"];
