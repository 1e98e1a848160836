//! Command handlers, one module per subcommand.
//!
//! Each handler takes its parsed arguments plus the output streams and
//! returns `Result<(), CliError>`; `run` turns the error into an exit code.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use sim::{SimOptions, handle_sim_command};

use crate::config::{self, Config};
use crate::error::CliError;

/// Configuration with the command line flags laid over it.
pub(crate) fn session_config(
    seed: Option<u64>,
    players: Option<u8>,
    advisor: Option<&str>,
) -> Result<Config, CliError> {
    let mut cfg = config::load()?;
    if let Some(seed) = seed {
        cfg.seed = Some(seed);
    }
    if let Some(players) = players {
        cfg.players = usize::from(players);
    }
    if let Some(advisor) = advisor {
        cfg.advisor = advisor.trim().to_ascii_lowercase();
    }
    config::validate(&cfg)?;
    Ok(cfg)
}
