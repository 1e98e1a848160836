//! Error types for the CLI application.
//!
//! Command handlers return [`CliError`] and `run` maps every variant to
//! exit code [`crate::exit_code::ERROR`].

use tablestakes_ai::UnknownAdvisor;
use tablestakes_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (hand history files, stdout/stderr writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    #[error("{0}")]
    Advisor(#[from] UnknownAdvisor),

    /// The async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),
}
