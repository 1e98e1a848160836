//! # tablestakes-ai: Advisory Decision Sources
//!
//! Implementations of the engine's [`Advisor`] capability for
//! advisory-controlled participants. Every decision is only a proposal: the
//! engine validates it and folds the participant if it is illegal.
//!
//! ## Core Components
//!
//! - [`baseline`] - Deterministic rule-based advisor
//! - [`personality`] - Advisors that play a [`Personality`]
//! - [`strength`] - Hand strength heuristics shared by the advisors
//! - [`create_advisor`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_ai::create_advisor;
//! use tablestakes_engine::config::TableConfig;
//! use tablestakes_engine::engine::Engine;
//! use tablestakes_engine::player::RosterEntry;
//!
//! let advisor = create_advisor("baseline", 7).unwrap();
//! let roster = vec![
//!     RosterEntry::advisory("bot", 100, None),
//!     RosterEntry::human("ann", 100),
//! ];
//! let mut engine = Engine::start(roster, TableConfig::with_blinds(1, 2).seed(7)).unwrap();
//! engine.consult(&advisor).unwrap();
//! assert!(engine.decision_in_flight().is_none());
//! ```

use thiserror::Error;

pub use tablestakes_engine::advisory::{Advisor, Decision};
use tablestakes_engine::errors::AdvisoryError;
use tablestakes_engine::game::GameState;
use tablestakes_engine::logger::ActionRecord;
pub use tablestakes_engine::player::Personality;
use tablestakes_engine::player::Participant;

pub mod baseline;
pub mod personality;
pub mod strength;

/// An advisor that can be shared with a worker thread.
pub type SharedAdvisor = Box<dyn Advisor + Send + Sync>;

/// Names accepted by [`create_advisor`].
pub const ADVISOR_NAMES: [&str; 7] = [
    "baseline",
    "folding",
    "aggressive",
    "conservative",
    "balanced",
    "unpredictable",
    "mathematical",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown advisor {0:?}")]
pub struct UnknownAdvisor(pub String);

/// Folds at every decision.
#[derive(Debug, Clone, Default)]
pub struct FoldingAdvisor;

impl Advisor for FoldingAdvisor {
    fn name(&self) -> &str {
        "folding"
    }

    fn decide(
        &self,
        _participant: &Participant,
        _state: &GameState,
        _log: &[ActionRecord],
    ) -> Result<Decision, AdvisoryError> {
        Ok(Decision::fold())
    }
}

/// Build an advisor by name. `seed` drives any randomness it uses.
///
/// ```rust
/// use tablestakes_ai::create_advisor;
///
/// assert_eq!(create_advisor("mathematical", 1).unwrap().name(), "mathematical");
/// assert!(create_advisor("oracle", 1).is_err());
/// ```
pub fn create_advisor(name: &str, seed: u64) -> Result<SharedAdvisor, UnknownAdvisor> {
    let personality = match name.trim().to_ascii_lowercase().as_str() {
        "baseline" => return Ok(Box::new(baseline::BaselineAdvisor::new())),
        "folding" => return Ok(Box::new(FoldingAdvisor)),
        "aggressive" => Personality::Aggressive,
        "conservative" => Personality::Conservative,
        "balanced" => Personality::Balanced,
        "unpredictable" => Personality::Unpredictable,
        "mathematical" => Personality::Mathematical,
        _ => return Err(UnknownAdvisor(name.to_string())),
    };
    Ok(Box::new(personality::PersonalityAdvisor::new(personality, seed)))
}

/// The advisor matching a participant's personality, or the baseline.
pub fn advisor_for(personality: Option<Personality>, seed: u64) -> SharedAdvisor {
    match personality {
        Some(p) => Box::new(personality::PersonalityAdvisor::new(p, seed)),
        None => Box::new(baseline::BaselineAdvisor::new()),
    }
}
