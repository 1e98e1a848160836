//! Baseline advisor: a deterministic rule-based strategy.
//!
//! Preflop it rates the hole cards from a fixed table, postflop it rates the
//! made hand, then picks an action from strength and the price of calling.
//! The same state always produces the same decision, which keeps simulations
//! reproducible.

use tablestakes_engine::advisory::{Advisor, Decision};
use tablestakes_engine::errors::AdvisoryError;
use tablestakes_engine::game::GameState;
use tablestakes_engine::logger::ActionRecord;
use tablestakes_engine::player::Participant;

use crate::strength::{Situation, hand_strength};

/// # Example
///
/// ```rust
/// use tablestakes_ai::baseline::BaselineAdvisor;
/// use tablestakes_engine::advisory::Advisor;
/// use tablestakes_engine::config::TableConfig;
/// use tablestakes_engine::engine::Engine;
/// use tablestakes_engine::player::RosterEntry;
///
/// let roster = vec![
///     RosterEntry::advisory("bot", 100, None),
///     RosterEntry::human("ann", 100),
/// ];
/// let mut engine = Engine::start(roster, TableConfig::with_blinds(1, 2).seed(42)).unwrap();
/// let advisor = BaselineAdvisor::new();
/// assert_eq!(advisor.name(), "baseline");
/// engine.consult(&advisor).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAdvisor;

impl BaselineAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Pick an action for a hand rated `strength` (0-10).
    pub fn choose(strength: u8, s: &Situation) -> Decision {
        if s.to_call == 0 {
            return Self::unopened(strength, s);
        }

        // calling would put us all in
        if s.to_call >= s.stack {
            return if strength >= 7 {
                Decision::call()
            } else {
                Decision::fold()
            };
        }

        let price = s.price();
        match strength {
            9..=10 if s.can_raise() => Decision::raise_to(s.raise_to(s.pot / 2)),
            9..=10 | 7..=8 => Decision::call(),
            5..=6 if price <= 0.3 || s.to_call <= s.pot / 4 => Decision::call(),
            3..=4 if price <= 0.2 || s.to_call <= s.pot / 6 => Decision::call(),
            _ => Decision::fold(),
        }
    }

    fn unopened(strength: u8, s: &Situation) -> Decision {
        if !s.can_raise() {
            return Decision::check();
        }
        match strength {
            9..=10 => Decision::raise_to(s.raise_to(s.pot * 2 / 3)),
            7..=8 => Decision::raise_to(s.raise_to(s.pot / 2)),
            _ => Decision::check(),
        }
    }
}

impl Advisor for BaselineAdvisor {
    fn name(&self) -> &str {
        "baseline"
    }

    fn decide(
        &self,
        participant: &Participant,
        state: &GameState,
        _log: &[ActionRecord],
    ) -> Result<Decision, AdvisoryError> {
        let situation = Situation::read(participant, state);
        if participant.hole_cards().is_empty() {
            return Ok(if situation.to_call == 0 {
                Decision::check()
            } else {
                Decision::fold()
            });
        }
        let strength = hand_strength(participant, state);
        Ok(Self::choose(strength, &situation))
    }
}
