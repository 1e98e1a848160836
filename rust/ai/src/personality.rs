//! Advisors that play a [`Personality`].
//!
//! Each style starts from the baseline hand rating and bends it: aggressive
//! players inflate their hands and bluff, conservative ones deflate and never
//! bluff, mathematical ones compare hand strength with the price of a call,
//! unpredictable ones pick among legal actions at random. Randomness comes
//! from a seeded ChaCha20 stream so a session can be replayed.

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tablestakes_engine::advisory::{Advisor, Decision};
use tablestakes_engine::errors::AdvisoryError;
use tablestakes_engine::game::GameState;
use tablestakes_engine::logger::ActionRecord;
use tablestakes_engine::player::{Participant, Personality};
use tracing::{debug, trace};

use crate::baseline::BaselineAdvisor;
use crate::strength::{Situation, hand_strength};

#[derive(Debug)]
pub struct PersonalityAdvisor {
    personality: Personality,
    rng: Mutex<ChaCha20Rng>,
}

impl PersonalityAdvisor {
    pub fn new(personality: Personality, seed: u64) -> Self {
        Self {
            personality,
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// A float in 0..1 from the advisor's stream.
    fn roll(&self) -> Result<f32, AdvisoryError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AdvisoryError::Unavailable("random source poisoned".to_string()))?;
        Ok(rng.random::<f32>())
    }

    fn aggressive(&self, strength: u8, s: &Situation) -> Result<Decision, AdvisoryError> {
        let bluff = self.roll()? < 0.2;
        if s.can_raise() && (strength >= 6 || bluff) {
            if strength < 6 {
                debug!(strength, pot = s.pot, "aggressive bluff");
            }
            return Ok(Decision::raise_to(s.raise_to(s.pot)));
        }
        Ok(BaselineAdvisor::choose((strength + 2).min(10), s))
    }

    fn conservative(strength: u8, s: &Situation) -> Decision {
        if s.to_call > 0 && strength < 5 {
            return Decision::fold();
        }
        BaselineAdvisor::choose(strength.saturating_sub(1), s)
    }

    fn mathematical(strength: u8, s: &Situation) -> Decision {
        let equity = f32::from(strength) / 10.0;
        if equity >= 0.7 && s.can_raise() {
            return Decision::raise_to(s.raise_to(s.pot * 3 / 4));
        }
        match s.to_call {
            0 => Decision::check(),
            _ if equity > s.price() => Decision::call(),
            _ => Decision::fold(),
        }
    }

    fn unpredictable(&self, s: &Situation) -> Result<Decision, AdvisoryError> {
        let roll = self.roll()?;
        trace!(roll, to_call = s.to_call, "unpredictable roll");
        let passive = if s.to_call == 0 {
            Decision::check()
        } else {
            Decision::call()
        };
        Ok(match roll {
            r if r < 0.2 && s.to_call > 0 => Decision::fold(),
            r if r < 0.45 && s.can_raise() => {
                let extra = ((s.pot as f32) * (0.5 + roll)) as u32;
                Decision::raise_to(s.raise_to(extra))
            }
            _ => passive,
        })
    }
}

impl Advisor for PersonalityAdvisor {
    fn name(&self) -> &str {
        match self.personality {
            Personality::Aggressive => "aggressive",
            Personality::Conservative => "conservative",
            Personality::Balanced => "balanced",
            Personality::Unpredictable => "unpredictable",
            Personality::Mathematical => "mathematical",
        }
    }

    fn decide(
        &self,
        participant: &Participant,
        state: &GameState,
        _log: &[ActionRecord],
    ) -> Result<Decision, AdvisoryError> {
        let s = Situation::read(participant, state);
        let strength = hand_strength(participant, state);
        match self.personality {
            Personality::Aggressive => self.aggressive(strength, &s),
            Personality::Conservative => Ok(Self::conservative(strength, &s)),
            Personality::Balanced => Ok(BaselineAdvisor::choose(strength, &s)),
            Personality::Unpredictable => self.unpredictable(&s),
            Personality::Mathematical => Ok(Self::mathematical(strength, &s)),
        }
    }
}
