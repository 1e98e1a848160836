use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// What happens to chips that cannot be split evenly between tied winners.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddChipPolicy {
    /// Remainder leaves play and is tracked as rounding loss.
    #[default]
    Discard,
    /// Remainder goes to the first tied winner clockwise from the dealer.
    ClosestToButton,
}

/// Table stakes and session options.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Base seed for deck shuffles; hand `n` uses `seed + n`. A random seed
    /// is drawn and recorded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Seat holding the dealer button for the first hand.
    #[serde(default)]
    pub dealer: Option<usize>,
    #[serde(default)]
    pub odd_chip_policy: OddChipPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            seed: None,
            dealer: None,
            odd_chip_policy: OddChipPolicy::default(),
        }
    }
}

impl TableConfig {
    pub fn with_blinds(small_blind: u32, big_blind: u32) -> Self {
        Self {
            small_blind,
            big_blind,
            ..Self::default()
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn odd_chip_policy(mut self, policy: OddChipPolicy) -> Self {
        self.odd_chip_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 {
            return Err(GameError::InvalidSetup(
                "small blind must be positive".to_string(),
            ));
        }
        if self.big_blind < self.small_blind {
            return Err(GameError::InvalidSetup(format!(
                "big blind {} is below small blind {}",
                self.big_blind, self.small_blind
            )));
        }
        Ok(())
    }
}
