use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

pub type SeatIndex = usize;

/// The four actions a participant can propose.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    /// Raise to an explicit target amount
    Raise,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
        })
    }
}

impl FromStr for ActionKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(ActionKind::Fold),
            "check" => Ok(ActionKind::Check),
            "call" => Ok(ActionKind::Call),
            "raise" | "bet" => Ok(ActionKind::Raise),
            other => Err(GameError::invalid(format!("Unknown action: {other}"))),
        }
    }
}

/// Behavioural label for advisory-controlled participants. The engine
/// carries it but never branches on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Aggressive,
    Conservative,
    Balanced,
    Unpredictable,
    Mathematical,
}

impl Personality {
    pub const ALL: [Personality; 5] = [
        Personality::Aggressive,
        Personality::Conservative,
        Personality::Balanced,
        Personality::Unpredictable,
        Personality::Mathematical,
    ];
}

/// One seat's worth of session setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub stack: u32,
    pub advisory: bool,
    #[serde(default)]
    pub personality: Option<Personality>,
}

impl RosterEntry {
    pub fn human(id: impl Into<String>, stack: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            stack,
            advisory: false,
            personality: None,
        }
    }

    pub fn advisory(id: impl Into<String>, stack: u32, personality: Option<Personality>) -> Self {
        Self {
            advisory: true,
            personality,
            ..Self::human(id, stack)
        }
    }
}

/// A seated participant and their per-hand betting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    id: String,
    name: String,
    seat: SeatIndex,
    stack: u32,
    /// Empty when folded or not dealt in, otherwise exactly two cards
    hole: Vec<Card>,
    /// Chips put in during the current betting round
    committed: u32,
    /// Chips put in across the whole hand, used to layer the pot
    total_committed: u32,
    folded: bool,
    has_acted: bool,
    advisory: bool,
    personality: Option<Personality>,
}

impl Participant {
    pub fn new(seat: SeatIndex, entry: RosterEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            seat,
            stack: entry.stack,
            hole: Vec::with_capacity(2),
            committed: 0,
            total_committed: 0,
            folded: false,
            has_acted: false,
            advisory: entry.advisory,
            personality: entry.personality,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn seat(&self) -> SeatIndex {
        self.seat
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn committed(&self) -> u32 {
        self.committed
    }
    pub fn total_committed(&self) -> u32 {
        self.total_committed
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }
    pub fn is_advisory(&self) -> bool {
        self.advisory
    }
    pub fn personality(&self) -> Option<Personality> {
        self.personality
    }

    /// Holding cards, so still eligible for the pot.
    pub fn in_hand(&self) -> bool {
        !self.hole.is_empty()
    }

    pub fn is_all_in(&self) -> bool {
        self.in_hand() && self.stack == 0
    }

    /// Still in the hand with chips behind: will be asked to act.
    pub fn can_act(&self) -> bool {
        self.in_hand() && self.stack > 0
    }

    pub(crate) fn deal(&mut self, cards: [Card; 2]) {
        self.hole.clear();
        self.hole.extend_from_slice(&cards);
    }

    /// Move chips from the stack into this round's commitment.
    pub(crate) fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::StateInvariantViolation(format!(
                "{} cannot commit {} with a stack of {}",
                self.id, amount, self.stack
            )));
        }
        self.stack -= amount;
        self.committed += amount;
        self.total_committed += amount;
        Ok(())
    }

    pub(crate) fn award(&mut self, amount: u32) {
        self.stack += amount;
    }

    pub(crate) fn fold(&mut self) {
        self.hole.clear();
        self.folded = true;
        self.has_acted = true;
    }

    pub(crate) fn set_acted(&mut self, acted: bool) {
        self.has_acted = acted;
    }

    pub(crate) fn reset_round(&mut self) {
        self.committed = 0;
        self.has_acted = false;
    }

    pub(crate) fn reset_hand(&mut self) {
        self.reset_round();
        self.hole.clear();
        self.total_committed = 0;
        self.folded = false;
    }
}
