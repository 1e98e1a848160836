use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Validator rejection. Recoverable: the caller re-prompts.
    #[error("Invalid action: {reason}")]
    InvalidAction { reason: String },
    #[error("Deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Advisory failure: {0}")]
    AdvisoryFailure(String),
    #[error("State invariant violated: {0}")]
    StateInvariantViolation(String),
    #[error("A decision is already in flight for participant {participant}")]
    DecisionInFlight { participant: String },
    #[error("No advisory decision is pending")]
    NoDecisionPending,
    #[error("Decision ticket {ticket} is stale")]
    StaleDecision { ticket: u64 },
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),
    #[error("Not enough players with chips to deal a hand ({funded} funded)")]
    NotEnoughPlayers { funded: usize },
    #[error("Invalid setup: {0}")]
    InvalidSetup(String),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Engine halted after a fatal error")]
    Halted,
}

impl GameError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidAction {
            reason: reason.into(),
        }
    }

    /// Fatal errors abort the hand; the engine refuses further work after one.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::DeckExhausted { .. } | GameError::StateInvariantViolation(_)
        )
    }

    /// The rejection reason for validator errors.
    pub fn reason(&self) -> Option<&str> {
        match self {
            GameError::InvalidAction { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Failure reported by an advisory decision source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdvisoryError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),
    #[error("malformed decision: {0}")]
    Malformed(String),
    #[error("advisor timed out")]
    TimedOut,
}

impl From<AdvisoryError> for GameError {
    fn from(e: AdvisoryError) -> Self {
        GameError::AdvisoryFailure(e.to_string())
    }
}
