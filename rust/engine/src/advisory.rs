use serde::{Deserialize, Serialize};

use crate::errors::AdvisoryError;
use crate::game::GameState;
use crate::logger::ActionRecord;
use crate::player::{ActionKind, Participant};

/// An action chosen by an advisory source. It is validated like any other
/// proposal before it touches the table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    #[serde(alias = "actionType", alias = "action")]
    pub kind: ActionKind,
    /// Raise target; ignored for other kinds
    #[serde(default)]
    pub amount: Option<u32>,
}

impl Decision {
    pub fn fold() -> Self {
        Self {
            kind: ActionKind::Fold,
            amount: None,
        }
    }
    pub fn check() -> Self {
        Self {
            kind: ActionKind::Check,
            amount: None,
        }
    }
    pub fn call() -> Self {
        Self {
            kind: ActionKind::Call,
            amount: None,
        }
    }
    pub fn raise_to(target: u32) -> Self {
        Self {
            kind: ActionKind::Raise,
            amount: Some(target),
        }
    }

    /// Parse a JSON payload such as `{"kind":"raise","amount":40}`.
    pub fn from_json(payload: &str) -> Result<Self, AdvisoryError> {
        let decision: Decision = serde_json::from_str(payload.trim())
            .map_err(|e| AdvisoryError::Malformed(e.to_string()))?;
        if decision.kind == ActionKind::Raise && decision.amount.is_none() {
            return Err(AdvisoryError::Malformed(
                "raise without an amount".to_string(),
            ));
        }
        Ok(decision)
    }
}

/// A pluggable decision source for advisory-controlled participants.
///
/// Implementations see the participant being asked, a copy of the table and
/// the action log for the hand. Whatever they return is only a proposal.
pub trait Advisor {
    fn name(&self) -> &str;

    fn decide(
        &self,
        participant: &Participant,
        state: &GameState,
        log: &[ActionRecord],
    ) -> Result<Decision, AdvisoryError>;
}

impl<A: Advisor + ?Sized> Advisor for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(
        &self,
        participant: &Participant,
        state: &GameState,
        log: &[ActionRecord],
    ) -> Result<Decision, AdvisoryError> {
        (**self).decide(participant, state, log)
    }
}

/// Everything an advisor needs, detached from the engine so it can be sent
/// to another thread while the engine waits.
#[derive(Debug, Clone)]
pub struct DecisionRequest {
    pub ticket: u64,
    pub participant: Participant,
    pub state: GameState,
    pub log: Vec<ActionRecord>,
}

impl DecisionRequest {
    pub fn ask(&self, advisor: &dyn Advisor) -> Result<Decision, AdvisoryError> {
        advisor.decide(&self.participant, &self.state, &self.log)
    }
}
