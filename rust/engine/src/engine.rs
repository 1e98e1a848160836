use tracing::{error, warn};

use crate::advisory::{Advisor, Decision, DecisionRequest};
use crate::config::TableConfig;
use crate::errors::{AdvisoryError, GameError};
use crate::game::{GameState, Phase, TableSnapshot};
use crate::player::{ActionKind, RosterEntry, SeatIndex};

#[derive(Debug, Clone)]
struct PendingDecision {
    ticket: u64,
    seat: SeatIndex,
    participant: String,
}

/// Owns the table and serializes everything that changes it.
///
/// Completed betting rounds are dealt onward automatically. At most one
/// advisory decision may be outstanding at a time; while it is, a second
/// solicitation and any direct proposal on behalf of the waiting participant
/// are refused. A fatal error halts the engine and every later call returns
/// [`GameError::Halted`].
///
/// # Examples
///
/// ```
/// use tablestakes_engine::config::TableConfig;
/// use tablestakes_engine::engine::Engine;
/// use tablestakes_engine::game::Phase;
/// use tablestakes_engine::player::{ActionKind, RosterEntry};
///
/// let roster = vec![RosterEntry::human("ann", 100), RosterEntry::human("bob", 100)];
/// let mut engine = Engine::start(roster, TableConfig::with_blinds(1, 2).seed(3)).unwrap();
///
/// // Heads-up the dealer posts the small blind and acts first.
/// engine.propose_action("ann", ActionKind::Call, None).unwrap();
/// engine.propose_action("bob", ActionKind::Check, None).unwrap();
/// assert_eq!(engine.state().phase(), Phase::Flop);
/// assert_eq!(engine.state().community().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    pending: Option<PendingDecision>,
    next_ticket: u64,
    halted: bool,
}

impl Engine {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            pending: None,
            next_ticket: 1,
            halted: false,
        }
    }

    /// Seat `roster` and deal the first hand.
    pub fn start(roster: Vec<RosterEntry>, config: TableConfig) -> Result<Self, GameError> {
        let state = GameState::new(roster, config)?.begin_hand()?;
        let mut engine = Self::new(state);
        engine.settle()?;
        Ok(engine)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> TableSnapshot {
        self.state.snapshot()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Id of the participant an advisory decision is outstanding for.
    pub fn decision_in_flight(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.participant.as_str())
    }

    pub fn propose_action(
        &mut self,
        participant_id: &str,
        kind: ActionKind,
        amount: Option<u32>,
    ) -> Result<&GameState, GameError> {
        self.ensure_running()?;
        if let Some(pending) = &self.pending {
            if pending.participant == participant_id {
                return Err(GameError::DecisionInFlight {
                    participant: pending.participant.clone(),
                });
            }
        }
        let next = self.state.propose_action(participant_id, kind, amount);
        self.commit(next)
    }

    /// Deal onward if the current round is complete. Normally a no-op since
    /// proposals already advance.
    pub fn advance_if_round_complete(&mut self) -> Result<&GameState, GameError> {
        self.ensure_running()?;
        let next = self.state.advance_if_round_complete();
        self.commit(next)
    }

    pub fn next_hand(&mut self) -> Result<&GameState, GameError> {
        self.ensure_running()?;
        if let Some(pending) = &self.pending {
            return Err(GameError::DecisionInFlight {
                participant: pending.participant.clone(),
            });
        }
        let next = self.state.next_hand();
        self.commit(next)
    }

    /// Solicit a decision for the active participant, who must be
    /// advisory-controlled. The returned request carries a ticket that must
    /// be handed back to [`Engine::resolve_decision`].
    pub fn request_decision(&mut self) -> Result<DecisionRequest, GameError> {
        self.ensure_running()?;
        if let Some(pending) = &self.pending {
            return Err(GameError::DecisionInFlight {
                participant: pending.participant.clone(),
            });
        }
        let participant = self
            .state
            .active_participant()
            .ok_or_else(|| GameError::invalid("No participant is due to act"))?
            .clone();
        if !participant.is_advisory() {
            return Err(GameError::invalid(format!(
                "{} is not advisory-controlled",
                participant.id()
            )));
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(PendingDecision {
            ticket,
            seat: participant.seat(),
            participant: participant.id().to_string(),
        });
        Ok(DecisionRequest {
            ticket,
            participant,
            state: self.state.clone(),
            log: self.state.action_log().to_vec(),
        })
    }

    /// Apply the outcome of a solicited decision and clear the gate.
    ///
    /// A failed, malformed or illegal decision folds the participant; the
    /// failure is logged, never surfaced.
    pub fn resolve_decision(
        &mut self,
        ticket: u64,
        outcome: Result<Decision, AdvisoryError>,
    ) -> Result<&GameState, GameError> {
        self.ensure_running()?;
        let pending = match &self.pending {
            None => return Err(GameError::NoDecisionPending),
            Some(p) if p.ticket != ticket => return Err(GameError::StaleDecision { ticket }),
            Some(p) => p.clone(),
        };
        self.pending = None;
        let id = pending.participant.as_str();

        let proposal = match outcome {
            Ok(decision) => self.state.propose_action(id, decision.kind, decision.amount),
            Err(e) => {
                let failure = GameError::from(e);
                warn!(participant = id, seat = pending.seat, error = %failure, "advisory decision failed; folding");
                return self.fold_for(id);
            }
        };
        match proposal {
            Err(e) if !e.is_fatal() => {
                warn!(participant = id, seat = pending.seat, error = %e, "advisory decision rejected; folding");
                self.fold_for(id)
            }
            other => self.commit(other),
        }
    }

    /// Ask `advisor` for the active participant's action and apply it.
    pub fn consult(&mut self, advisor: &dyn Advisor) -> Result<&GameState, GameError> {
        let request = self.request_decision()?;
        let outcome = request.ask(advisor);
        self.resolve_decision(request.ticket, outcome)
    }

    fn fold_for(&mut self, id: &str) -> Result<&GameState, GameError> {
        let next = self.state.propose_action(id, ActionKind::Fold, None);
        self.commit(next)
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.halted {
            Err(GameError::Halted)
        } else {
            Ok(())
        }
    }

    fn commit(&mut self, next: Result<GameState, GameError>) -> Result<&GameState, GameError> {
        match next {
            Ok(state) => {
                self.state = state;
                self.settle()?;
                Ok(&self.state)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Deal onward through every round that is already complete.
    fn settle(&mut self) -> Result<(), GameError> {
        while self.state.round().complete
            && !matches!(self.state.phase(), Phase::Setup | Phase::Showdown)
        {
            match self.state.advance_if_round_complete() {
                Ok(next) => self.state = next,
                Err(e) => return Err(self.fail(e)),
            }
        }
        Ok(())
    }

    fn fail(&mut self, e: GameError) -> GameError {
        if e.is_fatal() {
            error!(hand = self.state.hand_number(), error = %e, "fatal error; engine halted");
            self.halted = true;
            self.pending = None;
        }
        e
    }
}
