use crate::errors::GameError;
use crate::game::{GameState, Phase};
use crate::player::{ActionKind, SeatIndex};

/// A proposal that passed validation, resolved to concrete chip amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    /// A fold from someone already out of the hand. Changes nothing.
    Noop,
    Fold,
    Check,
    /// Chips added to match the current bet, or the whole stack when short.
    Call { amount: u32, all_in: bool },
    /// New total commitment for the round.
    Raise { to: u32, all_in: bool },
}

/// Validates a proposed action for the participant in `seat`.
///
/// Rules apply in a fixed order and the first failure wins:
///
/// 1. A participant out of the hand may only fold, which is a no-op. A
///    participant with no chips may only fold.
/// 2. Nothing is accepted before the hand starts or once the round is
///    complete, unless the hand is at showdown.
/// 3. Only the active participant may act.
/// 4. Fold is always allowed.
/// 5. Check requires having matched the current bet.
/// 6. Call requires an outstanding bet. A short stack calls all-in.
/// 7. Raise needs a target of at least `max(2 * current_bet, current_bet +
///    min_raise)` and enough chips to reach it. Raising the entire stack is
///    always allowed; if that does not exceed the current bet it is an
///    all-in call.
///
/// # Errors
///
/// Returns [`GameError::InvalidAction`] carrying the rejection reason, or
/// [`GameError::UnknownParticipant`] for a seat that does not exist.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::config::TableConfig;
/// use tablestakes_engine::game::GameState;
/// use tablestakes_engine::player::{ActionKind, RosterEntry};
/// use tablestakes_engine::rules::{validate_action, ValidatedAction};
///
/// let roster = vec![
///     RosterEntry::human("a", 100),
///     RosterEntry::human("b", 100),
///     RosterEntry::human("c", 100),
/// ];
/// let state = GameState::new(roster, TableConfig::with_blinds(1, 2).seed(7))
///     .unwrap()
///     .begin_hand()
///     .unwrap();
///
/// // Seat 0 is first to act after the big blind.
/// assert_eq!(
///     validate_action(&state, 0, ActionKind::Call, None),
///     Ok(ValidatedAction::Call { amount: 2, all_in: false })
/// );
/// assert!(validate_action(&state, 1, ActionKind::Call, None).is_err());
/// ```
pub fn validate_action(
    state: &GameState,
    seat: SeatIndex,
    kind: ActionKind,
    amount: Option<u32>,
) -> Result<ValidatedAction, GameError> {
    let p = state
        .participants()
        .get(seat)
        .ok_or_else(|| GameError::UnknownParticipant(format!("seat {seat}")))?;

    if !p.in_hand() {
        return match kind {
            ActionKind::Fold => Ok(ValidatedAction::Noop),
            _ => Err(GameError::invalid("Participant is no longer in the hand")),
        };
    }
    if p.stack() == 0 && kind != ActionKind::Fold {
        return Err(GameError::invalid("Player has no chips remaining"));
    }

    let round = state.round();
    if state.phase() == Phase::Setup {
        return Err(GameError::invalid("No hand in progress"));
    }
    if round.complete && state.phase() != Phase::Showdown {
        return Err(GameError::invalid("Betting round is complete"));
    }

    if state.active_seat() != Some(seat) {
        return Err(GameError::invalid("Not your turn"));
    }

    let current = round.current_bet;
    match kind {
        ActionKind::Fold => Ok(ValidatedAction::Fold),
        ActionKind::Check => {
            if p.committed() < current {
                Err(GameError::invalid("Cannot check when there is an active bet"))
            } else {
                Ok(ValidatedAction::Check)
            }
        }
        ActionKind::Call => {
            if p.committed() >= current {
                return Err(GameError::invalid("No bet to call"));
            }
            let owed = current - p.committed();
            if owed >= p.stack() {
                Ok(ValidatedAction::Call {
                    amount: p.stack(),
                    all_in: true,
                })
            } else {
                Ok(ValidatedAction::Call {
                    amount: owed,
                    all_in: false,
                })
            }
        }
        ActionKind::Raise => {
            let target = amount.ok_or_else(|| GameError::invalid("Must specify raise amount"))?;
            let all_in_target = p.stack() + p.committed();
            if target == all_in_target {
                if target <= current {
                    return Ok(ValidatedAction::Call {
                        amount: p.stack(),
                        all_in: true,
                    });
                }
                return Ok(ValidatedAction::Raise {
                    to: target,
                    all_in: true,
                });
            }
            let minimum = min_raise_target(state);
            if target < minimum {
                return Err(GameError::invalid(format!(
                    "Raise must be at least {minimum} chips"
                )));
            }
            if target > all_in_target {
                return Err(GameError::invalid("Not enough chips to raise"));
            }
            Ok(ValidatedAction::Raise { to: target, all_in: false })
        }
    }
}

/// Smallest legal raise target for the current round.
pub fn min_raise_target(state: &GameState) -> u32 {
    let round = state.round();
    let doubled = round.current_bet.saturating_mul(2);
    doubled.max(round.current_bet.saturating_add(round.min_raise))
}

/// Chips `seat` must add to match the current bet.
pub fn to_call(state: &GameState, seat: SeatIndex) -> u32 {
    state
        .participants()
        .get(seat)
        .map(|p| state.round().current_bet.saturating_sub(p.committed()))
        .unwrap_or(0)
}

/// Share of the final pot a call would represent, as a percentage.
pub fn pot_odds(state: &GameState, seat: SeatIndex) -> f64 {
    let call = to_call(state, seat) as f64;
    if call == 0.0 {
        return 0.0;
    }
    call / (state.pot() as f64 + call) * 100.0
}

/// Pot odds counting chips expected to go in later in the hand.
pub fn implied_odds(state: &GameState, seat: SeatIndex, future_bets: u32) -> f64 {
    let call = to_call(state, seat) as f64;
    if call == 0.0 {
        return 0.0;
    }
    call / (state.pot() as f64 + call + future_bets as f64) * 100.0
}

/// 0..=1 by how late `seat` acts after the flop; the dealer scores 1.
pub fn position_strength(state: &GameState, seat: SeatIndex) -> f64 {
    let n = state.participants().len();
    if n == 0 {
        return 0.0;
    }
    let distance = (seat + n - state.dealer() + n - 1) % n + 1;
    distance as f64 / n as f64
}

/// 1 for preflop through 4 for the river, 0 outside betting.
pub fn betting_round_number(phase: Phase) -> u8 {
    match phase {
        Phase::Preflop => 1,
        Phase::Flop => 2,
        Phase::Turn => 3,
        Phase::River => 4,
        Phase::Setup | Phase::Showdown => 0,
    }
}
