use serde::{Deserialize, Serialize};

use crate::player::{Participant, SeatIndex};

/// Betting state for the street in progress.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// Amount every contester must have committed this round to stay in
    pub current_bet: u32,
    /// Size of the last full raise increment
    pub min_raise: u32,
    pub last_raiser: Option<SeatIndex>,
    /// Seats still holding cards
    pub contesting: Vec<SeatIndex>,
    /// Seat whose non-raising action ends the round
    pub closing: Option<SeatIndex>,
    pub complete: bool,
}

impl RoundState {
    /// A finished, empty round. Used before the first hand and after showdown.
    pub fn closed() -> Self {
        Self {
            current_bet: 0,
            min_raise: 0,
            last_raiser: None,
            contesting: Vec::new(),
            closing: None,
            complete: true,
        }
    }

    /// Open a round where `first` acts first.
    pub fn open(
        participants: &[Participant],
        current_bet: u32,
        min_raise: u32,
        first: Option<SeatIndex>,
    ) -> Self {
        let contesting = participants
            .iter()
            .filter(|p| p.in_hand())
            .map(|p| p.seat())
            .collect();
        let mut round = Self {
            current_bet,
            min_raise,
            last_raiser: None,
            contesting,
            closing: first.and_then(|s| seat_before(participants, s)),
            complete: false,
        };
        round.refresh(participants, None);
        round
    }

    pub fn is_contesting(&self, seat: SeatIndex) -> bool {
        self.contesting.contains(&seat)
    }

    pub(crate) fn remove(&mut self, seat: SeatIndex) {
        self.contesting.retain(|&s| s != seat);
    }

    /// Register a raise to `target` by `seat`.
    pub(crate) fn raise(&mut self, participants: &[Participant], seat: SeatIndex, target: u32) {
        let increment = target.saturating_sub(self.current_bet);
        self.min_raise = self.min_raise.max(increment);
        self.current_bet = target;
        self.last_raiser = Some(seat);
        self.closing = seat_before(participants, seat).filter(|&s| s != seat);
    }

    /// Recompute `complete` after `acted` (if any) finished an action.
    /// `raised` marks an action that reopened the betting.
    pub(crate) fn refresh(&mut self, participants: &[Participant], acted: Option<(SeatIndex, bool)>) {
        self.complete = self.is_settled(participants, acted);
    }

    fn is_settled(&self, participants: &[Participant], acted: Option<(SeatIndex, bool)>) -> bool {
        if self.contesting.len() <= 1 {
            return true;
        }
        let contesters = || self.contesting.iter().filter_map(|&s| participants.get(s));

        let all_matched = contesters()
            .all(|p| p.stack() == 0 || (p.has_acted() && p.committed() == self.current_bet));
        if all_matched {
            return true;
        }

        if let (Some((seat, false)), Some(closing)) = (acted, self.closing) {
            if seat == closing {
                return true;
            }
        }

        // Nobody left to bet against: at most one seat with chips, and it owes nothing.
        let actors: Vec<&Participant> = contesters().filter(|p| p.stack() > 0).collect();
        match actors.as_slice() {
            [] => true,
            [only] => only.committed() >= self.current_bet,
            _ => false,
        }
    }
}

/// Next seat clockwise from `from` (exclusive) that still has a decision to
/// make, wrapping once around the table.
pub fn next_to_act(participants: &[Participant], from: SeatIndex) -> Option<SeatIndex> {
    let n = participants.len();
    (1..=n)
        .map(|step| (from + step) % n)
        .find(|&s| participants[s].can_act())
}

/// Nearest seat counter-clockwise from `seat` (exclusive) that can act. May
/// wrap back to `seat` itself when it is the only one.
pub fn seat_before(participants: &[Participant], seat: SeatIndex) -> Option<SeatIndex> {
    let n = participants.len();
    (1..=n)
        .map(|step| (seat + n - step % n) % n)
        .find(|&s| participants[s].can_act())
}

/// Next seat clockwise from `from` with chips behind, ignoring hand status.
/// Used to place the button and blinds.
pub fn next_funded(participants: &[Participant], from: SeatIndex) -> Option<SeatIndex> {
    let n = participants.len();
    (1..=n)
        .map(|step| (from + step) % n)
        .find(|&s| participants[s].stack() > 0)
}
