use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::betting::{next_funded, next_to_act, RoundState};
use crate::cards::Card;
use crate::config::{OddChipPolicy, TableConfig};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{compare, evaluate, HandRank};
use crate::logger::{ActionRecord, HandRecord, RecordedAction, ShowdownInfo};
use crate::player::{ActionKind, Participant, Personality, RosterEntry, SeatIndex};
use crate::pot::build_pots;
use crate::rules::{min_raise_target, validate_action, ValidatedAction};

/// Most seats a single deck can deal a hand to: two hole cards each plus the board.
pub const MAX_SEATS: usize = (52 - 5) / 2;

/// Pots and stacks are `u32`, so every chip at the table must fit in one.
pub const MAX_CHIPS_IN_PLAY: u64 = u32::MAX as u64;

/// Stage of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Seated, no cards dealt
    Setup,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    /// Community cards on the board once this phase is dealt.
    pub fn board_size(self) -> Option<usize> {
        match self {
            Phase::Setup | Phase::Preflop => Some(0),
            Phase::Flop => Some(3),
            Phase::Turn => Some(4),
            Phase::River => Some(5),
            Phase::Showdown => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Setup => "setup",
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        })
    }
}

/// One pot layer as it was paid out.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PotAward {
    pub amount: u32,
    pub eligible: Vec<SeatIndex>,
    pub winners: Vec<SeatIndex>,
    /// Paid to each winner
    pub share: u32,
    /// Chips left over after the even split
    pub remainder: u32,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RevealedHand {
    pub seat: SeatIndex,
    pub participant: String,
    pub hole_cards: Vec<Card>,
    pub rank: HandRank,
}

/// How the hand ended.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownResult {
    /// Everyone else folded; no cards were compared
    pub uncontested: bool,
    pub hands: Vec<RevealedHand>,
    pub pots: Vec<PotAward>,
}

impl ShowdownResult {
    /// Seats that won at least one pot, in seat order.
    pub fn winners(&self) -> Vec<SeatIndex> {
        let mut seats: Vec<SeatIndex> = self
            .pots
            .iter()
            .flat_map(|p| p.winners.iter().copied())
            .collect();
        seats.sort_unstable();
        seats.dedup();
        seats
    }

    pub fn total(&self) -> u32 {
        self.pots.iter().map(|p| p.amount).sum()
    }
}

/// Immutable table state. Every transition returns a new value and leaves
/// the receiver untouched, so a rejected proposal never needs rolling back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    participants: Vec<Participant>,
    config: TableConfig,
    phase: Phase,
    active: Option<SeatIndex>,
    pot: u32,
    community: Vec<Card>,
    deck: Deck,
    dealer: SeatIndex,
    small_blind_seat: Option<SeatIndex>,
    big_blind_seat: Option<SeatIndex>,
    hand_number: u32,
    base_seed: u64,
    round: RoundState,
    log: Vec<ActionRecord>,
    last_action: Option<String>,
    showdown: Option<ShowdownResult>,
    chips_in_play: u64,
    rounding_loss: u64,
}

/// Seat a roster and deal the first hand.
pub fn start_hand(
    roster: Vec<RosterEntry>,
    small_blind: u32,
    big_blind: u32,
    seed: Option<u64>,
) -> Result<GameState, GameError> {
    let config = TableConfig {
        seed,
        ..TableConfig::with_blinds(small_blind, big_blind)
    };
    GameState::new(roster, config)?.begin_hand()
}

impl GameState {
    /// Seat `roster` in order. The table starts in [`Phase::Setup`].
    pub fn new(roster: Vec<RosterEntry>, config: TableConfig) -> Result<Self, GameError> {
        config.validate()?;
        if roster.len() < 2 {
            return Err(GameError::InvalidSetup(
                "at least two participants are required".to_string(),
            ));
        }
        if roster.len() > MAX_SEATS {
            return Err(GameError::InvalidSetup(format!(
                "{} seats cannot be dealt from one deck (at most {MAX_SEATS})",
                roster.len()
            )));
        }
        let chips_in_play: u64 = roster.iter().map(|e| u64::from(e.stack)).sum();
        if chips_in_play > MAX_CHIPS_IN_PLAY {
            return Err(GameError::InvalidSetup(format!(
                "{chips_in_play} chips in play exceeds the table limit of {MAX_CHIPS_IN_PLAY}"
            )));
        }
        for (i, entry) in roster.iter().enumerate() {
            if roster[..i].iter().any(|e| e.id == entry.id) {
                return Err(GameError::InvalidSetup(format!(
                    "duplicate participant id {}",
                    entry.id
                )));
            }
        }
        let dealer = config.dealer.unwrap_or(0);
        if dealer >= roster.len() {
            return Err(GameError::InvalidSetup(format!(
                "dealer seat {dealer} is not at the table"
            )));
        }

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let participants: Vec<Participant> = roster
            .into_iter()
            .enumerate()
            .map(|(seat, entry)| Participant::new(seat, entry))
            .collect();

        Ok(Self {
            participants,
            config,
            phase: Phase::Setup,
            active: None,
            pot: 0,
            community: Vec::with_capacity(5),
            deck: Deck::shuffled(base_seed),
            dealer,
            small_blind_seat: None,
            big_blind_seat: None,
            hand_number: 0,
            base_seed,
            round: RoundState::closed(),
            log: Vec::new(),
            last_action: None,
            showdown: None,
            chips_in_play,
            rounding_loss: 0,
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn active_seat(&self) -> Option<SeatIndex> {
        self.active
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn dealer(&self) -> SeatIndex {
        self.dealer
    }
    pub fn small_blind_seat(&self) -> Option<SeatIndex> {
        self.small_blind_seat
    }
    pub fn big_blind_seat(&self) -> Option<SeatIndex> {
        self.big_blind_seat
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    pub fn round(&self) -> &RoundState {
        &self.round
    }
    pub fn action_log(&self) -> &[ActionRecord] {
        &self.log
    }
    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }
    pub fn showdown(&self) -> Option<&ShowdownResult> {
        self.showdown.as_ref()
    }
    pub fn chips_in_play(&self) -> u64 {
        self.chips_in_play
    }
    /// Odd chips discarded at showdown over the whole session.
    pub fn rounding_loss(&self) -> u64 {
        self.rounding_loss
    }

    /// Seed the current hand's deck was shuffled with.
    pub fn hand_seed(&self) -> u64 {
        self.base_seed.wrapping_add(u64::from(self.hand_number))
    }

    pub fn active_participant(&self) -> Option<&Participant> {
        self.active.and_then(|s| self.participants.get(s))
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id() == id)
    }

    pub fn seat_of(&self, id: &str) -> Result<SeatIndex, GameError> {
        self.participant(id)
            .map(Participant::seat)
            .ok_or_else(|| GameError::UnknownParticipant(id.to_string()))
    }

    /// Shuffle with the hand's seed, post blinds, deal hole cards.
    pub fn begin_hand(&self) -> Result<Self, GameError> {
        let seed = self.base_seed.wrapping_add(u64::from(self.hand_number + 1));
        self.begin_with(Deck::shuffled(seed))
    }

    /// Like [`GameState::begin_hand`] but deals from `deck` as given.
    pub fn begin_hand_with_deck(&self, deck: Deck) -> Result<Self, GameError> {
        self.begin_with(deck)
    }

    fn begin_with(&self, deck: Deck) -> Result<Self, GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::InvalidSetup(
                "a hand is already in progress".to_string(),
            ));
        }
        let funded: Vec<SeatIndex> = self
            .participants
            .iter()
            .filter(|p| p.stack() > 0)
            .map(Participant::seat)
            .collect();
        if funded.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                funded: funded.len(),
            });
        }
        let not_enough = || GameError::NotEnoughPlayers {
            funded: funded.len(),
        };

        let mut next = self.clone();
        next.hand_number += 1;
        next.deck = deck;
        next.pot = 0;
        next.community.clear();
        next.log.clear();
        next.last_action = None;
        next.showdown = None;
        for p in &mut next.participants {
            p.reset_hand();
        }

        if next.participants[next.dealer].stack() == 0 {
            next.dealer = next_funded(&next.participants, next.dealer).ok_or_else(not_enough)?;
        }
        // Heads-up the dealer posts the small blind.
        let (sb, bb) = if funded.len() == 2 {
            let bb = next_funded(&next.participants, next.dealer).ok_or_else(not_enough)?;
            (next.dealer, bb)
        } else {
            let sb = next_funded(&next.participants, next.dealer).ok_or_else(not_enough)?;
            let bb = next_funded(&next.participants, sb).ok_or_else(not_enough)?;
            (sb, bb)
        };
        next.small_blind_seat = Some(sb);
        next.big_blind_seat = Some(bb);
        next.phase = Phase::Preflop;

        for &seat in &funded {
            let hole = next.deck.deal(2)?;
            next.participants[seat].deal([hole[0], hole[1]]);
        }

        let small = next.config.small_blind;
        let big = next.config.big_blind;
        next.post_blind(sb, small, true)?;
        next.post_blind(bb, big, false)?;

        let first = next_to_act(&next.participants, bb);
        next.round = RoundState::open(&next.participants, big, big, first);
        next.active = if next.round.complete { None } else { first };

        info!(
            hand = next.hand_number,
            seed = next.hand_seed(),
            dealer = next.participants[next.dealer].id(),
            players = funded.len(),
            "hand started"
        );
        next.check_invariants()?;
        Ok(next)
    }

    fn post_blind(&mut self, seat: SeatIndex, amount: u32, small: bool) -> Result<(), GameError> {
        let paid = amount.min(self.participants[seat].stack());
        self.commit(seat, paid)?;
        let action = if small {
            RecordedAction::SmallBlind { amount: paid }
        } else {
            RecordedAction::BigBlind { amount: paid }
        };
        self.record(seat, action);
        Ok(())
    }

    /// Validate and apply one action. On success the returned state reflects
    /// the action; a completed round is left for
    /// [`GameState::advance_if_round_complete`] to deal onward.
    pub fn propose_action(
        &self,
        participant_id: &str,
        kind: ActionKind,
        amount: Option<u32>,
    ) -> Result<Self, GameError> {
        let seat = self.seat_of(participant_id)?;
        let action = validate_action(self, seat, kind, amount)?;
        if action == ValidatedAction::Noop {
            return Ok(self.clone());
        }
        let mut next = self.clone();
        next.apply(seat, action)?;
        next.check_invariants()?;
        Ok(next)
    }

    fn apply(&mut self, seat: SeatIndex, action: ValidatedAction) -> Result<(), GameError> {
        let (recorded, raised) = match action {
            ValidatedAction::Noop => return Ok(()),
            ValidatedAction::Fold => {
                self.participants[seat].fold();
                self.round.remove(seat);
                (RecordedAction::Fold, false)
            }
            ValidatedAction::Check => {
                self.participants[seat].set_acted(true);
                (RecordedAction::Check, false)
            }
            ValidatedAction::Call { amount, all_in } => {
                self.commit(seat, amount)?;
                self.participants[seat].set_acted(true);
                (RecordedAction::Call { amount, all_in }, false)
            }
            ValidatedAction::Raise { to, all_in } => {
                let add = to.saturating_sub(self.participants[seat].committed());
                self.commit(seat, add)?;
                self.round.raise(&self.participants, seat, to);
                for &s in &self.round.contesting {
                    self.participants[s].set_acted(s == seat);
                }
                (RecordedAction::Raise { to, all_in }, true)
            }
        };
        self.record(seat, recorded);

        if self.round.contesting.len() == 1 {
            return self.resolve_showdown();
        }
        self.round.refresh(&self.participants, Some((seat, raised)));
        self.active = if self.round.complete {
            None
        } else {
            next_to_act(&self.participants, seat)
        };
        Ok(())
    }

    fn commit(&mut self, seat: SeatIndex, amount: u32) -> Result<(), GameError> {
        self.participants[seat].commit(amount)?;
        self.pot += amount;
        Ok(())
    }

    fn record(&mut self, seat: SeatIndex, action: RecordedAction) {
        let p = &self.participants[seat];
        let entry = ActionRecord {
            hand: self.hand_number,
            phase: self.phase,
            seat,
            participant: p.id().to_string(),
            action,
        };
        debug!(hand = self.hand_number, phase = %self.phase, participant = p.id(), %action, "action");
        self.last_action = Some(format!("{} {}", p.name(), action));
        self.log.push(entry);
    }

    /// Deal the next street, or settle the hand after the river, once the
    /// betting round is complete. Otherwise returns an unchanged copy.
    pub fn advance_if_round_complete(&self) -> Result<Self, GameError> {
        let mut next = self.clone();
        if !self.round.complete {
            return Ok(next);
        }
        match self.phase {
            Phase::Setup | Phase::Showdown => return Ok(next),
            Phase::Preflop => next.open_street(Phase::Flop, 3)?,
            Phase::Flop => next.open_street(Phase::Turn, 1)?,
            Phase::Turn => next.open_street(Phase::River, 1)?,
            Phase::River => next.resolve_showdown()?,
        }
        next.check_invariants()?;
        Ok(next)
    }

    fn open_street(&mut self, phase: Phase, count: usize) -> Result<(), GameError> {
        let cards = self.deck.deal(count)?;
        self.community.extend(cards);
        self.phase = phase;
        for p in &mut self.participants {
            p.reset_round();
        }
        let first = next_to_act(&self.participants, self.dealer);
        self.round = RoundState::open(&self.participants, 0, self.config.big_blind, first);
        self.active = if self.round.complete { None } else { first };
        debug!(hand = self.hand_number, phase = %phase, board = ?self.community, "street dealt");
        Ok(())
    }

    fn resolve_showdown(&mut self) -> Result<(), GameError> {
        let contesters: Vec<SeatIndex> = self
            .participants
            .iter()
            .filter(|p| p.in_hand())
            .map(Participant::seat)
            .collect();
        self.phase = Phase::Showdown;
        self.active = None;
        self.round.complete = true;

        let result = match contesters.as_slice() {
            [] => {
                return Err(GameError::StateInvariantViolation(
                    "showdown reached with nobody holding cards".to_string(),
                ))
            }
            [winner] => {
                let amount = self.pot;
                self.participants[*winner].award(amount);
                ShowdownResult {
                    uncontested: true,
                    hands: Vec::new(),
                    pots: vec![PotAward {
                        amount,
                        eligible: vec![*winner],
                        winners: vec![*winner],
                        share: amount,
                        remainder: 0,
                    }],
                }
            }
            _ => self.contested_showdown(&contesters)?,
        };
        self.pot = 0;

        let winners: Vec<&str> = result
            .winners()
            .into_iter()
            .map(|s| self.participants[s].id())
            .collect();
        info!(
            hand = self.hand_number,
            pot = result.total(),
            uncontested = result.uncontested,
            winners = ?winners,
            "hand settled"
        );
        self.showdown = Some(result);
        Ok(())
    }

    fn contested_showdown(&mut self, contesters: &[SeatIndex]) -> Result<ShowdownResult, GameError> {
        let hands: Vec<RevealedHand> = contesters
            .iter()
            .map(|&seat| {
                let p = &self.participants[seat];
                RevealedHand {
                    seat,
                    participant: p.id().to_string(),
                    hole_cards: p.hole_cards().to_vec(),
                    rank: evaluate(p.hole_cards(), &self.community),
                }
            })
            .collect();

        let mut pots = Vec::new();
        for layer in build_pots(&self.participants, contesters) {
            let eligible: Vec<&RevealedHand> = hands
                .iter()
                .filter(|h| layer.eligible.contains(&h.seat))
                .collect();
            let best = eligible
                .iter()
                .map(|h| &h.rank)
                .max_by(|a, b| compare(a, b))
                .ok_or_else(|| {
                    GameError::StateInvariantViolation("pot layer with no eligible hand".to_string())
                })?;
            let winners: Vec<SeatIndex> = eligible
                .iter()
                .filter(|h| compare(&h.rank, best) == Ordering::Equal)
                .map(|h| h.seat)
                .collect();

            let count = winners.len() as u32;
            let share = layer.amount / count;
            let remainder = layer.amount % count;
            for &w in &winners {
                self.participants[w].award(share);
            }
            if remainder > 0 {
                match self.config.odd_chip_policy {
                    OddChipPolicy::Discard => self.rounding_loss += u64::from(remainder),
                    OddChipPolicy::ClosestToButton => {
                        let seat = self.closest_to_button(&winners);
                        self.participants[seat].award(remainder);
                    }
                }
            }
            pots.push(PotAward {
                amount: layer.amount,
                eligible: layer.eligible,
                winners,
                share,
                remainder,
            });
        }

        Ok(ShowdownResult {
            uncontested: false,
            hands,
            pots,
        })
    }

    /// First of `seats` clockwise from the dealer, the dealer coming last.
    fn closest_to_button(&self, seats: &[SeatIndex]) -> SeatIndex {
        let n = self.participants.len();
        (1..=n)
            .map(|step| (self.dealer + step) % n)
            .find(|s| seats.contains(s))
            .unwrap_or(seats[0])
    }

    /// Move the button to the next funded seat and deal again.
    pub fn next_hand(&self) -> Result<Self, GameError> {
        if self.phase != Phase::Showdown {
            return Err(GameError::InvalidSetup(
                "the current hand has not finished".to_string(),
            ));
        }
        let mut next = self.clone();
        next.phase = Phase::Setup;
        next.round = RoundState::closed();
        next.dealer = next_funded(&next.participants, self.dealer).unwrap_or(self.dealer);
        next.begin_hand()
    }

    /// Conservation and consistency checks run after every transition.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        let violation = |msg: String| Err(GameError::StateInvariantViolation(msg));

        let stacks: u64 = self.participants.iter().map(|p| u64::from(p.stack())).sum();
        let total = stacks + u64::from(self.pot) + self.rounding_loss;
        if total != self.chips_in_play {
            return violation(format!(
                "chip total {total} differs from {} in play",
                self.chips_in_play
            ));
        }

        if let Some(expected) = self.phase.board_size() {
            if self.community.len() != expected {
                return violation(format!(
                    "{} board has {} cards",
                    self.phase,
                    self.community.len()
                ));
            }
        }

        if matches!(self.phase, Phase::Setup | Phase::Showdown) {
            return Ok(());
        }

        let committed: u64 = self
            .participants
            .iter()
            .map(|p| u64::from(p.total_committed()))
            .sum();
        if committed != u64::from(self.pot) {
            return violation(format!(
                "pot {} differs from {committed} committed",
                self.pot
            ));
        }

        let holders: Vec<SeatIndex> = self
            .participants
            .iter()
            .filter(|p| p.in_hand())
            .map(Participant::seat)
            .collect();
        if holders != self.round.contesting {
            return violation(format!(
                "contesting seats {:?} differ from card holders {holders:?}",
                self.round.contesting
            ));
        }

        if let Some(seat) = self.active {
            if !self.participants[seat].can_act() {
                return violation(format!("active seat {seat} cannot act"));
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let seats = self
            .participants
            .iter()
            .map(|p| SeatView {
                id: p.id().to_string(),
                name: p.name().to_string(),
                seat: p.seat(),
                stack: p.stack(),
                committed: p.committed(),
                total_committed: p.total_committed(),
                hole_cards: p.hole_cards().to_vec(),
                in_hand: p.in_hand(),
                all_in: p.is_all_in(),
                folded: p.is_folded(),
                advisory: p.is_advisory(),
                personality: p.personality(),
            })
            .collect();
        TableSnapshot {
            hand_number: self.hand_number,
            phase: self.phase,
            active: self.active_participant().map(|p| p.id().to_string()),
            pot: self.pot,
            community: self.community.clone(),
            current_bet: self.round.current_bet,
            min_raise_to: min_raise_target(self),
            dealer: self.dealer,
            small_blind_seat: self.small_blind_seat,
            big_blind_seat: self.big_blind_seat,
            small_blind: self.config.small_blind,
            big_blind: self.config.big_blind,
            seats,
            last_action: self.last_action.clone(),
            showdown: self.showdown.clone(),
            rounding_loss: self.rounding_loss,
            deck_remaining: self.deck.remaining(),
        }
    }

    /// Everything needed to store or replay the current hand.
    pub fn hand_record(&self, hand_id: String) -> HandRecord {
        let showdown = self.showdown.as_ref().map(|s| {
            let winners: Vec<String> = s
                .winners()
                .into_iter()
                .map(|seat| self.participants[seat].id().to_string())
                .collect();
            let notes = if s.uncontested {
                Some("uncontested".to_string())
            } else {
                let labels: Vec<String> = s
                    .hands
                    .iter()
                    .map(|h| format!("{}: {}", h.participant, h.rank.label()))
                    .collect();
                Some(labels.join(", "))
            };
            ShowdownInfo {
                winners,
                pot: s.total(),
                notes,
            }
        });
        let result = showdown
            .as_ref()
            .map(|s| format!("{} wins {}", s.winners.join(" & "), s.pot));
        let meta = serde_json::json!({
            "hand": self.hand_number,
            "dealer": self.participants[self.dealer].id(),
            "small_blind": self.config.small_blind,
            "big_blind": self.config.big_blind,
            "players": self.participants.iter().map(|p| p.id()).collect::<Vec<_>>(),
        });
        HandRecord {
            hand_id,
            seed: Some(self.hand_seed()),
            actions: self.log.clone(),
            board: self.community.clone(),
            result,
            ts: None,
            meta: Some(meta),
            showdown,
        }
    }
}

/// Per-seat public view.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: String,
    pub name: String,
    pub seat: SeatIndex,
    pub stack: u32,
    pub committed: u32,
    pub total_committed: u32,
    pub hole_cards: Vec<Card>,
    pub in_hand: bool,
    pub all_in: bool,
    pub folded: bool,
    pub advisory: bool,
    pub personality: Option<Personality>,
}

/// Serializable view of a table, without the deck.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub hand_number: u32,
    pub phase: Phase,
    pub active: Option<String>,
    pub pot: u32,
    pub community: Vec<Card>,
    pub current_bet: u32,
    pub min_raise_to: u32,
    pub dealer: SeatIndex,
    pub small_blind_seat: Option<SeatIndex>,
    pub big_blind_seat: Option<SeatIndex>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seats: Vec<SeatView>,
    pub last_action: Option<String>,
    pub showdown: Option<ShowdownResult>,
    pub rounding_loss: u64,
    pub deck_remaining: usize,
}

impl TableSnapshot {
    /// Hide other seats' hole cards until showdown.
    pub fn redacted_for(mut self, viewer: &str) -> Self {
        if self.phase != Phase::Showdown {
            for seat in &mut self.seats {
                if seat.id != viewer {
                    seat.hole_cards.clear();
                }
            }
        }
        self
    }
}
