//! Hand strength heuristics and the betting situation an advisor faces.

use tablestakes_engine::cards::Card;
use tablestakes_engine::game::{GameState, Phase};
use tablestakes_engine::hand::{Category, evaluate, evaluate_cards};
use tablestakes_engine::player::Participant;
use tablestakes_engine::rules::{min_raise_target, to_call};

/// Rate two hole cards 0-10.
///
/// - 9-10: premium (AA-JJ, AKs)
/// - 7-8: strong (TT-99, AK, AQ, KQs)
/// - 5-6: medium (88-77, AJ, suited connectors)
/// - 3-4: marginal (66-22, Ax, broadway)
/// - 0-2: weak offsuit cards
pub fn preflop_strength(hole: &[Card]) -> u8 {
    let [a, b] = match hole {
        [a, b] => [*a, *b],
        _ => return 0,
    };
    let (high, low) = if a.value() >= b.value() {
        (a.value(), b.value())
    } else {
        (b.value(), a.value())
    };
    let suited = a.suit == b.suit;
    let bonus = u8::from(suited);

    if high == low {
        return match high {
            13..=14 => 10,
            11..=12 => 9,
            10 => 8,
            9 => 7,
            8 => 6,
            7 => 5,
            _ => 4,
        };
    }

    match (high, low) {
        (14, 13) => 8 + 2 * bonus,
        (14, 12) => 7 + bonus,
        (14, 11) => 6 + bonus,
        (14, 10) | (13, 12) => 5 + bonus + u8::from(low == 12),
        (14, _) => 4 + bonus,
        (13, 11) | (12, 11) => 5 + bonus,
        (13, 10) | (12, 10) => 4 + bonus,
        _ if suited && high - low <= 2 => {
            if high >= 9 {
                5
            } else {
                4
            }
        }
        _ if high >= 11 && low >= 9 => 4,
        _ => 2,
    }
}

/// Rate the best hand made with the board, 0-10. `None` before the flop.
pub fn postflop_strength(hole: &[Card], board: &[Card]) -> Option<u8> {
    if board.len() < 3 {
        return None;
    }
    let rank = evaluate(hole, board);
    let base: u8 = match rank.category {
        Category::HighCard => 1,
        Category::OnePair => 3,
        Category::TwoPair => 5,
        Category::ThreeOfAKind => 6,
        Category::Straight => 7,
        Category::Flush => 8,
        Category::FullHouse => 9,
        Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
    };
    // a made hand sitting entirely on the board is shared by everyone
    let on_board = evaluate_cards(board);
    let shared = on_board.category == rank.category && on_board.defining == rank.defining;
    let base = if shared { base.saturating_sub(2) } else { base };
    let high_kicker = rank.defining.first().copied().unwrap_or(0) >= 12;
    Some((base + u8::from(high_kicker)).min(10))
}

/// Strength for the current street.
pub fn hand_strength(participant: &Participant, state: &GameState) -> u8 {
    let hole = participant.hole_cards();
    match state.phase() {
        Phase::Setup | Phase::Preflop => preflop_strength(hole),
        _ => postflop_strength(hole, state.community()).unwrap_or_else(|| preflop_strength(hole)),
    }
}

/// Chip amounts an advisor needs to size its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Situation {
    pub to_call: u32,
    pub current_bet: u32,
    pub min_raise_to: u32,
    /// Raise target that puts the whole stack in
    pub all_in_to: u32,
    pub pot: u32,
    pub stack: u32,
}

impl Situation {
    pub fn read(participant: &Participant, state: &GameState) -> Self {
        Self {
            to_call: to_call(state, participant.seat()),
            current_bet: state.round().current_bet,
            min_raise_to: min_raise_target(state),
            all_in_to: participant.stack() + participant.committed(),
            pot: state.pot(),
            stack: participant.stack(),
        }
    }

    /// Raise target of `current_bet + extra`, clamped to what is legal.
    pub fn raise_to(&self, extra: u32) -> u32 {
        self.current_bet
            .saturating_add(extra)
            .max(self.min_raise_to)
            .min(self.all_in_to)
    }

    pub fn can_raise(&self) -> bool {
        self.all_in_to > self.current_bet
    }

    /// Price of calling as a share of the pot after calling, 0..1.
    pub fn price(&self) -> f32 {
        if self.to_call == 0 {
            return 0.0;
        }
        self.to_call as f32 / (self.pot + self.to_call) as f32
    }
}
