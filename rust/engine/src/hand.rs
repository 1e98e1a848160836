use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Hand categories, weakest first. The discriminant is the strength value
/// reported to callers (1 = high card ... 10 = royal flush).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn strength(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The best hand found for a set of cards.
///
/// `defining` holds the values that make up the category (quad rank, trip then
/// pair rank, straight high card, all five flush values, ...). `kickers` holds
/// the remaining values, high to low, and only break ties within a category.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    /// Cards composing the ranked hand, defining cards first.
    pub cards: Vec<Card>,
    pub defining: Vec<u8>,
    pub kickers: Vec<u8>,
}

impl HandRank {
    pub fn strength(&self) -> u8 {
        self.category.strength()
    }

    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str(")")
    }
}

/// Evaluate two hole cards together with 0-5 community cards.
pub fn evaluate(hole: &[Card], community: &[Card]) -> HandRank {
    let mut cards = Vec::with_capacity(hole.len() + community.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(community);
    evaluate_cards(&cards)
}

/// Best hand among all 5-card sub-combinations of `cards`. Sets of five or
/// fewer cards are ranked as they are.
///
/// The input is sorted before searching so the result does not depend on the
/// order the cards were given in.
pub fn evaluate_cards(cards: &[Card]) -> HandRank {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(b.suit.cmp(&a.suit)));
    if sorted.len() <= 5 {
        return rank_subset(&sorted);
    }

    let mut best: Option<HandRank> = None;
    for idx in five_card_combinations(sorted.len()) {
        let hand: Vec<Card> = idx.iter().map(|&i| sorted[i]).collect();
        let ranked = rank_subset(&hand);
        let better = match &best {
            Some(b) => compare(&ranked, b) == Ordering::Greater,
            None => true,
        };
        if better {
            best = Some(ranked);
        }
    }
    // sorted.len() > 5 yields at least one combination
    best.unwrap_or_else(|| rank_subset(&sorted[..5]))
}

/// Category first, then defining values, then kickers.
pub fn compare(a: &HandRank, b: &HandRank) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.defining.cmp(&b.defining))
        .then_with(|| a.kickers.cmp(&b.kickers))
}

fn five_card_combinations(n: usize) -> Vec<[usize; 5]> {
    let mut out = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([a, b, c, d, e]);
                    }
                }
            }
        }
    }
    out
}

/// Rank at most five cards, given high to low.
fn rank_subset(cards: &[Card]) -> HandRank {
    // (count, value), most frequent first then highest
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for card in cards {
        match groups.iter_mut().find(|g| g.1 == card.value()) {
            Some(g) => g.0 += 1,
            None => groups.push((1, card.value())),
        }
    }
    groups.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let is_flush = cards.len() == 5 && cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = if cards.len() == 5 && groups.len() == 5 {
        straight_high(&groups.iter().map(|g| g.1).collect::<Vec<_>>())
    } else {
        None
    };
    let count = |i: usize| groups.get(i).map(|g| g.0).unwrap_or(0);

    let (category, defining_groups) = match (is_flush, straight) {
        (true, Some(high)) if high == Rank::Ace.value() => (Category::RoyalFlush, 0),
        (true, Some(_)) => (Category::StraightFlush, 0),
        _ if count(0) == 4 => (Category::FourOfAKind, 1),
        _ if count(0) == 3 && count(1) >= 2 => (Category::FullHouse, 2),
        (true, None) => (Category::Flush, 5),
        (false, Some(_)) => (Category::Straight, 0),
        _ if count(0) == 3 => (Category::ThreeOfAKind, 1),
        _ if count(0) == 2 && count(1) == 2 => (Category::TwoPair, 2),
        _ if count(0) == 2 => (Category::OnePair, 1),
        _ => (Category::HighCard, 1),
    };

    let values: Vec<u8> = groups.iter().map(|g| g.1).collect();
    let (defining, kickers) = match straight {
        Some(high) if defining_groups == 0 => (vec![high], Vec::new()),
        _ => {
            let split = defining_groups.min(values.len());
            (values[..split].to_vec(), values[split..].to_vec())
        }
    };

    HandRank {
        category,
        cards: order_cards(cards, &values, straight),
        defining,
        kickers,
    }
}

/// High card of a five-value straight, 5 for the wheel.
fn straight_high(values_desc: &[u8]) -> Option<u8> {
    if values_desc.len() != 5 {
        return None;
    }
    if values_desc[0] - values_desc[4] == 4 {
        return Some(values_desc[0]);
    }
    if values_desc == [14, 5, 4, 3, 2].as_slice() {
        return Some(5);
    }
    None
}

fn order_cards(cards: &[Card], group_order: &[u8], straight: Option<u8>) -> Vec<Card> {
    let mut ordered = cards.to_vec();
    ordered.sort_by_key(|c| {
        let group = group_order
            .iter()
            .position(|&v| v == c.value())
            .unwrap_or(group_order.len());
        (group, std::cmp::Reverse(c.suit))
    });
    if straight == Some(5) {
        // wheel: the ace plays low
        ordered.rotate_left(1);
    }
    ordered
}
