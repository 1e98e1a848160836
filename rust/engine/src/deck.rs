use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck consumed front to back, bound to its own seeded RNG so a
/// hand can be replayed from the seed alone.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new_with_seed(seed);
        deck.shuffle();
        deck
    }

    /// A deck whose next cards are `top`, in order, followed by the rest of
    /// the 52 shuffled with `seed`. Used to replay recorded hands.
    pub fn stacked(top: &[Card], seed: u64) -> Result<Self, GameError> {
        ensure_distinct(top)?;
        let mut deck = Self::shuffled(seed);
        let mut cards = top.to_vec();
        cards.extend(deck.cards.iter().filter(|c| !top.contains(c)));
        deck.cards = cards;
        Ok(deck)
    }

    /// Exactly `cards`, in order. Dealing past the end fails with
    /// [`GameError::DeckExhausted`].
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        ensure_distinct(&cards)?;
        Ok(Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(0),
        })
    }

    /// Restore all 52 cards and apply a Fisher-Yates shuffle.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Remove and return the next `n` cards. Nothing is consumed on failure.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.remaining_cards() == other.remaining_cards()
    }
}

impl Eq for Deck {}

fn ensure_distinct(cards: &[Card]) -> Result<(), GameError> {
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(GameError::InvalidSetup(format!("duplicate card {card}")));
        }
    }
    Ok(())
}

/// A freshly shuffled deck.
pub fn new_deck(seed: u64) -> Deck {
    Deck::shuffled(seed)
}
