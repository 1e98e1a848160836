//! # tablestakes-engine: Texas Hold'em Rules Engine
//!
//! A deterministic no-limit Texas Hold'em engine for 2-10 seats. Every state
//! transition is a pure function returning a new [`game::GameState`]; the
//! [`engine::Engine`] facade owns the current state, deals completed rounds
//! onward and gates advisory decisions so only one is ever in flight.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`hand`] - Best-five-of-seven hand evaluation and comparison
//! - [`rules`] - Action validation and betting helpers
//! - [`betting`] - Betting round state and turn order
//! - [`pot`] - Main and side pot layering
//! - [`game`] - Game state, phase transitions and showdown
//! - [`engine`] - Serialized access, advisory gating and halting
//! - [`advisory`] - The pluggable decision capability
//! - [`logger`] - Action log and JSONL hand records
//! - [`errors`] - Error taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_engine::cards::parse_cards;
//! use tablestakes_engine::hand::{evaluate, Category};
//!
//! let hole = parse_cards("Ah Kh").unwrap();
//! let board = parse_cards("Qh Jh 10h 2c 3d").unwrap();
//! let rank = evaluate(&hole, &board);
//! assert_eq!(rank.category, Category::RoyalFlush);
//! assert_eq!(rank.strength(), 10);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Decks are shuffled from a seed, so a hand replays exactly:
//!
//! ```rust
//! use tablestakes_engine::deck::Deck;
//!
//! let mut a = Deck::shuffled(42);
//! let mut b = Deck::shuffled(42);
//! assert_eq!(a.deal(5).unwrap(), b.deal(5).unwrap());
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use tablestakes_engine::config::TableConfig;
//! use tablestakes_engine::engine::Engine;
//! use tablestakes_engine::game::Phase;
//! use tablestakes_engine::player::{ActionKind, RosterEntry};
//!
//! let roster = vec![
//!     RosterEntry::human("ann", 100),
//!     RosterEntry::human("bob", 100),
//!     RosterEntry::human("cy", 100),
//! ];
//! let mut engine = Engine::start(roster, TableConfig::with_blinds(1, 2).seed(9)).unwrap();
//!
//! engine.propose_action("ann", ActionKind::Fold, None).unwrap();
//! engine.propose_action("bob", ActionKind::Fold, None).unwrap();
//!
//! let state = engine.state();
//! assert_eq!(state.phase(), Phase::Showdown);
//! assert_eq!(state.participant("cy").unwrap().stack(), 101);
//! ```

pub mod advisory;
pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
