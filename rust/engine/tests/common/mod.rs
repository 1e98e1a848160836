#![allow(dead_code)]

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use tablestakes_engine::cards::{parse_cards, Card};
use tablestakes_engine::config::TableConfig;
use tablestakes_engine::deck::Deck;
use tablestakes_engine::engine::Engine;
use tablestakes_engine::game::{GameState, Phase};
use tablestakes_engine::player::{ActionKind, RosterEntry};
use tablestakes_engine::rules::to_call;
use tracing::Level;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid cards")
}

pub fn roster(stacks: &[(&str, u32)]) -> Vec<RosterEntry> {
    stacks
        .iter()
        .map(|&(id, stack)| RosterEntry::human(id, stack))
        .collect()
}

/// Deal a hand from a deck whose top cards are `top` (seat order, two each,
/// then the board).
pub fn rigged(stacks: &[(&str, u32)], config: TableConfig, top: &str) -> Engine {
    let deck = Deck::stacked(&cards(top), 99).expect("distinct cards");
    let state = GameState::new(roster(stacks), config)
        .expect("valid table")
        .begin_hand_with_deck(deck)
        .expect("hand starts");
    Engine::new(state)
}

/// Call or check every decision until the hand is settled.
pub fn check_down(engine: &mut Engine) {
    for _ in 0..256 {
        if engine.state().phase() == Phase::Showdown {
            return;
        }
        let state = engine.state();
        let seat = state.active_seat().expect("someone to act");
        let id = state.participants()[seat].id().to_string();
        let kind = if to_call(state, seat) > 0 {
            ActionKind::Call
        } else {
            ActionKind::Check
        };
        engine.propose_action(&id, kind, None).expect("legal action");
    }
    panic!("hand did not finish");
}

pub fn stack(engine: &Engine, id: &str) -> u32 {
    engine.state().participant(id).expect("seated").stack()
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

/// Collects events emitted while installed as the default subscriber.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CapturedLogs {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn into_layer<S>(self) -> CaptureLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        CaptureLayer {
            logs: self,
            _phantom: PhantomData,
        }
    }
}

pub struct CaptureLayer<S> {
    logs: CapturedLogs,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for CaptureLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.logs.entries.lock().unwrap().push(LogEntry {
            level: *event.metadata().level(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}
