mod common;

use std::cell::Cell;

use common::{cards, roster, CapturedLogs};
use tablestakes_engine::advisory::{Advisor, Decision};
use tablestakes_engine::config::TableConfig;
use tablestakes_engine::deck::Deck;
use tablestakes_engine::engine::Engine;
use tablestakes_engine::errors::{AdvisoryError, GameError};
use tablestakes_engine::game::{GameState, Phase};
use tablestakes_engine::logger::{ActionRecord, RecordedAction};
use tablestakes_engine::player::ActionKind::{Call, Check};
use tablestakes_engine::player::{Participant, RosterEntry};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

struct Fixed(Result<Decision, AdvisoryError>);

impl Advisor for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    fn decide(
        &self,
        _participant: &Participant,
        _state: &GameState,
        _log: &[ActionRecord],
    ) -> Result<Decision, AdvisoryError> {
        self.0.clone()
    }
}

/// Remembers what it was shown.
#[derive(Default)]
struct Peeking {
    seen_log: Cell<usize>,
    seen_seat: Cell<Option<usize>>,
}

impl Advisor for Peeking {
    fn name(&self) -> &str {
        "peeking"
    }

    fn decide(
        &self,
        participant: &Participant,
        state: &GameState,
        log: &[ActionRecord],
    ) -> Result<Decision, AdvisoryError> {
        self.seen_log.set(log.len());
        self.seen_seat.set(Some(participant.seat()));
        assert_eq!(state.active_seat(), Some(participant.seat()));
        Ok(Decision::call())
    }
}

/// ann (human) deals; bot posts the small blind, cy the big blind.
fn table() -> Engine {
    let roster = vec![
        RosterEntry::human("ann", 100),
        RosterEntry::advisory("bot", 100, None),
        RosterEntry::human("cy", 100),
    ];
    Engine::start(roster, TableConfig::with_blinds(1, 2).seed(5)).unwrap()
}

fn to_bot(engine: &mut Engine) {
    engine.propose_action("ann", Call, None).unwrap();
    assert_eq!(engine.state().active_participant().unwrap().id(), "bot");
}

#[test]
fn a_second_solicitation_is_refused_while_one_is_in_flight() {
    let mut e = table();
    to_bot(&mut e);
    let request = e.request_decision().unwrap();
    assert_eq!(request.participant.id(), "bot");
    assert_eq!(e.decision_in_flight(), Some("bot"));

    assert_eq!(
        e.request_decision().unwrap_err(),
        GameError::DecisionInFlight {
            participant: "bot".to_string()
        }
    );
    assert_eq!(
        e.propose_action("bot", Call, None).unwrap_err(),
        GameError::DecisionInFlight {
            participant: "bot".to_string()
        }
    );

    e.resolve_decision(request.ticket, Ok(Decision::call())).unwrap();
    assert_eq!(e.decision_in_flight(), None);
    assert_eq!(e.state().active_participant().unwrap().id(), "cy");
}

#[test]
fn tickets_must_match_the_pending_request() {
    let mut e = table();
    assert_eq!(
        e.resolve_decision(1, Ok(Decision::fold())).unwrap_err(),
        GameError::NoDecisionPending
    );
    to_bot(&mut e);
    let request = e.request_decision().unwrap();
    assert_eq!(
        e.resolve_decision(request.ticket + 7, Ok(Decision::fold()))
            .unwrap_err(),
        GameError::StaleDecision {
            ticket: request.ticket + 7
        }
    );
    assert_eq!(e.decision_in_flight(), Some("bot"));
    e.resolve_decision(request.ticket, Ok(Decision::fold())).unwrap();
    assert!(e.state().participant("bot").unwrap().is_folded());
}

#[test]
fn only_advisory_participants_can_be_solicited() {
    let mut e = table();
    let err = e.request_decision().unwrap_err();
    assert_eq!(err.reason(), Some("ann is not advisory-controlled"));
    assert_eq!(e.decision_in_flight(), None);
}

#[test]
fn advisor_failure_folds_the_participant_and_is_logged() {
    let logs = CapturedLogs::default();
    let subscriber = Registry::default().with(logs.clone().into_layer::<Registry>());
    let mut e = table();
    to_bot(&mut e);

    tracing::subscriber::with_default(subscriber, || {
        let advisor = Fixed(Err(AdvisoryError::TimedOut));
        let state = e.consult(&advisor).unwrap();
        assert!(state.participant("bot").unwrap().is_folded());
        assert_eq!(
            state.action_log().last().unwrap().action,
            RecordedAction::Fold
        );
    });

    assert_eq!(e.decision_in_flight(), None);
    let warnings: Vec<_> = logs
        .entries()
        .into_iter()
        .filter(|entry| entry.level == Level::WARN)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("advisory decision failed"));
    assert!(warnings[0]
        .fields
        .iter()
        .any(|(k, v)| k == "participant" && v.contains("bot")));
}

#[test]
fn illegal_advice_is_folded_not_surfaced() {
    let mut e = table();
    to_bot(&mut e);
    // bot faces a bet, so a check is illegal
    let state = e.consult(&Fixed(Ok(Decision::check()))).unwrap();
    assert!(state.participant("bot").unwrap().is_folded());
    assert_eq!(state.active_participant().unwrap().id(), "cy");
}

#[test]
fn legal_advice_is_applied_like_any_proposal() {
    let mut e = table();
    to_bot(&mut e);
    let advisor = Peeking::default();
    e.consult(&advisor).unwrap();
    // two blinds and ann's call
    assert_eq!(advisor.seen_log.get(), 3);
    assert_eq!(advisor.seen_seat.get(), Some(1));
    let bot = e.state().participant("bot").unwrap();
    assert_eq!(bot.committed(), 2);
    assert!(!bot.is_folded());

    e.propose_action("cy", Check, None).unwrap();
    assert_eq!(e.state().phase(), Phase::Flop);
}

#[test]
fn raise_advice_goes_through_validation() {
    let mut e = table();
    to_bot(&mut e);
    e.consult(&Fixed(Ok(Decision::raise_to(12)))).unwrap();
    assert_eq!(e.state().round().current_bet, 12);
    assert_eq!(e.state().round().last_raiser, Some(1));
}

#[test]
fn deck_exhaustion_halts_the_engine() {
    // four cards cover the hole cards but not the flop
    let deck = Deck::from_cards(cards("Ah Ad Kh Kd")).unwrap();
    let state = GameState::new(
        roster(&[("ann", 100), ("bob", 100)]),
        TableConfig::with_blinds(1, 2),
    )
    .unwrap()
    .begin_hand_with_deck(deck)
    .unwrap();
    let mut e = Engine::new(state);

    let logs = CapturedLogs::default();
    let subscriber = Registry::default().with(logs.clone().into_layer::<Registry>());
    e.propose_action("ann", Call, None).unwrap();
    let err = tracing::subscriber::with_default(subscriber, || {
        e.propose_action("bob", Check, None).unwrap_err()
    });

    assert_eq!(
        err,
        GameError::DeckExhausted {
            requested: 3,
            remaining: 0
        }
    );
    assert!(e.is_halted());
    assert!(logs.entries().iter().any(|l| l.level == Level::ERROR));
    assert_eq!(e.propose_action("ann", Check, None).unwrap_err(), GameError::Halted);
    assert_eq!(e.request_decision().unwrap_err(), GameError::Halted);
    assert_eq!(e.next_hand().unwrap_err(), GameError::Halted);
}
