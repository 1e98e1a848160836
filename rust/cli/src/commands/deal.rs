//! Deal command: one hand dealt and checked down to the river.

use crate::error::CliError;
use crate::ui::format_cards;
use std::io::Write;
use tablestakes_engine::engine::Engine;
use tablestakes_engine::errors::GameError;
use tablestakes_engine::game::Phase;
use tablestakes_engine::player::{ActionKind, RosterEntry};
use tablestakes_engine::rules::to_call;

/// Deal a hand for `players` seats (`p1`, `p2`, ...), call or check every
/// decision so the board runs out, then print each hand and the result.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<u8>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = super::session_config(seed, players, None)?;
    let base_seed = cfg.seed.unwrap_or_else(rand::random);

    let roster = (1..=cfg.players)
        .map(|i| RosterEntry::human(format!("p{i}"), cfg.starting_stack))
        .collect();
    let mut engine = Engine::start(roster, cfg.table_config().seed(base_seed))?;
    check_down(&mut engine)?;

    let state = engine.state();
    writeln!(out, "Seed: {}", base_seed)?;
    for p in state.participants() {
        writeln!(out, "Hole {}: {}", p.id(), format_cards(p.hole_cards()))?;
    }
    writeln!(out, "Board: {}", format_cards(state.community()))?;
    if let Some(result) = state.showdown() {
        for hand in &result.hands {
            writeln!(out, "{}: {}", hand.participant, hand.rank)?;
        }
    }
    if let Some(summary) = state.hand_record(String::new()).result {
        writeln!(out, "Result: {}", summary)?;
    }
    Ok(())
}

/// Call whatever is owed and check otherwise until the hand is over.
fn check_down(engine: &mut Engine) -> Result<(), CliError> {
    while engine.state().phase() != Phase::Showdown {
        let state = engine.state();
        let actor = state.active_participant().ok_or_else(|| {
            GameError::StateInvariantViolation("no participant to act before showdown".into())
        })?;
        let kind = if to_call(state, actor.seat()) > 0 {
            ActionKind::Call
        } else {
            ActionKind::Check
        };
        let id = actor.id().to_string();
        engine.propose_action(&id, kind, None)?;
    }
    Ok(())
}
