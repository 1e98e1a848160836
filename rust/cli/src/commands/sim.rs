//! Simulation command: hands between advisory participants.
//!
//! Every decision goes through the engine's decision gate. The advisor runs
//! on a tokio blocking task under the configured timeout; a timeout or a
//! crashed advisor is reported back as an advisory failure, which the engine
//! turns into a fold. Each finished hand is appended to the JSONL history.

use crate::config::{Config, MIXED_ADVISOR};
use crate::error::CliError;
use crate::ui;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tablestakes_ai::{Personality, SharedAdvisor, advisor_for, create_advisor};
use tablestakes_engine::advisory::{Decision, DecisionRequest};
use tablestakes_engine::engine::Engine;
use tablestakes_engine::errors::{AdvisoryError, GameError};
use tablestakes_engine::game::Phase;
use tablestakes_engine::logger::HandLogger;
use tablestakes_engine::player::RosterEntry;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct SimOptions {
    pub hands: u64,
    pub players: Option<u8>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub advisor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimSummary {
    pub hands: u64,
    /// Hands decided by comparing cards
    pub showdowns: u64,
    /// Pot layers shared by more than one winner
    pub split_pots: u64,
    /// Decisions that timed out or failed and were folded
    pub advisory_failures: u64,
    /// Fewer than two funded seats were left before the last hand
    pub ended_early: bool,
}

#[derive(Debug, Clone)]
pub struct SimReport {
    pub seed: u64,
    pub summary: SimSummary,
    pub stacks: Vec<(String, u32)>,
    pub chips_in_play: u64,
    pub rounding_loss: u64,
}

pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let report = simulate(&opts)?;
    let s = &report.summary;

    writeln!(out, "Simulated {} hands (seed {})", s.hands, report.seed)?;
    if s.ended_early {
        ui::display_warning(err, "table ran out of funded players before the last hand")?;
    }
    writeln!(out, "Showdowns: {}", s.showdowns)?;
    writeln!(out, "Split pots: {}", s.split_pots)?;
    writeln!(out, "Advisory fallbacks: {}", s.advisory_failures)?;
    writeln!(out, "Odd chips discarded: {}", report.rounding_loss)?;
    writeln!(out, "Final stacks:")?;
    for (id, stack) in &report.stacks {
        writeln!(out, "  {}: {}", id, stack)?;
    }
    if let Some(path) = &opts.output {
        writeln!(out, "Hand history: {}", path)?;
    }
    Ok(())
}

/// Run a session and report on it without printing anything.
pub fn simulate(opts: &SimOptions) -> Result<SimReport, CliError> {
    let cfg = super::session_config(opts.seed, opts.players, opts.advisor.as_deref())?;
    let base_seed = cfg.seed.unwrap_or_else(rand::random);
    let (roster, seats) = seat_advisors(&cfg, base_seed)?;

    let mut logger = match &opts.output {
        Some(path) => HandLogger::create(path)?,
        None => HandLogger::detached(&chrono::Utc::now().format("%Y%m%d").to_string()),
    };
    let mut engine = Engine::start(roster, cfg.table_config().seed(base_seed))?;
    let limit = Duration::from_millis(cfg.advisory_timeout_ms);
    info!(
        hands = opts.hands,
        players = cfg.players,
        seed = base_seed,
        advisor = %cfg.advisor,
        "simulation starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;
    let played = runtime.block_on(play_session(
        &mut engine,
        &seats,
        limit,
        opts.hands,
        &mut logger,
    ));
    // timed-out advisors may still be running
    runtime.shutdown_timeout(Duration::from_millis(100));
    let summary = played?;

    let state = engine.state();
    Ok(SimReport {
        seed: base_seed,
        summary,
        stacks: state
            .participants()
            .iter()
            .map(|p| (p.id().to_string(), p.stack()))
            .collect(),
        chips_in_play: state.chips_in_play(),
        rounding_loss: state.rounding_loss(),
    })
}

/// Roster of `bot1..botN` and the advisor consulted for each seat.
fn seat_advisors(
    cfg: &Config,
    base_seed: u64,
) -> Result<(Vec<RosterEntry>, Vec<Arc<SharedAdvisor>>), CliError> {
    let mut roster = Vec::with_capacity(cfg.players);
    let mut seats = Vec::with_capacity(cfg.players);
    for i in 0..cfg.players {
        let seed = base_seed.wrapping_add(i as u64);
        let (personality, advisor) = if cfg.advisor == MIXED_ADVISOR {
            let p = Personality::ALL[i % Personality::ALL.len()];
            (Some(p), advisor_for(Some(p), seed))
        } else {
            (None, create_advisor(&cfg.advisor, seed)?)
        };
        roster.push(RosterEntry::advisory(
            format!("bot{}", i + 1),
            cfg.starting_stack,
            personality,
        ));
        seats.push(Arc::new(advisor));
    }
    Ok((roster, seats))
}

async fn play_session(
    engine: &mut Engine,
    seats: &[Arc<SharedAdvisor>],
    limit: Duration,
    hands: u64,
    logger: &mut HandLogger,
) -> Result<SimSummary, CliError> {
    let mut summary = SimSummary::default();
    for n in 0..hands {
        if n > 0 {
            match engine.next_hand() {
                Ok(_) => {}
                Err(GameError::NotEnoughPlayers { funded }) => {
                    info!(funded, played = n, "table broke up");
                    summary.ended_early = true;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        while engine.state().phase() != Phase::Showdown {
            let request = engine.request_decision()?;
            let ticket = request.ticket;
            let advisor = seats
                .get(request.participant.seat())
                .cloned()
                .ok_or_else(|| GameError::UnknownParticipant(request.participant.id().into()))?;
            let outcome = ask_advisor(advisor, request, limit).await;
            if outcome.is_err() {
                summary.advisory_failures += 1;
            }
            engine.resolve_decision(ticket, outcome)?;
        }

        let state = engine.state();
        if let Some(result) = state.showdown() {
            if !result.uncontested {
                summary.showdowns += 1;
            }
            summary.split_pots += result.pots.iter().filter(|p| p.winners.len() > 1).count() as u64;
        }
        let id = logger.next_id();
        logger.write(&state.hand_record(id))?;
        summary.hands += 1;
    }
    Ok(summary)
}

/// Ask `advisor` on a blocking task, giving up after `limit`.
pub async fn ask_advisor(
    advisor: Arc<SharedAdvisor>,
    request: DecisionRequest,
    limit: Duration,
) -> Result<Decision, AdvisoryError> {
    let participant = request.participant.id().to_string();
    let task = tokio::task::spawn_blocking(move || request.ask(&**advisor));
    match tokio::time::timeout(limit, task).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(join)) => Err(AdvisoryError::Unavailable(join.to_string())),
        Err(_) => {
            debug!(participant = %participant, limit_ms = limit.as_millis() as u64, "advisor timed out");
            Err(AdvisoryError::TimedOut)
        }
    }
}
