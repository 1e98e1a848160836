mod helpers;

use helpers::{assert_valid_hand_id, clear_env, read_jsonl, run_cli, set_env};
use serial_test::serial;
use std::sync::Arc;
use std::time::Duration;
use tablestakes_ai::SharedAdvisor;
use tablestakes_cli::commands::sim::{SimOptions, ask_advisor, simulate};
use tablestakes_engine::advisory::{Advisor, Decision};
use tablestakes_engine::config::TableConfig;
use tablestakes_engine::engine::Engine;
use tablestakes_engine::errors::AdvisoryError;
use tablestakes_engine::game::GameState;
use tablestakes_engine::logger::ActionRecord;
use tablestakes_engine::player::{Participant, RosterEntry};

fn options(hands: u64, players: u8, seed: u64, advisor: &str) -> SimOptions {
    SimOptions {
        hands,
        players: Some(players),
        seed: Some(seed),
        output: None,
        advisor: Some(advisor.to_string()),
    }
}

#[test]
#[serial]
fn sim_writes_one_record_per_hand() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("hands.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let res = run_cli(&[
        "sim", "--hands", "6", "--players", "3", "--seed", "11", "--output", &path_str,
    ]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("(seed 11)"));
    assert!(res.stdout.contains("Final stacks:"));
    assert!(res.stdout.contains(&format!("Hand history: {path_str}")));

    let played: usize = res
        .stdout
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .and_then(|n| n.parse().ok())
        .expect("hand count");
    let records = read_jsonl(&path);
    assert_eq!(records.len(), played);
    for (i, rec) in records.iter().enumerate() {
        for field in ["hand_id", "seed", "actions", "board", "result", "ts", "meta", "showdown"] {
            assert!(rec.get(field).is_some(), "missing {field} in {rec}");
        }
        let hand_id = rec["hand_id"].as_str().unwrap();
        assert_valid_hand_id(hand_id);
        assert!(hand_id.ends_with(&format!("{:06}", i + 1)));
        assert_eq!(rec["seed"].as_u64(), Some(11 + i as u64 + 1));
        assert_eq!(rec["meta"]["players"].as_array().unwrap().len(), 3);
    }
}

#[test]
#[serial]
fn sessions_conserve_chips() {
    clear_env();
    for advisor in ["baseline", "mixed", "aggressive", "unpredictable"] {
        let report = simulate(&options(30, 5, 3, advisor)).unwrap();
        assert_eq!(report.chips_in_play, 5 * 1_000);
        let stacks: u64 = report.stacks.iter().map(|(_, s)| u64::from(*s)).sum();
        assert_eq!(stacks + report.rounding_loss, report.chips_in_play, "{advisor}");
        assert_eq!(report.summary.advisory_failures, 0);
        assert!(report.summary.hands >= 1);
    }
}

#[test]
#[serial]
fn same_seed_same_session() {
    clear_env();
    let a = simulate(&options(15, 4, 21, "mixed")).unwrap();
    let b = simulate(&options(15, 4, 21, "mixed")).unwrap();
    assert_eq!(a.stacks, b.stacks);
    assert_eq!(a.summary, b.summary);
}

#[test]
#[serial]
fn folding_table_never_reaches_showdown() {
    clear_env();
    let report = simulate(&options(8, 3, 5, "folding")).unwrap();
    assert_eq!(report.summary.showdowns, 0);
    assert_eq!(report.summary.split_pots, 0);
}

#[test]
#[serial]
fn zero_hands_and_unknown_advisors_are_rejected() {
    clear_env();
    let res = run_cli(&["sim", "--hands", "0"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("hands must be >= 1"));

    let res = run_cli(&["sim", "--hands", "1", "--advisor", "oracle"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("unknown advisor"));
}

#[test]
#[serial]
fn configured_blinds_reach_the_table() {
    clear_env();
    set_env("TABLESTAKES_SMALL_BLIND", "25");
    set_env("TABLESTAKES_BIG_BLIND", "50");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blinds.jsonl");
    let res = run_cli(&[
        "sim",
        "--hands",
        "1",
        "--seed",
        "2",
        "--output",
        &path.to_string_lossy(),
    ]);
    clear_env();
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let records = read_jsonl(&path);
    assert_eq!(records[0]["meta"]["small_blind"], 25);
    assert_eq!(records[0]["meta"]["big_blind"], 50);
}

struct Sleepy;

impl Advisor for Sleepy {
    fn name(&self) -> &str {
        "sleepy"
    }

    fn decide(
        &self,
        _participant: &Participant,
        _state: &GameState,
        _log: &[ActionRecord],
    ) -> Result<Decision, AdvisoryError> {
        std::thread::sleep(Duration::from_millis(300));
        Ok(Decision::call())
    }
}

struct Panicky;

impl Advisor for Panicky {
    fn name(&self) -> &str {
        "panicky"
    }

    fn decide(
        &self,
        _participant: &Participant,
        _state: &GameState,
        _log: &[ActionRecord],
    ) -> Result<Decision, AdvisoryError> {
        panic!("advisor crashed")
    }
}

fn heads_up() -> Engine {
    let roster = vec![
        RosterEntry::advisory("a", 100, None),
        RosterEntry::advisory("b", 100, None),
    ];
    Engine::start(roster, TableConfig::with_blinds(1, 2).seed(1)).unwrap()
}

#[tokio::test]
async fn slow_advisors_time_out_and_fold() {
    let mut engine = heads_up();
    let request = engine.request_decision().unwrap();
    let ticket = request.ticket;
    let actor = request.participant.id().to_string();

    let advisor: Arc<SharedAdvisor> = Arc::new(Box::new(Sleepy));
    let outcome = ask_advisor(advisor, request, Duration::from_millis(20)).await;
    assert_eq!(outcome, Err(AdvisoryError::TimedOut));
    // the gate stays closed until the outcome is handed back
    assert_eq!(engine.decision_in_flight(), Some(actor.as_str()));

    engine.resolve_decision(ticket, outcome).unwrap();
    assert!(engine.decision_in_flight().is_none());
    assert!(engine.state().participant(&actor).unwrap().is_folded());
}

#[tokio::test]
async fn crashed_advisors_are_unavailable() {
    let mut engine = heads_up();
    let request = engine.request_decision().unwrap();
    let advisor: Arc<SharedAdvisor> = Arc::new(Box::new(Panicky));
    let outcome = ask_advisor(advisor, request, Duration::from_secs(5)).await;
    assert!(matches!(outcome, Err(AdvisoryError::Unavailable(_))));
}

#[tokio::test]
async fn quick_advisors_are_answered() {
    let mut engine = heads_up();
    let request = engine.request_decision().unwrap();
    let advisor: Arc<SharedAdvisor> = Arc::new(Box::new(Sleepy));
    let outcome = ask_advisor(advisor, request, Duration::from_secs(5)).await;
    assert_eq!(outcome, Ok(Decision::call()));
}
