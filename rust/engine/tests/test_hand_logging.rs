mod common;

use std::fs;
use std::path::PathBuf;

use common::{check_down, rigged};
use tablestakes_engine::config::TableConfig;
use tablestakes_engine::game::Phase;
use tablestakes_engine::logger::{HandLogger, HandRecord, RecordedAction};
use tablestakes_engine::player::ActionKind::{Fold, Raise};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

#[test]
fn showdown_record_names_winners_and_hands() {
    let mut e = rigged(
        &[("ann", 100), ("bob", 100)],
        TableConfig::with_blinds(1, 2).seed(10),
        "As Ah Ks Kh 2d 7c 9d Jc 4h",
    );
    check_down(&mut e);
    let record = e.state().hand_record("20260101-000001".to_string());

    assert_eq!(record.seed, Some(11));
    assert_eq!(record.board.len(), 5);
    assert_eq!(record.result.as_deref(), Some("ann wins 4"));
    let showdown = record.showdown.as_ref().unwrap();
    assert_eq!(showdown.winners, vec!["ann".to_string()]);
    assert_eq!(showdown.pot, 4);
    assert_eq!(
        showdown.notes.as_deref(),
        Some("ann: One Pair, bob: One Pair")
    );
    assert_eq!(
        record.actions[0].action,
        RecordedAction::SmallBlind { amount: 1 }
    );
    assert!(record.actions.iter().all(|a| a.hand == 1));
    let meta = record.meta.as_ref().unwrap();
    assert_eq!(meta["dealer"], "ann");
    assert_eq!(meta["big_blind"], 2);
}

#[test]
fn uncontested_record_reports_no_hands() {
    let mut e = rigged(
        &[("ann", 100), ("bob", 100)],
        TableConfig::with_blinds(1, 2),
        "As Ah Ks Kh",
    );
    e.propose_action("ann", Raise, Some(6)).unwrap();
    e.propose_action("bob", Fold, None).unwrap();
    assert_eq!(e.state().phase(), Phase::Showdown);

    let record = e.state().hand_record("x".to_string());
    assert!(record.board.is_empty());
    assert_eq!(record.result.as_deref(), Some("ann wins 8"));
    assert_eq!(
        record.showdown.unwrap().notes.as_deref(),
        Some("uncontested")
    );
    assert_eq!(
        record.actions.last().unwrap().action,
        RecordedAction::Fold
    );
}

#[test]
fn writes_jsonl_with_lf_only_and_injects_timestamp() {
    let path = tmp_path("handlog");
    let mut e = rigged(
        &[("ann", 100), ("bob", 100)],
        TableConfig::with_blinds(1, 2),
        "As Ah Ks Kh 2d 7c 9d Jc 4h",
    );
    check_down(&mut e);

    let mut logger = HandLogger::create(&path).expect("create logger");
    let id = logger.next_id();
    let record = e.state().hand_record(id.clone());
    logger.write(&record).expect("write");
    let mut stamped = record.clone();
    stamped.ts = Some("2026-01-01T00:00:00Z".to_string());
    logger.write(&stamped).expect("write");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));

    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: HandRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first.hand_id, id);
    assert!(first.ts.is_some());
    assert_eq!(first.actions, record.actions);
    let second: HandRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.ts.as_deref(), Some("2026-01-01T00:00:00Z"));

    let _ = fs::remove_file(&path);
}
