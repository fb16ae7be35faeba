use super::*;
use crate::testing::user;

#[test]
fn begin_run_resets_rows_and_locks() {
    let mut board = ProbeBoard::default();
    assert_eq!(board.begin_run(), Some(1));
    assert!(board.running);
    assert_eq!(board.rows.len(), PROBE_TARGETS.len());
    assert!(board.rows.iter().all(|row| row.outcome.is_none()));
}

#[test]
fn second_run_refused_while_first_is_running() {
    let mut board = ProbeBoard::default();
    board.begin_run();
    assert_eq!(board.begin_run(), None);
    assert_eq!(board.run, 1);
}

#[test]
fn finished_run_allows_another() {
    let mut board = ProbeBoard::default();
    let first = board.begin_run().unwrap();
    assert!(board.finish(first, Ok(vec![user(1)])));
    assert!(!board.running);
    assert_eq!(board.begin_run(), Some(2));
    assert_eq!(board.users, None);
}

#[test]
fn stale_run_cannot_overwrite_newer_results() {
    let mut board = ProbeBoard::default();
    let old = board.begin_run().unwrap();
    board.finish(old, Err("offline".to_owned()));
    let current = board.begin_run().unwrap();

    assert!(board.record(current, 0, "200 (5ms) - JSON response".to_owned()));
    assert!(!board.record(old, 0, "500 (900ms) - non-JSON response".to_owned()));
    assert!(!board.finish(old, Ok(Vec::new())));

    assert_eq!(board.rows[0].outcome.as_deref(), Some("200 (5ms) - JSON response"));
    assert!(board.running);
    assert_eq!(board.users, None);
}

#[test]
fn record_ignores_out_of_range_rows() {
    let mut board = ProbeBoard::default();
    let run = board.begin_run().unwrap();
    assert!(!board.record(run, PROBE_TARGETS.len(), "x".to_owned()));
}
