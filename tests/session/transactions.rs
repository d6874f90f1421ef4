//! Transaction nesting, rollback purity and commit flattening.

use crate::common::*;
use simpledb::{Command, Session};

const NAMES: &[&str] = &["a", "b", "c"];
const VALUES: &[&str] = &["1", "2"];

#[test]
fn shadowing_and_restore() {
    let mut session = Session::new();
    run(&mut session, &["SET a 1", "BEGIN", "SET a 2"]);
    assert_eq!(get(&mut session, "a").as_deref(), Some("2"));

    run(&mut session, &["ROLLBACK"]);
    assert_eq!(get(&mut session, "a").as_deref(), Some("1"));
}

#[test]
fn rollback_closes_one_level() {
    let mut session = Session::new();
    run(&mut session, &["BEGIN", "BEGIN", "BEGIN"]);
    assert_eq!(session.depth(), 3);

    run(&mut session, &["ROLLBACK"]);
    assert_eq!(session.depth(), 2);
}

#[test]
fn commit_from_any_depth_matches_root() {
    let sequences: [&[&str]; 3] = [
        &["BEGIN", "BEGIN", "SET a 1", "COMMIT"],
        &["BEGIN", "SET a 1", "COMMIT"],
        &["SET a 1"],
    ];

    let mut snapshots = Vec::new();
    for lines in sequences {
        let mut session = Session::new();
        run(&mut session, lines);
        assert!(!session.in_transaction());
        snapshots.push(observe(&mut session, NAMES, VALUES));
    }
    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[1], snapshots[2]);
}

#[test]
fn commit_keeps_writes_from_every_level() {
    let mut session = Session::new();
    run(
        &mut session,
        &["BEGIN", "SET a 1", "BEGIN", "SET b 2", "BEGIN", "SET c 1", "UNSET a", "COMMIT"],
    );

    assert_eq!(get(&mut session, "a"), None);
    assert_eq!(get(&mut session, "b").as_deref(), Some("2"));
    assert_eq!(get(&mut session, "c").as_deref(), Some("1"));
    assert_eq!(count(&mut session, "1"), 1);
    assert_eq!(count(&mut session, "2"), 1);
}

#[test]
fn commit_is_not_undone_by_a_later_rollback() {
    let mut session = Session::new();
    run(&mut session, &["BEGIN", "SET a 1", "COMMIT", "BEGIN", "SET a 2", "ROLLBACK"]);
    assert_eq!(get(&mut session, "a").as_deref(), Some("1"));
}

#[test]
fn rollback_restores_every_observation() {
    let mut session = Session::new();
    run(&mut session, &["SET a 1", "SET b 1", "BEGIN", "SET c 2"]);
    let before = observe(&mut session, NAMES, VALUES);

    run(
        &mut session,
        &["BEGIN", "UNSET a", "SET b 2", "SET c 1", "UNSET missing"],
    );
    assert_ne!(observe(&mut session, NAMES, VALUES), before);

    run(&mut session, &["ROLLBACK"]);
    assert_eq!(session.depth(), 1);
    assert_eq!(observe(&mut session, NAMES, VALUES), before);
}

#[test]
fn deep_nesting_commits_and_drops() {
    let mut session = Session::new();
    for i in 0..10_000 {
        session.execute(Command::Begin).unwrap();
        if i % 100 == 0 {
            session.execute_line(&format!("SET k{} v", i));
        }
    }
    assert_eq!(session.depth(), 10_000);
    assert_eq!(count(&mut session, "v"), 100);

    session.execute(Command::Commit).unwrap();
    assert_eq!(session.depth(), 0);
    assert_eq!(count(&mut session, "v"), 100);
    assert_eq!(session.stats().depth, 0);
}

#[test]
fn dropping_session_with_open_transactions() {
    let mut session = Session::new();
    for _ in 0..50_000 {
        session.execute(Command::Begin).unwrap();
    }
    drop(session);
}

#[test]
fn transitions_are_counted() {
    let mut session = Session::new();
    run(
        &mut session,
        &["BEGIN", "BEGIN", "ROLLBACK", "COMMIT", "COMMIT"],
    );

    let metrics = session.metrics();
    assert_eq!(metrics.begun, 2);
    assert_eq!(metrics.rolled_back, 1);
    assert_eq!(metrics.commits, 1);
    assert_eq!(metrics.errors, 1);
}
