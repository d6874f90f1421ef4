//! NUMEQUALTO against the effective state, through every kind of write.

use crate::common::*;
use simpledb::Session;

#[test]
fn unknown_value_counts_zero() {
    let mut session = Session::new();
    assert_eq!(count(&mut session, "nothing"), 0);
    run(&mut session, &["BEGIN", "BEGIN"]);
    assert_eq!(count(&mut session, "nothing"), 0);
}

#[test]
fn rewriting_the_same_value_counts_once() {
    let mut session = Session::new();
    run(&mut session, &["SET a 1", "SET a 1", "BEGIN", "SET a 1", "SET a 1"]);
    assert_eq!(count(&mut session, "1"), 1);
}

#[test]
fn unset_is_idempotent() {
    let mut session = Session::new();
    let results = run(
        &mut session,
        &["UNSET never", "SET a 1", "UNSET a", "UNSET a", "BEGIN", "UNSET a", "UNSET b"],
    );
    assert!(results.iter().all(|r| *r == unit()));
    assert_eq!(count(&mut session, "1"), 0);
    assert_eq!(get(&mut session, "a"), None);
}

#[test]
fn counts_move_between_values() {
    let mut session = Session::new();
    run(&mut session, &["SET a x", "SET b x", "SET c y", "BEGIN", "SET a y"]);
    assert_eq!(count(&mut session, "x"), 1);
    assert_eq!(count(&mut session, "y"), 2);

    run(&mut session, &["BEGIN", "UNSET c", "SET b y"]);
    assert_eq!(count(&mut session, "x"), 0);
    assert_eq!(count(&mut session, "y"), 2);

    run(&mut session, &["ROLLBACK"]);
    assert_eq!(count(&mut session, "x"), 1);
    assert_eq!(count(&mut session, "y"), 2);

    run(&mut session, &["ROLLBACK"]);
    assert_eq!(count(&mut session, "x"), 2);
    assert_eq!(count(&mut session, "y"), 1);
}

#[test]
fn reads_do_not_materialize() {
    let mut session = Session::new();
    run(&mut session, &["SET a 1", "SET b 2", "BEGIN"]);
    let before = session.stats();

    get(&mut session, "a");
    count(&mut session, "2");
    run(&mut session, &["UNSET never"]);
    assert_eq!(session.stats(), before);
}

#[test]
fn first_write_materializes_only_what_it_touches() {
    let mut session = Session::new();
    run(&mut session, &["SET a 1", "SET b 1", "SET c 2", "BEGIN"]);
    let root = session.stats();

    run(&mut session, &["SET a 2"]);
    let nested = session.stats();
    // One name plus the two counts it moved between
    assert_eq!(nested.names, root.names + 1);
    assert_eq!(nested.counts, root.counts + 2);
}
