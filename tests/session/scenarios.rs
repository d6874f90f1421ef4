//! End-to-end command sequences with their expected responses.

use crate::common::*;
use simpledb::Session;

#[test]
fn set_get_unset_sequence() {
    let mut session = Session::new();
    let results = run(
        &mut session,
        &["SET ex 1", "GET ex", "UNSET ex", "GET ex", "NUMEQUALTO 1", "END"],
    );
    assert_eq!(
        results,
        vec![
            unit(),
            value("1"),
            unit(),
            null(),
            counted(0),
            Ok(simpledb::Output::End)
        ]
    );
}

#[test]
fn count_follows_overwrites() {
    let mut session = Session::new();
    let results = run(
        &mut session,
        &["SET a 10", "SET b 10", "NUMEQUALTO 10", "NUMEQUALTO 20", "SET b 30", "NUMEQUALTO 10"],
    );
    assert_eq!(results[2], counted(2));
    assert_eq!(results[3], counted(0));
    assert_eq!(results[5], counted(1));
}

#[test]
fn nested_rollback_then_commit() {
    let mut session = Session::new();
    let results = run(
        &mut session,
        &[
            "BEGIN", "SET a 10", "GET a", "BEGIN", "SET a 20", "GET a", "ROLLBACK", "GET a",
            "ROLLBACK", "GET a",
        ],
    );
    assert_eq!(results[2], value("10"));
    assert_eq!(results[5], value("20"));
    assert_eq!(results[7], value("10"));
    assert_eq!(results[9], null());
}

#[test]
fn nested_commit_keeps_innermost_values() {
    let mut session = Session::new();
    let results = run(
        &mut session,
        &[
            "BEGIN", "SET a 30", "BEGIN", "SET a 40", "COMMIT", "GET a", "ROLLBACK",
        ],
    );
    assert_eq!(results[5], value("40"));
    assert_eq!(results[6], Err(simpledb::Error::NoTransaction));
}

#[test]
fn unset_inside_transaction_then_commit() {
    let mut session = Session::new();
    let results = run(
        &mut session,
        &[
            "SET a 50", "BEGIN", "GET a", "SET a 60", "BEGIN", "UNSET a", "GET a", "ROLLBACK",
            "GET a", "COMMIT", "GET a",
        ],
    );
    assert_eq!(results[2], value("50"));
    assert_eq!(results[6], null());
    assert_eq!(results[8], value("60"));
    assert_eq!(results[10], value("60"));
}

#[test]
fn counts_through_nested_scopes() {
    let mut session = Session::new();
    let results = run(
        &mut session,
        &[
            "SET a 10", "BEGIN", "NUMEQUALTO 10", "BEGIN", "UNSET a", "NUMEQUALTO 10", "ROLLBACK",
            "NUMEQUALTO 10", "COMMIT", "END",
        ],
    );
    assert_eq!(results[2], counted(1));
    assert_eq!(results[5], counted(0));
    assert_eq!(results[7], counted(1));
    assert_eq!(results[8], unit());
}

#[test]
fn keywords_ignore_case_but_arguments_do_not() {
    let mut session = Session::new();
    let results = run(&mut session, &["set Name Alice", "Get Name", "gEt name"]);
    assert_eq!(results, vec![unit(), value("Alice"), null()]);
}
