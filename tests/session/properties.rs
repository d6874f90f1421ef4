//! Property tests over random protocol lines.
//!
//! With a small universe of names and values, every count the session
//! reports can be recomputed from GET answers alone.

use crate::common::*;
use proptest::prelude::*;
use simpledb::Session;

const NAMES: &[&str] = &["a", "b", "c", "d", "e"];
const VALUES: &[&str] = &["1", "2", "3"];

fn line_strategy() -> impl Strategy<Value = String> {
    let name = prop::sample::select(NAMES);
    let value = prop::sample::select(VALUES);
    prop_oneof![
        5 => (name.clone(), value).prop_map(|(k, v)| format!("SET {k} {v}")),
        2 => name.clone().prop_map(|k| format!("unset {k}")),
        1 => name.prop_map(|k| format!("GET {k}")),
        2 => Just("BEGIN".to_string()),
        1 => Just("ROLLBACK".to_string()),
        1 => Just("COMMIT".to_string()),
        1 => "[a-z ]{0,12}",
    ]
}

fn assert_counts_consistent(session: &mut Session) {
    let held: Vec<Option<String>> = NAMES.iter().map(|n| get(session, n)).collect();
    for value in VALUES {
        let expected = held.iter().filter(|v| v.as_deref() == Some(*value)).count() as u64;
        assert_eq!(count(session, value), expected, "NUMEQUALTO {value}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn counts_match_effective_values(lines in prop::collection::vec(line_strategy(), 1..80)) {
        let mut session = Session::new();
        for line in &lines {
            session.execute_line(line);
            assert_counts_consistent(&mut session);
        }
    }

    #[test]
    fn commit_leaves_root(lines in prop::collection::vec(line_strategy(), 0..40)) {
        let mut session = Session::new();
        run(&mut session, &["BEGIN"]);
        for line in &lines {
            session.execute_line(line);
        }
        let opened = session.in_transaction();
        let result = session.execute_line("COMMIT").unwrap();

        prop_assert_eq!(result.is_ok(), opened);
        prop_assert!(!session.in_transaction());
        assert_counts_consistent(&mut session);
    }
}
