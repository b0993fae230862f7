//! Failure-path checks of the binary itself.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn unreachable_server_logs_failure_and_prints_no_report() {
    // Port 9 (discard) refuses MongoDB connections; short timeouts keep
    // server selection from stalling the test.
    Command::cargo_bin("mixpanel-report")
        .unwrap()
        .arg("--uri")
        .arg("mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=500&connectTimeoutMS=500")
        .assert()
        .failure()
        .stderr(predicate::str::contains("report failed"))
        .stdout(predicate::str::is_empty());
}
