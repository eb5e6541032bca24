use assert_cmd::Command;
use predicates::prelude::*;

fn keysweep() -> Command {
    let mut cmd = Command::cargo_bin("keysweep").expect("binary should be built");
    cmd.env_remove("KEYSWEEP_TARGET")
        .env_remove("KEYSWEEP_CHARSET")
        .env_remove("KEYSWEEP_WORKERS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_parallel_search_from_argument() {
    keysweep()
        .args(["--target", "ba", "--alphabet", "ab", "-j", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Match found!"))
        .stdout(predicate::str::contains("Recovered value: ba"))
        .stdout(predicate::str::contains("Elapsed time:"));
}

#[test]
fn test_incremental_search_from_stdin() {
    keysweep()
        .args(["--strategy", "incremental", "--charset", "digits"])
        .write_stdin("42\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recovered value: 42"))
        .stdout(predicate::str::contains("Candidates evaluated: 53"));
}

#[test]
fn test_target_from_environment() {
    keysweep()
        .env("KEYSWEEP_TARGET", "zy")
        .args(["--alphabet", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recovered value: zy"));
}

#[test]
fn test_no_match_reported() {
    keysweep()
        .args(["--target", "abd", "--alphabet", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No match found."))
        .stdout(predicate::str::contains("Candidates evaluated: 27"))
        .stdout(predicate::str::contains("Throughput:"))
        .stdout(predicate::str::contains("Recovered value").not());
}

#[test]
fn test_empty_alphabet_rejected() {
    keysweep()
        .args(["--target", "a", "--alphabet", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("alphabet must contain at least one symbol"));
}

#[test]
fn test_unknown_strategy_rejected() {
    keysweep()
        .args(["--target", "a", "--strategy", "dictionary"])
        .assert()
        .failure();
}

#[test]
fn test_verbose_prints_configuration() {
    keysweep()
        .args(["--target", "b", "--alphabet", "abc", "-j", "8", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy: parallel"))
        .stdout(predicate::str::contains("Workers: 3"));
}
