use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("deskcalc"));
    cmd.arg("tests/fixtures/chained.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("12\n"));

    Ok(())
}

#[test]
fn test_cli_divide_by_zero_fails_soft() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("deskcalc"));
    cmd.arg("tests/fixtures/divide_by_zero.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("Infinity\n"));

    Ok(())
}

#[test]
fn test_cli_trace_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("deskcalc"));
    cmd.arg("tests/fixtures/chained.csv").arg("--trace");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("key,display,pending"))
        // Chained operator evaluates the pending addition
        .stdout(predicate::str::contains("+,10,+"))
        .stdout(predicate::str::contains("=,12,"));

    Ok(())
}

#[test]
fn test_cli_unknown_key_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let tape = dir.path().join("tape.csv");
    common::write_tape(&tape, &["7", "boom", "+", "3", "="])?;

    let mut cmd = Command::new(cargo_bin!("deskcalc"));
    cmd.arg(&tape);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("10\n"))
        .stderr(predicate::str::contains("boom"));

    Ok(())
}

#[test]
fn test_cli_missing_input_file() {
    let mut cmd = Command::new(cargo_bin!("deskcalc"));
    cmd.arg("does_not_exist.csv");

    cmd.assert().failure();
}

#[test]
fn test_cli_empty_tape_prints_initial_display() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let tape = dir.path().join("empty.csv");
    common::write_tape(&tape, &[])?;

    let mut cmd = Command::new(cargo_bin!("deskcalc"));
    cmd.arg(&tape);

    cmd.assert().success().stdout(predicate::str::diff("0\n"));

    Ok(())
}

#[test]
fn test_cli_long_tape() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let tape = dir.path().join("long.csv");

    // 10k rounds of "+ 1", starting from 1
    let mut keys = vec!["1"];
    for _ in 0..10_000 {
        keys.push("+");
        keys.push("1");
    }
    keys.push("=");
    common::write_tape(&tape, &keys)?;

    let mut cmd = Command::new(cargo_bin!("deskcalc"));
    cmd.arg(&tape);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("10001\n"));

    Ok(())
}
