// End-to-end runs of the ctstat binary over temporary log directories

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ctstat() -> Command {
    Command::cargo_bin("ctstat").unwrap()
}

#[test]
fn test_reports_mean_per_test_case() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("run.txt"),
        " 1/3 Test #1: my_case ..........   Passed    0.030 sec\n\
          2/3 Test #2: my_case ..........   Passed    0.038 sec\n\
          3/3 Test #3: other-case .......   Passed    1.500 sec\n",
    )
    .unwrap();

    ctstat()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("run.txt"))
        .stdout(predicate::str::contains("my_case 0.034 sec"))
        .stdout(predicate::str::contains("other-case 1.5 sec"));
}

#[test]
fn test_block_layout_header_cases_blank_line() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("run.txt");
    fs::write(
        &log,
        "Test #1: x Passed 1.0\nTest #2: x Passed 2.0\nTest #3: x Passed 3.0\n",
    )
    .unwrap();

    let expected = format!("{}\nx 2.0 sec\n\n", log.display());
    ctstat().arg(dir.path()).assert().success().stdout(expected);
}

#[test]
fn test_first_seen_order_in_report() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("run.txt"),
        "Test #1: bbb Passed 1.0\nTest #2: aaa Passed 2.0\nTest #3: bbb Passed 3.0\n",
    )
    .unwrap();

    let assert = ctstat().arg(dir.path()).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let bbb = stdout.find("bbb 2.0 sec").unwrap();
    let aaa = stdout.find("aaa 2.0 sec").unwrap();
    assert!(bbb < aaa);
}

#[test]
fn test_file_without_matches_prints_header_only() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("noise.txt");
    fs::write(&log, "nothing relevant in here\n").unwrap();

    let expected = format!("{}\n\n", log.display());
    ctstat().arg(dir.path()).assert().success().stdout(expected);
}

#[test]
fn test_empty_directory_prints_nothing() {
    let dir = TempDir::new().unwrap();
    ctstat()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_sorted_flag_orders_file_reports() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.txt"), "Test #1: later Passed 1.0\n").unwrap();
    fs::write(dir.path().join("a.txt"), "Test #1: earlier Passed 1.0\n").unwrap();

    let assert = ctstat()
        .arg("--sorted")
        .arg(dir.path())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.find("a.txt").unwrap() < stdout.find("b.txt").unwrap());
}

#[test]
fn test_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    ctstat()
        .arg(dir.path().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("directory not found"));
}

#[test]
fn test_nested_directory_entry_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    ctstat()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a file"));
}

#[test]
fn test_invalid_utf8_log_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("binary.log"), [0xff, 0xfe, 0x41]).unwrap();

    ctstat()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_debug_flag_writes_diagnostics_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("run.txt"), "Test #1: x Passed 1.0\n").unwrap();

    let assert = ctstat()
        .arg("--debug")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("x 1.0 sec"));
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("aggregated log file"));
}
