use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn pargrep() -> Command {
    Command::cargo_bin("pargrep").unwrap()
}

#[test]
fn prints_matching_lines_in_order() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("haystack.txt");
    fs::write(&file, "foo\nbar\nfoobar\n").unwrap();

    pargrep()
        .arg("foo")
        .arg(&file)
        .assert()
        .success()
        .stdout("foo\nfoobar\n");
}

#[test]
fn no_match_exits_with_one() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("haystack.txt");
    fs::write(&file, "abc\ndef\n").unwrap();

    pargrep()
        .arg("xyz")
        .arg(&file)
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn empty_pattern_is_a_distinct_failure() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("haystack.txt");
    fs::write(&file, "abc\n").unwrap();

    pargrep()
        .arg("")
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn empty_file_is_a_setup_failure() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("empty.txt");
    fs::write(&file, "").unwrap();

    pargrep()
        .arg("foo")
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn missing_file_is_a_setup_failure() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("does-not-exist.txt");

    pargrep()
        .arg("foo")
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn count_prints_only_the_total() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("haystack.txt");
    fs::write(&file, "foo\nbar\nfoobar\n").unwrap();

    pargrep()
        .arg("foo")
        .arg(&file)
        .arg("--count")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn json_format_emits_a_document() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("haystack.txt");
    fs::write(&file, "foo\nbar\nfoobar\n").unwrap();

    pargrep()
        .arg("foo")
        .arg(&file)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_matches\": 2"));
}

#[test]
fn thread_override_does_not_change_output() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("big.txt");
    // large enough that the planner actually splits the file
    fs::write(&file, "needle one\nplain\nanother needle\n".repeat(500)).unwrap();

    let single = pargrep()
        .arg("needle")
        .arg(&file)
        .arg("--threads")
        .arg("1")
        .assert()
        .success();
    let parallel = pargrep()
        .arg("needle")
        .arg(&file)
        .arg("--threads")
        .arg("8")
        .assert()
        .success();

    assert_eq!(
        single.get_output().stdout,
        parallel.get_output().stdout
    );
}

#[test]
fn final_line_without_terminator_is_searched() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("haystack.txt");
    fs::write(&file, "alpha\nbeta needle").unwrap();

    pargrep()
        .arg("needle")
        .arg(&file)
        .assert()
        .success()
        .stdout("beta needle\n");
}
