// SPDX-License-Identifier: MIT
// Project: decomment
// Description: A program to remove comments from source files.
// File: tests/cli.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn decomment_filters_stdin_to_stdout() {
    Command::cargo_bin("decomment")
        .unwrap()
        .write_stdin("int x = 5; // set x\n/* block\ncomment */int y;\n")
        .assert()
        .success()
        .stdout("int x = 5; \nint y;\n");
}

#[test]
fn decomment_empty_stdin_exits_zero() {
    Command::cargo_bin("decomment")
        .unwrap()
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn decomment_preserves_literals() {
    Command::cargo_bin("decomment")
        .unwrap()
        .write_stdin("char *s = \"/* not a comment */\";\n")
        .assert()
        .success()
        .stdout("char *s = \"/* not a comment */\";\n");
}

#[test]
fn decomment_flushes_trailing_slash() {
    Command::cargo_bin("decomment")
        .unwrap()
        .write_stdin("\"x\"/")
        .assert()
        .success()
        .stdout("\"x\"/");
}

#[test]
fn decomment_reads_file_and_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.c");
    let output = dir.path().join("out.c");
    fs::write(&input, "a = b / c; // divide\n").unwrap();

    Command::cargo_bin("decomment")
        .unwrap()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "a = b / c; \n");
}

#[test]
fn decomment_rejects_missing_input_file() {
    Command::cargo_bin("decomment")
        .unwrap()
        .arg("no/such/file.c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn decomment_verbose_reports_totals_on_stderr() {
    Command::cargo_bin("decomment")
        .unwrap()
        .arg("-v")
        .write_stdin("// a\n/* b */ x\n")
        .assert()
        .success()
        .stdout("\n x\n")
        .stderr(predicate::str::contains("Total line comments removed: 1"))
        .stderr(predicate::str::contains("Total block comments removed: 1"));
}

#[test]
fn decomment_verbose_reports_clean_input() {
    Command::cargo_bin("decomment")
        .unwrap()
        .arg("-v")
        .write_stdin("plain text\n")
        .assert()
        .success()
        .stdout("plain text\n")
        .stderr(predicate::str::contains("No comments found"));
}

#[test]
fn detab_expands_at_default_stops() {
    Command::cargo_bin("detab")
        .unwrap()
        .write_stdin("a\tb\n")
        .assert()
        .success()
        .stdout("a       b\n");
}

#[test]
fn detab_honors_tabstop_flag() {
    Command::cargo_bin("detab")
        .unwrap()
        .args(["-t", "4"])
        .write_stdin("\tx\n")
        .assert()
        .success()
        .stdout("    x\n");
}

#[test]
fn detab_rejects_zero_tabstop() {
    Command::cargo_bin("detab")
        .unwrap()
        .args(["-t", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tab stop"));
}

#[test]
fn entab_compresses_blank_runs() {
    Command::cargo_bin("entab")
        .unwrap()
        .write_stdin("        x\n")
        .assert()
        .success()
        .stdout("\tx\n");
}

#[test]
fn entab_flushes_trailing_blanks() {
    Command::cargo_bin("entab")
        .unwrap()
        .write_stdin("x   ")
        .assert()
        .success()
        .stdout("x   ");
}
