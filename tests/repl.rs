use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

// Piped stdin selects the bare REPL; piped stderr suppresses prompts.
fn make_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bfi").expect("bfi binary");
    cmd.timeout(Duration::from_secs(5));
    cmd
}

#[test]
fn empty_input_exits_clean_and_quiet() {
    make_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn output_then_dump_then_quit() {
    // 5 * 13 = 65 = 'A'
    make_cmd()
        .write_stdin("+++++[>+++++++++++++<-]>.\n$\n!\n")
        .assert()
        .success()
        .stdout("A\n[0, 65]\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn tape_persists_across_lines() {
    make_cmd()
        .write_stdin("+++\n>++\n<.\n")
        .assert()
        .success()
        .stdout("\u{3}\n");
}

#[test]
fn loop_spans_continuation_lines() {
    make_cmd()
        .write_stdin("+++[\n>++<-\n]>.\n")
        .assert()
        .success()
        .stdout("\u{6}\n");
}

#[test]
fn dump_prints_signed_cells() {
    make_cmd()
        .write_stdin(">+++++>--\n$\n")
        .assert()
        .success()
        .stdout("[0, 5, -2]\n");
}

#[test]
fn reset_starts_a_fresh_tape() {
    make_cmd()
        .write_stdin(">>+++\n@\n$\n")
        .assert()
        .success()
        .stdout("[0]\n");
}

#[test]
fn quit_ignores_everything_after_it() {
    make_cmd()
        .write_stdin("!\n+++.\n")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn unbalanced_line_reports_error_and_session_continues() {
    make_cmd()
        .write_stdin("]\n+.\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Parse error: unmatched bracket ']'"))
        .stdout("\u{1}\n");
}

#[test]
fn comma_reads_the_first_character_of_the_next_line() {
    make_cmd()
        .write_stdin(",.\nZebra\n$\n")
        .assert()
        .success()
        .stdout("Z\n[90]\n");
}

#[test]
fn comma_at_end_of_input_stores_zero() {
    make_cmd()
        .write_stdin("+++,+.\n")
        .assert()
        .success()
        .stdout("\u{1}\n");
}

#[test]
fn non_utf8_lines_keep_the_session_alive() {
    make_cmd()
        .write_stdin(&b"+ \xff\n.\n"[..])
        .assert()
        .success()
        .stdout("\u{1}\n");
}

#[test]
fn non_persistent_state_across_processes() {
    let program = "+++++[>+++++++++++++<-]>.\n";
    let out1 = make_cmd().write_stdin(program).assert().success().get_output().stdout.clone();
    let out2 = make_cmd().write_stdin(program).assert().success().get_output().stdout.clone();
    assert_eq!(out1, b"A\n");
    assert_eq!(out1, out2, "each process starts from a fresh tape");
}
