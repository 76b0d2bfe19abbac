use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::time::Duration;

fn cargo_bin() -> Command {
    let mut cmd = Command::cargo_bin("bfi").unwrap();
    cmd.timeout(Duration::from_secs(5));
    cmd
}

fn program_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn reports_operation_count_on_stderr() {
    let tf = program_file("++>+++++[<+>-]<\n");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr("Executed 35 operations.\n");
}

#[test]
fn hello_world_with_loops_across_lines() {
    let tf = program_file(
        "++++++++\n\
         [ outer loop\n\
           >++++[>++>+++>+++>+<<<<-]\n\
           >+>+>->>+[<]<-\n\
         ]\n\
         >>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.\n",
    );
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hello World!\n"))
        .stderr(predicate::str::contains("Executed").and(predicate::str::contains("operations.")));
}

#[test]
fn tape_persists_across_lines() {
    let tf = program_file("+++\n>++\n<.\n");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("\u{3}\n")
        .stderr("Executed 8 operations.\n");
}

#[test]
fn comments_are_not_counted() {
    let tf = program_file("+ plus then . dot\n");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("\u{1}\n")
        .stderr("Executed 2 operations.\n");
}

#[test]
fn latin1_comments_are_inert() {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    tf.write_all(b"+++ caf\xe9 .\n").unwrap();
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("\u{3}\n")
        .stderr("Executed 4 operations.\n");
}

#[test]
fn empty_file_executes_nothing() {
    let tf = program_file("");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr("Executed 0 operations.\n");
}

#[test]
fn input_bytes_come_from_stdin() {
    let tf = program_file(",.,.\n");
    cargo_bin()
        .arg(tf.path())
        .write_stdin("hi")
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn input_exhaustion_stores_zero() {
    let tf = program_file(",+.\n");
    cargo_bin()
        .arg(tf.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout("\u{1}\n");
}

#[test]
fn tape_grows_left_of_the_start() {
    let tf = program_file("<<<+++[>+++<-]>.\n");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("\u{9}\n");
}
