// Exercises the ',' instruction in file mode: stdin is consumed byte by byte,
// so an echo loop copies it verbatim, newlines included.
use std::io::Write;

#[test]
fn echo_loop_copies_stdin() {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, ",[.,]").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("bfi")
        .expect("failed to locate bfi binary");

    cmd.arg(tf.path())
        .write_stdin("two\nlines")
        .assert()
        .success()
        .stdout("two\nlines\n");
}
