use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use crate::cli_util::print_error;
use crate::input::{ReaderLines, StreamInput};
use crate::session::run_program;
use crate::BrainfuckError;

// Public entry point for file mode from main.rs
pub fn run(program: &str, path: &Path) -> i32 {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(source) => {
            let err = BrainfuckError::FileOpenFailed { path: path.to_path_buf(), source };
            print_error(Some(program), "", &err);
            return 1;
        }
    };
    log::debug!("running {}", path.display());

    let lines = ReaderLines::new(BufReader::new(file));
    // `,` consumes stdin byte by byte; nothing else reads it in file mode
    let mut input = StreamInput::new(io::stdin().lock());
    let mut stdout = io::stdout().lock();

    match run_program(program, lines, &mut input, &mut stdout) {
        Ok(stats) => {
            // For readability, ensure output ends with a newline
            if stats.printed() {
                let _ = writeln!(stdout);
            }
            let _ = stdout.flush();
            eprintln!("Executed {} operations.", stats.operations);
            let _ = io::stderr().flush();
            0
        }
        Err(err) => {
            let _ = stdout.flush();
            // chunk errors were already shown with their context
            if err.instruction().is_none() {
                print_error(Some(program), "", &err);
            }
            1
        }
    }
}
