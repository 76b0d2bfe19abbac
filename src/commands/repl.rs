use std::io::{self, IsTerminal, Write};

use crate::cli_util::print_error;
use crate::repl::{repl_loop, select_mode, ReplMode};

// Public entry point for interactive mode from main.rs
pub fn run(program: &str) -> i32 {
    // Install SIGINT (ctrl+c) handler to flush and exit(0) immediately
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        std::process::exit(0);
    }) {
        eprintln!("{program}: failed to set ctrl+c handler: {e}");
        let _ = io::stderr().flush();
        return 1;
    }

    let mode = select_mode();
    log::debug!("starting {mode:?} session");

    // Print banners only if stderr is a TTY
    if mode == ReplMode::Editor && io::stderr().is_terminal() {
        eprintln!("Brainfuck REPL");
        eprintln!("Enter runs a line; unclosed loops continue on the next line.");
        eprintln!("'!' exits, '$' dumps the tape, '@' resets it. Ctrl+d or ctrl+c also exit.");
        let _ = io::stderr().flush();
    }

    match repl_loop(program, mode) {
        Ok(end) => {
            log::debug!("session ended: {end:?}");
            if mode == ReplMode::Editor {
                println!();
            }
            let _ = io::stdout().flush();
            0
        }
        Err(err) => {
            // chunk errors were already shown with their context
            if err.instruction().is_none() {
                print_error(Some(program), "", &err);
            }
            1
        }
    }
}
