use bfi::commands;
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

fn print_usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} <FILE>   # Run the Brainfuck program in FILE
  {0}          # Start a Brainfuck REPL (read-eval-print loop)

Options:
  --help, -h   Show this help

File mode:
  - The program runs line by line on one tape; a loop may span lines.
  - Input (`,`) reads a single byte from stdin; on EOF the current cell is set to 0.
  - The number of executed operations is reported on stderr when the program ends.
  - Unmatched brackets abort the run with exit code 1.

REPL:
  - Each line runs as soon as its brackets balance; the tape persists between lines.
  - Input (`,`) reads a line from stdin and keeps its first character.
  - Lines starting with a command character:
      !   Exit (code 0)
      $   Print every tape cell, e.g. [0, 5, -2]
      @   Reset the tape to a single zero cell
  - Non-Brainfuck characters are comments.
  - If stdin is a TTY an interactive editor is used; otherwise lines are read
    from stdin and prompts are suppressed unless stderr is a TTY.
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "bfi", disable_help_flag = true)]
struct Cli {
    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    help: bool,

    /// Brainfuck program to run; omit to start the REPL
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // We still pull the program name for help rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("bfi"));

    let cli = Cli::parse();

    if cli.help {
        print_usage_and_exit(&program, 0);
    }

    let code = match cli.file {
        Some(path) => commands::run::run(&program, &path),
        None => commands::repl::run(&program),
    };

    std::process::exit(code);
}
