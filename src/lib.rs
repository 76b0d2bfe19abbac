//! A tiny Brainfuck interpreter library.
//!
//! This crate runs Brainfuck on a tape that grows without bound in both
//! directions, one bracket-balanced chunk of source at a time, so a program
//! can arrive line by line from a file or a REPL while keeping its memory.
//!
//! Features and behaviors:
//! - Memory cells are `u8`, initialized to 0, and wrap on overflow.
//! - Moving left of the first cell or right of the last one allocates a new
//!   zeroed cell; the tape never runs out short of host memory.
//! - Input `,` reads a single byte; at end of input the current cell is set to 0.
//! - Output `.` writes the byte at the current cell (no newline).
//! - Loops `[]` nest; unmatched brackets reject the whole chunk before it runs.
//! - Any other character is a comment.
//!
//! Quick start:
//!
//! ```no_run
//! use bfi::{Interpreter, StreamInput};
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
//! let mut bf = Interpreter::new();
//! let mut stdin = StreamInput::new(std::io::stdin());
//! let stats = bf.run_chunk(code, &mut stdin, &mut std::io::stdout()).expect("program should run");
//! eprintln!("Executed {} operations.", stats.operations);
//! ```

pub mod chunk;
pub mod cli_util;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod interpreter;
pub mod jump_table;
pub mod repl;
pub mod session;
pub mod tape;
mod theme;

pub use chunk::ChunkAccumulator;
pub use command::ReplCommand;
pub use error::{BrainfuckError, UnmatchedBracketKind};
pub use input::{ByteSource, LineInput, LineSource, Prompt, ReaderLines, StdinLines, StreamInput};
pub use interpreter::{Interpreter, RunStats, EOF_SENTINEL};
pub use jump_table::JumpTable;
pub use session::{run_interactive, run_program, SessionEnd};
pub use tape::{Tape, TapeError};
