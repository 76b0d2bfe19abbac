//! Driving the interpreter over a whole source: a program file run in one
//! go, or an interactive session fed line by line.
//!
//! Both keep one [`Interpreter`] (and so one tape) for their whole duration.
//! Errors tied to a chunk are reported on stderr with context where they
//! happen; the caller decides the exit status.

use std::io::Write;

use crate::chunk::ChunkAccumulator;
use crate::cli_util;
use crate::command::ReplCommand;
use crate::error::BrainfuckError;
use crate::input::{ByteSource, LineSource, Prompt};
use crate::interpreter::{Interpreter, RunStats};

/// Execute every chunk of `lines` on one tape. Chunk errors are reported
/// under the `program` name.
///
/// Any error, including an unbalanced chunk, aborts the run; the totals of
/// chunks executed so far are discarded.
pub fn run_program<L, I, W>(program: &str, lines: L, input: &mut I, output: &mut W) -> Result<RunStats, BrainfuckError>
where
    L: LineSource,
    I: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    let mut interp = Interpreter::new();
    let mut chunks = ChunkAccumulator::new(lines);
    let mut total = RunStats::default();

    while let Some(chunk) = chunks.next_chunk()? {
        match interp.run_chunk(&chunk, input, output) {
            Ok(stats) => {
                total.operations += stats.operations;
                total.output_bytes += stats.output_bytes;
            }
            Err(err) => {
                let _ = output.flush();
                cli_util::print_error(Some(program), &chunk, &err);
                return Err(err);
            }
        }
    }

    output.flush().map_err(BrainfuckError::Output)?;
    log::debug!("program finished after {} operations", total.operations);
    Ok(total)
}

/// How an interactive session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user entered `!`.
    Quit,
    /// The line source ran dry (Ctrl+D, closed stdin).
    EndOfInput,
}

/// Read-eval loop: one line at a time, commands first, then code.
///
/// An unbalanced chunk is reported and skipped; every other error ends the
/// session.
pub fn run_interactive<L, I, W>(program: &str, mut lines: L, input: &mut I, output: &mut W) -> Result<SessionEnd, BrainfuckError>
where
    L: LineSource,
    I: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    let mut interp = Interpreter::new();

    loop {
        let Some(line) = lines
            .read_line(Prompt::Primary)
            .map_err(BrainfuckError::SourceRead)?
        else {
            return Ok(SessionEnd::EndOfInput);
        };

        match ReplCommand::parse(&line) {
            Some(ReplCommand::Quit) => return Ok(SessionEnd::Quit),
            Some(ReplCommand::DumpTape) => {
                writeln!(output, "{}", interp.tape()).map_err(BrainfuckError::Output)?;
            }
            Some(ReplCommand::ResetTape) => interp.reset(),
            None => {}
        }

        // The command character is inert, so the whole line still runs as code.
        let chunk = ChunkAccumulator::new(&mut lines).complete(line)?;

        match interp.run_chunk(&chunk, input, output) {
            Ok(stats) => {
                log::debug!("executed {} operations", stats.operations);
                // keep the next prompt at column 0
                if stats.printed() {
                    writeln!(output).map_err(BrainfuckError::Output)?;
                }
            }
            Err(err) => {
                let _ = output.flush();
                cli_util::print_error(Some(program), &chunk, &err);
                if !err.is_recoverable() {
                    return Err(err);
                }
                log::debug!("skipped chunk: {err}");
            }
        }

        output.flush().map_err(BrainfuckError::Output)?;
    }
}
