//! Grouping source lines into bracket-balanced chunks.
//!
//! A loop may span several lines, so text is accumulated until the running
//! count of `[` minus `]` drops to zero before anything is executed.

use crate::error::BrainfuckError;
use crate::input::{LineSource, Prompt};
use crate::jump_table::bracket_balance;

/// Pulls lines from a [`LineSource`] until the buffered text is balanced.
pub struct ChunkAccumulator<L> {
    lines: L,
}

impl<L: LineSource> ChunkAccumulator<L> {
    pub fn new(lines: L) -> Self {
        Self { lines }
    }

    /// Read a first line, then complete it into a chunk.
    ///
    /// Returns `None` only when the source is exhausted before any line.
    pub fn next_chunk(&mut self) -> Result<Option<String>, BrainfuckError> {
        match self.lines.read_line(Prompt::Primary).map_err(BrainfuckError::SourceRead)? {
            Some(first) => self.complete(first).map(Some),
            None => Ok(None),
        }
    }

    /// Extend `first` with continuation lines while brackets remain open.
    ///
    /// Stops once the balance is zero or negative (extra `]` cannot be
    /// repaired by more text), or when the source runs dry; in both cases the
    /// text is returned as is and the bracket matcher rejects it.
    pub fn complete(&mut self, first: String) -> Result<String, BrainfuckError> {
        let mut chunk = first;
        let mut balance = bracket_balance(&chunk);
        let mut lines_read = 1usize;

        while balance > 0 {
            let Some(line) = self
                .lines
                .read_line(Prompt::Continuation)
                .map_err(BrainfuckError::SourceRead)?
            else {
                log::debug!("source exhausted with {balance} open bracket(s)");
                break;
            };
            balance += bracket_balance(&line);
            chunk.push_str(&line);
            lines_read += 1;
        }

        log::debug!("chunk of {} bytes from {lines_read} line(s)", chunk.len());
        Ok(chunk)
    }

    pub fn into_inner(self) -> L {
        self.lines
    }
}
