//! The instruction engine.
//!
//! An [`Interpreter`] owns the session's [`Tape`] and executes one source
//! chunk at a time against it, so state carries over from chunk to chunk.
//!
//! Behaviors:
//! - `.` writes the current cell as one raw byte to the output.
//! - `,` stores the next input byte; at end of input the cell is set to
//!   [`EOF_SENTINEL`].
//! - Characters outside `><+-.,[]` are skipped and not counted.
//! - Every visit to one of the eight instructions counts as one operation,
//!   whether or not a bracket branches.

use std::io::Write;

use crate::error::BrainfuckError;
use crate::input::ByteSource;
use crate::jump_table::JumpTable;
use crate::tape::Tape;

/// Value stored by `,` once input is exhausted.
pub const EOF_SENTINEL: u8 = 0;

/// Outcome of one successfully executed chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Instructions executed, counting each loop visit.
    pub operations: usize,
    /// Bytes written by `.`.
    pub output_bytes: usize,
}

impl RunStats {
    pub fn printed(&self) -> bool {
        self.output_bytes > 0
    }
}

/// Executes chunks against a persistent tape.
#[derive(Debug, Default)]
pub struct Interpreter {
    tape: Tape,
}

impl Interpreter {
    pub fn new() -> Self {
        Self { tape: Tape::new() }
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Drop the current tape and start over with a single zero cell.
    pub fn reset(&mut self) {
        log::debug!("resetting tape ({} cells released)", self.tape.len());
        self.tape = Tape::new();
    }

    /// Match the chunk's brackets, then execute it.
    pub fn run_chunk<I, W>(
        &mut self,
        chunk: &str,
        input: &mut I,
        output: &mut W,
    ) -> Result<RunStats, BrainfuckError>
    where
        I: ByteSource + ?Sized,
        W: Write + ?Sized,
    {
        let code = chunk.as_bytes();
        let jumps = JumpTable::build(code)?;
        self.execute(code, &jumps, input, output)
    }

    /// Execute `code` using a jump table already built for it.
    ///
    /// `jumps` must come from [`JumpTable::build`] over this same `code`.
    pub(crate) fn execute<I, W>(
        &mut self,
        code: &[u8],
        jumps: &JumpTable,
        input: &mut I,
        output: &mut W,
    ) -> Result<RunStats, BrainfuckError>
    where
        I: ByteSource + ?Sized,
        W: Write + ?Sized,
    {
        debug_assert_eq!(code.len(), jumps.len());

        let mut stats = RunStats::default();
        let mut code_ptr = 0;

        while code_ptr < code.len() {
            match code[code_ptr] {
                b'>' => {
                    self.tape
                        .move_right()
                        .map_err(|source| BrainfuckError::TapeAllocationFailed { ip: code_ptr, source })?;
                }
                b'<' => {
                    self.tape
                        .move_left()
                        .map_err(|source| BrainfuckError::TapeAllocationFailed { ip: code_ptr, source })?;
                }
                b'+' => self.tape.increment(),
                b'-' => self.tape.decrement(),
                b'.' => {
                    output
                        .write_all(&[self.tape.read()])
                        .map_err(|source| BrainfuckError::Io { ip: code_ptr, source })?;
                    stats.output_bytes += 1;
                }
                b',' => {
                    // pending output (a question, usually) must be visible before blocking
                    output
                        .flush()
                        .map_err(|source| BrainfuckError::Io { ip: code_ptr, source })?;
                    let byte = input
                        .next_byte()
                        .map_err(|source| BrainfuckError::Io { ip: code_ptr, source })?;
                    self.tape.write(byte.unwrap_or(EOF_SENTINEL));
                }
                b'[' => {
                    // cell is zero: continue after the matching ']'
                    if self.tape.read() == 0 {
                        code_ptr = jumps.partner(code_ptr).expect("validated bracket");
                    }
                }
                b']' => {
                    // cell is non-zero: continue after the matching '['
                    if self.tape.read() != 0 {
                        code_ptr = jumps.partner(code_ptr).expect("validated bracket");
                    }
                }
                _ => {
                    code_ptr += 1;
                    continue;
                }
            }

            stats.operations += 1;
            code_ptr += 1;
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnmatchedBracketKind;
    use crate::input::StreamInput;

    fn run(code: &str) -> (Interpreter, RunStats, Vec<u8>) {
        run_with_input(code, b"")
    }

    fn run_with_input(code: &str, input: &[u8]) -> (Interpreter, RunStats, Vec<u8>) {
        let mut interp = Interpreter::new();
        let mut out = Vec::new();
        let stats = interp
            .run_chunk(code, &mut StreamInput::new(input), &mut out)
            .expect("program should run");
        (interp, stats, out)
    }

    #[test]
    fn counts_only_instruction_characters() {
        assert_eq!(run("+++").1.operations, 3);
        assert_eq!(run("+++x+++").1.operations, 6);
        assert_eq!(run("").1.operations, 0);
        assert_eq!(run("hello world").1.operations, 0);
    }

    #[test]
    fn moves_value_between_cells() {
        let (interp, stats, _) = run("++>+++++[<+>-]<");
        assert_eq!(interp.tape().cells().collect::<Vec<_>>(), vec![7, 0]);
        assert_eq!(interp.tape().position(), 0);
        assert_eq!(interp.tape().read(), 7);
        // 8 setup ops, one entry into the loop, 5 iterations of `<+>-]`, final `<`
        assert_eq!(stats.operations, 35);
    }

    #[test]
    fn skipped_loop_counts_bracket_visits_once() {
        // `[` jumps straight past its `]`; only the `[` is visited
        let (_, stats, _) = run("[+++]");
        assert_eq!(stats.operations, 1);
    }

    #[test]
    fn echoes_input_byte() {
        let (interp, stats, out) = run_with_input(",.", &[65]);
        assert_eq!(out, vec![65]);
        assert_eq!(interp.tape().read(), 65);
        assert_eq!(stats.output_bytes, 1);
        assert!(stats.printed());
    }

    #[test]
    fn input_exhaustion_stores_sentinel() {
        let (interp, _, _) = run_with_input("+++++,", b"");
        assert_eq!(interp.tape().read(), EOF_SENTINEL);
    }

    #[test]
    fn wrapping_addition() {
        let (interp, _, _) = run(&"+".repeat(256));
        assert_eq!(interp.tape().read(), 0);
    }

    #[test]
    fn left_of_origin_grows_tape() {
        let (interp, _, _) = run("<<+");
        assert_eq!(interp.tape().position(), -2);
        assert_eq!(interp.tape().to_string(), "[1, 0, 0]");
    }

    #[test]
    fn hello_world() {
        let code = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
        let (_, _, out) = run(code);
        assert_eq!(out, b"Hello World!\n");
    }

    #[test]
    fn tape_persists_across_chunks() {
        let mut interp = Interpreter::new();
        let mut out = Vec::new();
        let mut input = StreamInput::new(&b""[..]);
        interp.run_chunk("+++>", &mut input, &mut out).unwrap();
        interp.run_chunk("++<[->+<]", &mut input, &mut out).unwrap();
        assert_eq!(interp.tape().to_string(), "[0, 5]");
    }

    #[test]
    fn reset_returns_to_single_cell() {
        let (mut interp, _, _) = run(">>+++");
        interp.reset();
        assert_eq!(interp.tape().len(), 1);
        assert_eq!(interp.tape().read(), 0);
    }

    #[test]
    fn unbalanced_chunk_never_executes() {
        let mut interp = Interpreter::new();
        let mut out = Vec::new();
        let result = interp.run_chunk("+.[", &mut StreamInput::new(&b""[..]), &mut out);
        assert!(matches!(
            result,
            Err(BrainfuckError::UnbalancedBrackets { ip: 2, kind: UnmatchedBracketKind::Open })
        ));
        assert!(out.is_empty());
        assert_eq!(interp.tape().read(), 0);
    }

    #[test]
    fn prebuilt_table_can_be_rerun() {
        let code = b"++[>+<-]";
        let jumps = JumpTable::build(code).unwrap();
        let mut interp = Interpreter::new();
        let mut out = Vec::new();
        let mut input = StreamInput::new(&b""[..]);
        interp.execute(code, &jumps, &mut input, &mut out).unwrap();
        interp.execute(code, &jumps, &mut input, &mut out).unwrap();
        assert_eq!(interp.tape().to_string(), "[0, 4]");
    }

    struct FailingOutput;

    impl Write for FailingOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failure_reports_instruction() {
        let mut interp = Interpreter::new();
        let result = interp.run_chunk("++.", &mut StreamInput::new(&b""[..]), &mut FailingOutput);
        assert!(matches!(result, Err(BrainfuckError::Io { ip: 2, .. })));
    }
}
