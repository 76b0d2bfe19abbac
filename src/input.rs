//! Where program text and program input come from.
//!
//! [`LineSource`] feeds the chunk accumulator one line at a time;
//! [`ByteSource`] feeds the `,` instruction one byte at a time.

use std::io::{self, BufRead, IsTerminal, Read, Write};

pub const PRIMARY_PROMPT: &str = "bf> ";
pub const CONTINUATION_PROMPT: &str = "..> ";

/// Why a line is being requested. Interactive sources render a different
/// prompt for each; file sources ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// First line of a new chunk.
    Primary,
    /// A chunk is open and more text is needed to balance its brackets.
    Continuation,
    /// The running program asked for input with `,`.
    Input,
}

/// A supplier of text lines with their line terminators stripped.
///
/// Program text is only ever scanned for the eight ASCII instructions, so
/// byte-oriented sources decode lossily: an invalid byte becomes U+FFFD and
/// stays a comment.
pub trait LineSource {
    /// Next line, or `None` once the source is exhausted.
    fn read_line(&mut self, prompt: Prompt) -> io::Result<Option<String>>;

    /// Next line as the raw bytes that were read.
    fn read_raw_line(&mut self, prompt: Prompt) -> io::Result<Option<Vec<u8>>> {
        Ok(self.read_line(prompt)?.map(String::into_bytes))
    }
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn read_raw_line(&mut self, prompt: Prompt) -> io::Result<Option<Vec<u8>>> {
        (**self).read_raw_line(prompt)
    }
}

/// A supplier of single input bytes for `,`.
pub trait ByteSource {
    /// Next byte, or `None` at end of input.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).next_byte()
    }
}

fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

/// One `\n`-terminated line of raw bytes, terminator stripped.
fn read_raw<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    match reader.read_until(b'\n', &mut line)? {
        0 => Ok(None),
        _ => {
            strip_line_ending(&mut line);
            Ok(Some(line))
        }
    }
}

fn decode(line: Option<Vec<u8>>) -> Option<String> {
    line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// Lines from any buffered reader, such as an opened program file.
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn read_line(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        self.read_raw_line(prompt).map(decode)
    }

    fn read_raw_line(&mut self, _prompt: Prompt) -> io::Result<Option<Vec<u8>>> {
        read_raw(&mut self.reader)
    }
}

/// Lines from the process stdin, optionally prompting on stderr.
///
/// Stdin is locked per call so several `StdinLines` (program text and `,`
/// input) can share the one global buffer without deadlocking.
pub struct StdinLines {
    prompts: bool,
}

impl StdinLines {
    /// Prompts are written only when stderr is a terminal, keeping piped
    /// sessions clean.
    pub fn new() -> Self {
        Self { prompts: io::stderr().is_terminal() }
    }

    pub fn without_prompts() -> Self {
        Self { prompts: false }
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        self.read_raw_line(prompt).map(decode)
    }

    fn read_raw_line(&mut self, prompt: Prompt) -> io::Result<Option<Vec<u8>>> {
        if self.prompts {
            let text = match prompt {
                Prompt::Primary => PRIMARY_PROMPT,
                Prompt::Continuation => CONTINUATION_PROMPT,
                Prompt::Input => "",
            };
            let mut stderr = io::stderr();
            write!(stderr, "{text}")?;
            stderr.flush()?;
        }

        // program output may still be sitting in the stdout buffer
        io::stdout().flush()?;

        read_raw(&mut io::stdin().lock())
    }
}

/// Raw input: each `,` consumes exactly one byte of the stream.
pub struct StreamInput<R> {
    reader: R,
}

impl<R: Read> StreamInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> ByteSource for StreamInput<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Line-buffered input for interactive sessions.
///
/// Each `,` reads a whole line and keeps only its first byte; the rest of
/// the line is discarded so a typed answer never leaks into the next source
/// read. An empty line yields `b'\n'`.
pub struct LineInput<L> {
    lines: L,
}

impl<L: LineSource> LineInput<L> {
    pub fn new(lines: L) -> Self {
        Self { lines }
    }
}

impl<L: LineSource> ByteSource for LineInput<L> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let line = self.lines.read_raw_line(Prompt::Input)?;
        Ok(line.map(|l| l.first().copied().unwrap_or(b'\n')))
    }
}
