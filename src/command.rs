/// Single-character commands recognized at the start of an interactive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// `!` ends the session.
    Quit,
    /// `$` prints every materialized tape cell.
    DumpTape,
    /// `@` replaces the tape with a fresh one.
    ResetTape,
}

impl ReplCommand {
    /// Inspect the first character of `line`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.as_bytes().first()? {
            b'!' => Some(ReplCommand::Quit),
            b'$' => Some(ReplCommand::DumpTape),
            b'@' => Some(ReplCommand::ResetTape),
            _ => None,
        }
    }
}
