use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::tape::TapeError;

/// Errors that can occur while loading or interpreting Brainfuck code.
#[derive(Debug, thiserror::Error)]
pub enum BrainfuckError {
    /// Loops were not balanced; a matching `[` or `]` was not found.
    #[error("Unmatched bracket {kind} at instruction {ip}")]
    UnbalancedBrackets { ip: usize, kind: UnmatchedBracketKind },

    /// The tape could not grow to follow the cursor.
    #[error("Tape allocation failed at instruction {ip}: {source}")]
    TapeAllocationFailed {
        ip: usize,
        #[source]
        source: TapeError,
    },

    /// Reading program input or writing program output failed.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: io::Error,
    },

    /// The program file could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    FileOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading program text from its source failed.
    #[error("Failed to read source: {0}")]
    SourceRead(#[source] io::Error),

    /// Writing to the console outside of program execution failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl BrainfuckError {
    /// Whether an interactive session may carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BrainfuckError::UnbalancedBrackets { .. })
    }

    /// Index into the chunk of the instruction the error points at, if any.
    pub fn instruction(&self) -> Option<usize> {
        match self {
            BrainfuckError::UnbalancedBrackets { ip, .. }
            | BrainfuckError::TapeAllocationFailed { ip, .. }
            | BrainfuckError::Io { ip, .. } => Some(*ip),
            BrainfuckError::FileOpenFailed { .. }
            | BrainfuckError::SourceRead(_)
            | BrainfuckError::Output(_) => None,
        }
    }
}

/// Which side of the loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedBracketKind {
    Open,
    Close,
}

impl fmt::Display for UnmatchedBracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedBracketKind::Open => write!(f, "'['"),
            UnmatchedBracketKind::Close => write!(f, "']'"),
        }
    }
}
