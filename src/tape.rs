//! The interpreter's memory: an unbounded tape of byte cells.
//!
//! The tape starts with a single zeroed cell under the cursor and grows
//! lazily in either direction as the cursor walks past a materialized edge.
//! Cells are never removed; the whole tape is released when it is dropped.

use std::collections::VecDeque;
use std::fmt;

/// Errors raised while growing the tape.
#[derive(Debug, thiserror::Error)]
pub enum TapeError {
    /// The host could not allocate another cell.
    #[error("out of memory growing the tape {side}")]
    OutOfMemory { side: Side },
}

/// Which edge of the tape was being extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "leftwards"),
            Side::Right => write!(f, "rightwards"),
        }
    }
}

/// A doubly-extensible sequence of `u8` cells with one cursor.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: VecDeque<u8>,
    // index of the cursor inside `cells`
    cursor: usize,
    // index of the initially allocated cell inside `cells`
    origin: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// A fresh tape holding one zeroed cell.
    pub fn new() -> Self {
        let mut cells = VecDeque::with_capacity(64);
        cells.push_back(0);
        Self { cells, cursor: 0, origin: 0 }
    }

    /// Move the cursor one cell to the left, materializing a zero cell if needed.
    pub fn move_left(&mut self) -> Result<(), TapeError> {
        if self.cursor == 0 {
            self.cells
                .try_reserve(1)
                .map_err(|_| TapeError::OutOfMemory { side: Side::Left })?;
            self.cells.push_front(0);
            // everything shifted one slot right; the cursor now sits on the new cell
            self.origin += 1;
        } else {
            self.cursor -= 1;
        }
        Ok(())
    }

    /// Move the cursor one cell to the right, materializing a zero cell if needed.
    pub fn move_right(&mut self) -> Result<(), TapeError> {
        if self.cursor + 1 == self.cells.len() {
            self.cells
                .try_reserve(1)
                .map_err(|_| TapeError::OutOfMemory { side: Side::Right })?;
            self.cells.push_back(0);
        }
        self.cursor += 1;
        Ok(())
    }

    #[inline]
    pub fn read(&self) -> u8 {
        self.cells[self.cursor]
    }

    #[inline]
    pub fn write(&mut self, value: u8) {
        self.cells[self.cursor] = value;
    }

    #[inline]
    pub fn increment(&mut self) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_add(1);
    }

    #[inline]
    pub fn decrement(&mut self) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_sub(1);
    }

    /// Cursor position relative to the initial cell (negative is left of it).
    pub fn position(&self) -> isize {
        self.cursor as isize - self.origin as isize
    }

    /// Number of materialized cells. Never zero.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: the cell under the cursor exists from construction on.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Materialized cells, leftmost first.
    pub fn cells(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().copied()
    }
}

/// Renders the tape as `[0, 5, -2]`: every materialized cell, leftmost first,
/// as a signed byte.
impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", *cell as i8)?;
        }
        write!(f, "]")
    }
}
