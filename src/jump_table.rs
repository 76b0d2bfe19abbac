//! Bracket matching for one source chunk.
//!
//! The table is computed in a single pass before execution so every `[`/`]`
//! jump during the run is an O(1) lookup.

use crate::error::{BrainfuckError, UnmatchedBracketKind};

/// Partner indices for every bracket of one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTable {
    // partners[i] holds the matching index for '[' or ']' at index i,
    // None for every other position.
    partners: Vec<Option<usize>>,
}

impl JumpTable {
    /// Match the brackets of `code` with a LIFO stack.
    ///
    /// A `]` with no open `[` reports that `]`; an unclosed `[` at the end of
    /// the scan reports the innermost one. No table is produced in either case.
    pub fn build(code: &[u8]) -> Result<Self, BrainfuckError> {
        let mut partners = vec![None; code.len()];
        let mut stack: Vec<usize> = Vec::new();

        for (i, &b) in code.iter().enumerate() {
            match b {
                b'[' => stack.push(i),
                b']' => {
                    let Some(open_index) = stack.pop() else {
                        return Err(BrainfuckError::UnbalancedBrackets {
                            ip: i,
                            kind: UnmatchedBracketKind::Close,
                        });
                    };
                    partners[open_index] = Some(i);
                    partners[i] = Some(open_index);
                }
                _ => {}
            }
        }

        if let Some(unmatched_open) = stack.last().copied() {
            return Err(BrainfuckError::UnbalancedBrackets {
                ip: unmatched_open,
                kind: UnmatchedBracketKind::Open,
            });
        }

        Ok(Self { partners })
    }

    /// The matching bracket index for the bracket at `index`.
    #[inline]
    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

/// Running `[` minus `]` count of `code`, ignoring nesting order.
pub fn bracket_balance(code: &str) -> isize {
    code.bytes().fold(0, |acc, b| match b {
        b'[' => acc + 1,
        b']' => acc - 1,
        _ => acc,
    })
}
