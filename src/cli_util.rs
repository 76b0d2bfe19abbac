use std::io::{self, IsTerminal, Write};

use crate::config;
use crate::BrainfuckError;

/// Pretty-print a structured [`BrainfuckError`] with caret positioning.
/// If `program` is `Some("bfi")`, prefix messages with "bfi: ...".
pub fn print_error(program: Option<&str>, code: &str, err: &BrainfuckError) {
    let prefix_program = |msg: &str| {
        let msg = match program {
            Some(p) => format!("{p}: {msg}"),
            None => msg.to_string(),
        };
        // Styled header for TTY stderr; keep pipelines clean otherwise
        if io::stderr().is_terminal() {
            config::colors().error.bold().paint(msg).to_string()
        } else {
            msg
        }
    };

    match err {
        BrainfuckError::UnbalancedBrackets { ip, kind } => {
            let msg = prefix_program(&format!("Parse error: unmatched bracket {kind}"));
            print_error_with_context(&msg, code, *ip);
        }
        BrainfuckError::TapeAllocationFailed { ip, source } => {
            let msg = prefix_program(&format!("Runtime error: {source}"));
            print_error_with_context(&msg, code, *ip);
        }
        BrainfuckError::Io { ip, source } => {
            let msg = prefix_program(&format!("I/O error: {source}"));
            print_error_with_context(&msg, code, *ip);
        }
        BrainfuckError::FileOpenFailed { .. }
        | BrainfuckError::SourceRead(_)
        | BrainfuckError::Output(_) => {
            eprintln!("{}", prefix_program(&err.to_string()));
            let _ = io::stderr().flush();
        }
    }
}

/// Print a concise error with instruction index and a caret context window.
/// `pos` is a byte offset of an ASCII instruction; the window is cut on char
/// boundaries so UTF-8 comments around it stay intact.
pub fn print_error_with_context(prefix: &str, code: &str, pos: usize) {
    eprintln!("{prefix} at instruction {pos}");
    let (window, caret) = context_window(code, pos);
    eprintln!("  {window}");
    eprintln!("  {caret}");
    let _ = io::stderr().flush();
}

// Show a short window around the position for context
const WINDOW_CHARS: usize = 32;

fn context_window(code: &str, pos: usize) -> (&str, String) {
    let pos_char = code
        .char_indices()
        .take_while(|(byte_idx, _)| *byte_idx < pos)
        .count();
    let total_chars = code.chars().count();
    let start_char = pos_char.saturating_sub(WINDOW_CHARS);
    let end_char = (pos_char + WINDOW_CHARS + 1).min(total_chars);

    let start_byte = char_to_byte_index(code, start_char);
    let end_byte = char_to_byte_index(code, end_char);

    // Caret under the exact position
    let mut underline = " ".repeat(pos_char - start_char);
    underline.push('^');
    (&code[start_byte..end_byte], underline)
}

/// Convert a char index into a byte index in the given UTF-8 string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_sits_under_the_offending_bracket() {
        let (window, caret) = context_window("++]--", 2);
        assert_eq!(window, "++]--");
        assert_eq!(caret, "  ^");
    }

    #[test]
    fn window_is_clipped_around_long_chunks() {
        let code = format!("{}[{}", "+".repeat(100), "-".repeat(100));
        let (window, caret) = context_window(&code, 100);
        assert_eq!(window.chars().count(), WINDOW_CHARS * 2 + 1);
        assert_eq!(window.chars().nth(WINDOW_CHARS), Some('['));
        assert_eq!(caret.len(), WINDOW_CHARS + 1);
    }

    #[test]
    fn multibyte_comments_do_not_shift_the_caret() {
        // "é" is two bytes; the bracket is byte 3 but char 2
        let (window, caret) = context_window("é+]", 3);
        assert_eq!(window, "é+]");
        assert_eq!(caret, "  ^");
    }
}
