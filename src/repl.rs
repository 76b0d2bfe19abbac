use std::io::{self, IsTerminal};

use nu_ansi_term::Style;
use reedline::{
    DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Highlighter, HistoryItem, Reedline,
    Signal, StyledText,
};

use crate::config;
use crate::error::BrainfuckError;
use crate::input::{LineInput, LineSource, Prompt, StdinLines};
use crate::session::{self, SessionEnd};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplMode {
    /// Plain line reads from stdin, for pipes and redirected files.
    Bare,
    /// Line editor with history and highlighting, for terminals.
    Editor,
}

/// Editor when stdin is a terminal, bare otherwise.
pub fn select_mode() -> ReplMode {
    if io::stdin().is_terminal() {
        ReplMode::Editor
    } else {
        ReplMode::Bare
    }
}

/// Run one interactive session on stdin/stdout.
pub fn repl_loop(program: &str, mode: ReplMode) -> Result<SessionEnd, BrainfuckError> {
    // `,` always reads the console directly; the editor only handles code
    let mut input = LineInput::new(StdinLines::without_prompts());
    let mut stdout = io::stdout();

    match mode {
        ReplMode::Editor => {
            let lines = EditorLines::new().map_err(BrainfuckError::SourceRead)?;
            session::run_interactive(program, lines, &mut input, &mut stdout)
        }
        ReplMode::Bare => session::run_interactive(program, StdinLines::new(), &mut input, &mut stdout),
    }
}

/// Lines typed into a `reedline` editor.
pub struct EditorLines {
    editor: Reedline,
    primary: DefaultPrompt,
    continuation: DefaultPrompt,
}

impl EditorLines {
    pub fn new() -> io::Result<Self> {
        let history = FileBackedHistory::new(1_000).map_err(|e| io::Error::other(e.to_string()))?;

        let editor = Reedline::create()
            .with_highlighter(Box::new(BrainfuckHighlighter::from_config()))
            .with_history(Box::new(history));

        Ok(Self {
            editor,
            primary: DefaultPrompt::new(
                DefaultPromptSegment::Basic("bf".to_string()),
                DefaultPromptSegment::Empty,
            ),
            continuation: DefaultPrompt::new(
                DefaultPromptSegment::Basic("..".to_string()),
                DefaultPromptSegment::Empty,
            ),
        })
    }
}

impl LineSource for EditorLines {
    fn read_line(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        let prompt = match prompt {
            Prompt::Continuation => &self.continuation,
            Prompt::Primary | Prompt::Input => &self.primary,
        };

        match self.editor.read_line(prompt) {
            Ok(Signal::Success(buffer)) => {
                if !buffer.trim().is_empty() {
                    let _ = self
                        .editor
                        .history_mut()
                        .save(HistoryItem::from_command_line(buffer.clone()));
                }
                Ok(Some(buffer))
            }
            // Ctrl+C and Ctrl+D both end the session cleanly
            Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => Ok(None),
            Err(e) => Err(io::Error::other(e.to_string())),
        }
    }
}

#[derive(Default)]
struct BrainfuckHighlighter {
    // Per-char styles for BF commands, and a fallback for non-commands
    map_plus: Style,
    map_minus: Style,
    map_lt: Style,
    map_gt: Style,
    map_dot: Style,
    map_comma: Style,
    map_bracket: Style,
    map_other: Style,
}

impl BrainfuckHighlighter {
    fn from_config() -> Self {
        let c = config::colors();

        // > <   => movement
        // + -   => data modification
        // . ,   => I/O
        // [ ]   => flow control
        Self {
            map_gt: Style::new().fg(c.op_move_right).bold(),
            map_lt: Style::new().fg(c.op_move_left).bold(),
            map_plus: Style::new().fg(c.op_inc).bold(),
            map_minus: Style::new().fg(c.op_dec).bold(),
            map_dot: Style::new().fg(c.op_output).bold(),
            map_comma: Style::new().fg(c.op_input).bold(),
            map_bracket: Style::new().fg(c.op_bracket).bold(),
            map_other: Style::new().fg(c.non_bf),
        }
    }

    #[inline]
    fn style_for(&self, ch: char) -> Style {
        match ch {
            '>' => self.map_gt,
            '<' => self.map_lt,
            '+' => self.map_plus,
            '-' => self.map_minus,
            '.' => self.map_dot,
            ',' => self.map_comma,
            '[' | ']' => self.map_bracket,
            _ => self.map_other,
        }
    }
}

impl Highlighter for BrainfuckHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut out: StyledText = StyledText::new();
        let mut current_style: Option<Style> = None;
        let mut buffer = String::new();

        for ch in line.chars() {
            let style = self.style_for(ch);

            match current_style {
                Some(s) if s == style => buffer.push(ch),
                Some(s) => {
                    out.push((s, std::mem::take(&mut buffer)));
                    current_style = Some(style);
                    buffer.push(ch);
                }
                None => {
                    current_style = Some(style);
                    buffer.push(ch);
                }
            }
        }

        if let Some(s) = current_style {
            if !buffer.is_empty() {
                out.push((s, buffer));
            }
        }
        out
    }
}
