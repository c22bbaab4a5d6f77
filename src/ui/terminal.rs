//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, UserInterface, VsFindTheme};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: VsFindTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, styled when stdout is a TTY and `NO_COLOR` is unset.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            VsFindTheme::new()
        } else {
            VsFindTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn result(&mut self, data: &str) {
        writeln!(self.out, "{}", data).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }
}
