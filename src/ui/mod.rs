//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! Messages and results go to stdout; warnings and errors go to stderr so
//! that JSON written with [`UserInterface::result`] stays machine-readable.
//!
//! # Example
//!
//! ```
//! use vsfind::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("Instance excluded");
//! assert!(ui.has_warning("excluded"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, VsFindTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Write machine-readable output such as JSON.
    ///
    /// Never suppressed by the output mode.
    fn result(&mut self, data: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}
