//! Terminal output for command results.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for writing styled output to stdout
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use companion_compat::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Gutenberg compatibility");
//! ui.success("Fully compatible");
//! assert!(ui.successes().contains(&"Fully compatible".to_string()));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CompatTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a labelled value, e.g. "Installed: 3.4.0".
    fn show_field(&mut self, key: &str, value: &str);

    /// Write machine-readable output (JSON). Never suppressed by output mode.
    fn emit(&mut self, text: &str);
}
