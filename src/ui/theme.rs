//! Visual theme and styling.

use console::Style;

/// Styles used for terminal output.
#[derive(Debug, Clone)]
pub struct CompatTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for values in key-value displays (normal).
    pub value: Style,
}

impl Default for CompatTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CompatTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            key: Style::new().bold(),
            value: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a labelled value, padding the label to line values up.
    pub fn format_field(&self, key: &str, value: &str) -> String {
        format!(
            "  {} {}",
            self.key.apply_to(format!("{:<18}", format!("{}:", key))),
            self.value.apply_to(value)
        )
    }
}

/// Whether colored output should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = CompatTheme::plain().format_success("Compatible");
        assert_eq!(msg, "✓ Compatible");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = CompatTheme::plain().format_warning("Newer than latest");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Newer than latest"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = CompatTheme::plain().format_error("Below minimum");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Below minimum"));
    }

    #[test]
    fn theme_formats_field() {
        let msg = CompatTheme::plain().format_field("Installed", "3.4.0");
        assert!(msg.starts_with("  Installed:"));
        assert!(msg.ends_with("3.4.0"));
    }

    #[test]
    fn theme_formats_header() {
        let msg = CompatTheme::plain().format_header("Gutenberg compatibility");
        assert_eq!(msg, "Gutenberg compatibility");
    }
}
