//! Terminal styling.

use console::Style;

/// Color styles for terminal output.
#[derive(Debug, Clone)]
pub struct Theme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub highlight: Style,
    pub dim: Style,
}

impl Theme {
    /// Colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            highlight: Style::new().cyan(),
            dim: Style::new().dim(),
        }
    }

    /// Theme with no color codes.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            highlight: Style::new(),
            dim: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(msg).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), msg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether colored output should be used.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::colors_enabled()
}
