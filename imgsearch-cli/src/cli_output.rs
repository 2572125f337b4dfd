// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Provides standardized formatting for errors, warnings, hints, and per-file failures

use imgsearch_sdk::SearchError;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;

/// Centralized CLI output utilities for consistent formatting
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create new CLI output utility with TTY detection
    pub fn new() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal(),
        }
    }

    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Display an error message
    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "error:".red().bold(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }

    /// Display a warning message
    pub fn warning(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        } else {
            eprintln!("warning: {}", message);
        }
    }

    /// Display a hint below an error
    pub fn hint(&self, message: &str) {
        if self.use_color {
            eprintln!("  {} {}", "hint:".dimmed(), message);
        } else {
            eprintln!("  hint: {}", message);
        }
    }

    /// Report a failed file with its recovery hint, if any
    pub fn file_failure(&self, path: &Path, error: &SearchError) {
        self.error(&format!("{}: {}", path.display(), error));
        if let Some(help) = error.help_text() {
            self.hint(help);
        }
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new()
    }
}
