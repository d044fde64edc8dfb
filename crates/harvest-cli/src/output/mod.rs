//! Terminal output formatting.
//!
//! Colors respect the NO_COLOR environment variable and are disabled when
//! the streams are not terminals. Errors render with their suggestion and
//! cause chain.

use std::env;
use std::error::Error;
use std::io::{self, IsTerminal};

use harvest_core::error::HarvestError;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colored: bool,
}

impl OutputHandler {
    /// Create a handler with automatic color detection
    pub fn new() -> Self {
        Self {
            colored: should_use_colors(),
        }
    }

    /// Announce the start of an operation
    pub fn step(&self, message: &str) {
        println!("{} {}", self.paint(CYAN, "::"), message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", self.paint(GREEN, "ok"), message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", self.paint(YELLOW, "warning:"), message);
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.paint(RED, "error:"), message);
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.colored {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}

const RED: &str = "31";
const GREEN: &str = "32";
const YELLOW: &str = "33";
const CYAN: &str = "36";

fn should_use_colors() -> bool {
    // Respect the NO_COLOR convention
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    io::stdout().is_terminal() && io::stderr().is_terminal()
}

/// Render an error with its suggestion and cause chain
pub fn render_error(error: &HarvestError) {
    let output = OutputHandler::new();
    output.error(&error.to_string());

    if let Some(suggestion) = error.suggestion() {
        eprintln!("  help: {}", suggestion);
    }

    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
