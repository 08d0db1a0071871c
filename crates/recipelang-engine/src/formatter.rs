//! Presentation of interpreter results.
//!
//! Core types carry structured data only; every user-facing prefix and
//! marker is added here.

use crate::cli::CliError;
use recipelang_common::{RecognizeError, Step};

pub const CLEARED_MESSAGE: &str = "✓ Recipe cleared!";
pub const FAREWELL_MESSAGE: &str = "Happy cooking! 👨‍🍳";

pub fn format_step(step: &Step) -> String {
    format!("✓ {}", step)
}

pub fn format_error(err: &RecognizeError) -> String {
    format!("Error: {}", err)
}

/// Message for a batch source that could not be run at all.
pub fn format_cli_error(err: &CliError) -> String {
    match err {
        CliError::NotFound(path) => format!("Error: File '{}' not found", path.display()),
        CliError::Read { source, .. } => format!("Error reading file: {}", source),
        other => format!("Error: {}", other),
    }
}
