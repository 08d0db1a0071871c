//! Recognition errors.
//!
//! None of these are fatal: they describe why a single line was rejected and
//! carry what a user needs to fix it.

use thiserror::Error;

/// How a line that looked like one of the two patterns failed to match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeDefect {
    /// The pattern needs exactly four tokens; this many were given.
    TokenCount(usize),
    /// The keyword (`and` / `for`) is present but not in its slot.
    MisplacedKeyword,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognizeError {
    #[error("Invalid command")]
    MalformedCommand,

    #[error("Unknown action '{token}'. Valid actions: {}", .valid.join(", "))]
    UnknownAction {
        token: String,
        valid: Vec<&'static str>,
    },

    #[error(
        "Unknown command pattern. Use 'action ingredient and ingredient' or 'action for number unit'"
    )]
    UnrecognizedPattern,

    #[error("{}", mixing_message(.0))]
    MalformedMixing(ShapeDefect),

    #[error("Unknown ingredient '{token}'. Valid ingredients: {}", .valid.join(", "))]
    UnknownIngredient {
        token: String,
        valid: Vec<&'static str>,
    },

    #[error("{}", timed_message(.0))]
    MalformedTimed(ShapeDefect),

    #[error("Time must be a number, got '{token}'")]
    NonNumericDuration { token: String },

    #[error("Unknown time unit '{token}'. Valid units: {}", .valid.join(", "))]
    UnknownUnit {
        token: String,
        valid: Vec<&'static str>,
    },
}

impl RecognizeError {
    /// Stable identifier for logs and test vectors.
    pub fn code(&self) -> &'static str {
        match self {
            RecognizeError::MalformedCommand => "MALFORMED_COMMAND",
            RecognizeError::UnknownAction { .. } => "UNKNOWN_ACTION",
            RecognizeError::UnrecognizedPattern => "UNRECOGNIZED_PATTERN",
            RecognizeError::MalformedMixing(_) => "MALFORMED_MIXING",
            RecognizeError::UnknownIngredient { .. } => "UNKNOWN_INGREDIENT",
            RecognizeError::MalformedTimed(_) => "MALFORMED_TIMED",
            RecognizeError::NonNumericDuration { .. } => "NON_NUMERIC_DURATION",
            RecognizeError::UnknownUnit { .. } => "UNKNOWN_UNIT",
        }
    }

    /// The token that caused the error, if one token is to blame.
    pub fn offending_token(&self) -> Option<&str> {
        match self {
            RecognizeError::UnknownAction { token, .. }
            | RecognizeError::UnknownIngredient { token, .. }
            | RecognizeError::NonNumericDuration { token }
            | RecognizeError::UnknownUnit { token, .. } => Some(token),
            _ => None,
        }
    }
}

fn mixing_message(defect: &ShapeDefect) -> &'static str {
    match defect {
        ShapeDefect::TokenCount(_) => {
            "Invalid mixing command. Use format 'action ingredient1 and ingredient2'"
        }
        ShapeDefect::MisplacedKeyword => "Expected 'and' between ingredients",
    }
}

fn timed_message(defect: &ShapeDefect) -> &'static str {
    match defect {
        ShapeDefect::TokenCount(_) => "Invalid timed command. Use format 'action for number unit'",
        ShapeDefect::MisplacedKeyword => "Expected 'for' after action",
    }
}
