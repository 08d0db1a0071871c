//! Command recognition.
//!
//! Turns one line into an [`Instruction`] or a [`RecognizeError`]. Nothing
//! here touches recipe state; recording is the caller's job.

use crate::normalizer::{normalize, tokenize};
use recipelang_common::{
    Action, Duration, Ingredient, Instruction, RecognizeError, ShapeDefect, TimeUnit, Vocabulary,
};

const MIXING_KEYWORD: &str = "and";
const TIMED_KEYWORD: &str = "for";
const PATTERN_LEN: usize = 4;

/// Recognize a raw input line.
///
/// `Ok(None)` means the line is blank or a comment and should produce no
/// output at all.
pub fn recognize(line: &str) -> Result<Option<Instruction>, RecognizeError> {
    match normalize(line) {
        Some(normalized) => recognize_tokens(&tokenize(&normalized)).map(Some),
        None => Ok(None),
    }
}

/// Recognize already-normalized tokens.
pub fn recognize_tokens(tokens: &[&str]) -> Result<Instruction, RecognizeError> {
    if tokens.len() < 2 {
        return Err(RecognizeError::MalformedCommand);
    }

    let action = Action::parse_word(tokens[0]).ok_or_else(|| RecognizeError::UnknownAction {
        token: tokens[0].to_string(),
        valid: Action::sorted_names(),
    })?;

    // `and` wins over `for` when a line contains both.
    if tokens.contains(&MIXING_KEYWORD) {
        recognize_mixing(action, tokens)
    } else if tokens.contains(&TIMED_KEYWORD) {
        recognize_timed(action, tokens)
    } else {
        Err(RecognizeError::UnrecognizedPattern)
    }
}

/// `<action> <ingredient> and <ingredient>`
fn recognize_mixing(action: Action, tokens: &[&str]) -> Result<Instruction, RecognizeError> {
    if tokens.len() != PATTERN_LEN {
        return Err(RecognizeError::MalformedMixing(ShapeDefect::TokenCount(
            tokens.len(),
        )));
    }
    if tokens[2] != MIXING_KEYWORD {
        return Err(RecognizeError::MalformedMixing(
            ShapeDefect::MisplacedKeyword,
        ));
    }

    let first = ingredient(tokens[1])?;
    let second = ingredient(tokens[3])?;

    Ok(Instruction::Mixing {
        action,
        first,
        second,
    })
}

/// `<action> for <number> <unit>`
fn recognize_timed(action: Action, tokens: &[&str]) -> Result<Instruction, RecognizeError> {
    if tokens.len() != PATTERN_LEN {
        return Err(RecognizeError::MalformedTimed(ShapeDefect::TokenCount(
            tokens.len(),
        )));
    }
    if tokens[1] != TIMED_KEYWORD {
        return Err(RecognizeError::MalformedTimed(ShapeDefect::MisplacedKeyword));
    }

    let duration =
        Duration::parse(tokens[2]).ok_or_else(|| RecognizeError::NonNumericDuration {
            token: tokens[2].to_string(),
        })?;

    let unit = TimeUnit::parse_word(tokens[3]).ok_or_else(|| RecognizeError::UnknownUnit {
        token: tokens[3].to_string(),
        valid: TimeUnit::sorted_names(),
    })?;

    Ok(Instruction::Timed {
        action,
        duration,
        unit,
    })
}

fn ingredient(token: &str) -> Result<Ingredient, RecognizeError> {
    Ingredient::parse_word(token).ok_or_else(|| RecognizeError::UnknownIngredient {
        token: token.to_string(),
        valid: Ingredient::sorted_names(),
    })
}
