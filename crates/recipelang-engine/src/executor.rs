//! Shared command pipeline for both drivers:
//! line → recognize → record → format.

use crate::config::OutputFormat;
use crate::formatter::format_step;
use crate::recipe::Recipe;
use recipelang_common::{RecognizeError, Step};
use recipelang_parser::recognize;
use tracing::debug;

/// Result of a line that added a step.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Formatted confirmation for display.
    pub output: String,
    pub step: Step,
}

/// One interpreter session owning its recipe.
#[derive(Debug, Default)]
pub struct Interpreter {
    recipe: Recipe,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Execute one line of input.
    ///
    /// Returns `Ok(None)` for blank and comment lines. Rejected lines leave
    /// the recipe untouched.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<ExecutionResult>, RecognizeError> {
        let instruction = match recognize(line) {
            Ok(Some(instruction)) => instruction,
            Ok(None) => return Ok(None),
            Err(e) => {
                debug!("Rejected {:?}: {}", line, e.code());
                return Err(e);
            }
        };

        let step = self.recipe.record(instruction).clone();
        debug!("Recorded step {}", step.number);

        Ok(Some(ExecutionResult {
            output: format_step(&step),
            step,
        }))
    }

    /// Render the current recipe in the requested format.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.recipe.render()),
            OutputFormat::Json => self.recipe.render_json(),
        }
    }

    pub fn reset(&mut self) {
        debug!("Clearing {} recorded steps", self.recipe.len());
        self.recipe.reset();
    }
}
