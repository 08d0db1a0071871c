//! The recipe being built during one session.
//!
//! Steps are append-only and numbered at the moment they are recorded.
//! `reset` is the only way to remove anything, and it clears the steps and
//! the ingredient set together.

use recipelang_common::{Ingredient, Instruction, Step, Vocabulary};
use serde::Serialize;
use std::collections::HashSet;

/// Shown by `render` when nothing has been recorded.
pub const EMPTY_RECIPE_MESSAGE: &str = "No recipe steps yet!";

const RULE_WIDTH: usize = 50;
const TITLE: &str = "           YOUR RECIPE";

#[derive(Debug, Clone, Default)]
pub struct Recipe {
    steps: Vec<Step>,
    ingredients: HashSet<Ingredient>,
}

#[derive(Serialize)]
struct RecipeView<'a> {
    ingredients: Vec<Ingredient>,
    steps: &'a [Step],
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instruction as the next step.
    pub fn record(&mut self, instruction: Instruction) -> &Step {
        if let Some(used) = instruction.ingredients() {
            self.ingredients.extend(used);
        }

        let number = self.steps.len() + 1;
        self.steps.push(Step {
            number,
            instruction,
        });
        &self.steps[number - 1]
    }

    pub fn reset(&mut self) {
        self.steps.clear();
        self.ingredients.clear();
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Ingredients used so far, sorted by name.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        let mut sorted: Vec<Ingredient> = self.ingredients.iter().copied().collect();
        sorted.sort_unstable_by_key(|i| i.as_str());
        sorted
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Human-readable report of the whole recipe.
    pub fn render(&self) -> String {
        if self.steps.is_empty() {
            return EMPTY_RECIPE_MESSAGE.to_string();
        }

        let rule = "=".repeat(RULE_WIDTH);
        let mut output = format!("\n{rule}\n{TITLE}\n{rule}\n\n");

        let ingredients = self.ingredients();
        if !ingredients.is_empty() {
            let names: Vec<&str> = ingredients.iter().map(|i| i.as_str()).collect();
            output.push_str("INGREDIENTS:\n");
            output.push_str(&format!("  {}\n\n", names.join(", ")));
        }

        output.push_str("INSTRUCTIONS:\n");
        for step in &self.steps {
            output.push_str(&format!("  {}\n", step));
        }

        output.push_str(&format!("\n{rule}\n"));
        output
    }

    /// Machine-readable form: sorted ingredients plus every step.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&RecipeView {
            ingredients: self.ingredients(),
            steps: &self.steps,
        })
    }
}
