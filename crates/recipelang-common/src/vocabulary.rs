//! Closed vocabularies of the recipe language.
//!
//! Every word the recognizer accepts is one of the variants below. Adding a
//! word means adding a variant; nothing is loaded at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed set of words with a canonical lowercase spelling.
pub trait Vocabulary: Copy + Sized + 'static {
    /// Every word, in declaration order (the order used by help text).
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Looks up an already-lowercased word.
    fn parse_word(word: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|w| w.as_str() == word)
    }

    /// Canonical spellings sorted lexicographically, for error messages.
    fn sorted_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::ALL.iter().map(|w| w.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Cooking verbs that may start a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Mix,
    Add,
    Bake,
    Heat,
    Cool,
}

impl Action {
    /// The verb with its first letter uppercased, as printed in steps.
    pub fn capitalized(self) -> &'static str {
        match self {
            Action::Mix => "Mix",
            Action::Add => "Add",
            Action::Bake => "Bake",
            Action::Heat => "Heat",
            Action::Cool => "Cool",
        }
    }
}

impl Vocabulary for Action {
    const ALL: &'static [Self] = &[
        Action::Mix,
        Action::Add,
        Action::Bake,
        Action::Heat,
        Action::Cool,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Action::Mix => "mix",
            Action::Add => "add",
            Action::Bake => "bake",
            Action::Heat => "heat",
            Action::Cool => "cool",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Flour,
    Eggs,
    Sugar,
    Butter,
    Milk,
    Salt,
    Water,
    Vanilla,
}

impl Vocabulary for Ingredient {
    const ALL: &'static [Self] = &[
        Ingredient::Flour,
        Ingredient::Eggs,
        Ingredient::Sugar,
        Ingredient::Butter,
        Ingredient::Milk,
        Ingredient::Salt,
        Ingredient::Water,
        Ingredient::Vanilla,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Ingredient::Flour => "flour",
            Ingredient::Eggs => "eggs",
            Ingredient::Sugar => "sugar",
            Ingredient::Butter => "butter",
            Ingredient::Milk => "milk",
            Ingredient::Salt => "salt",
            Ingredient::Water => "water",
            Ingredient::Vanilla => "vanilla",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Seconds,
}

impl Vocabulary for TimeUnit {
    const ALL: &'static [Self] = &[TimeUnit::Minutes, TimeUnit::Hours, TimeUnit::Seconds];

    fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Seconds => "seconds",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_names() {
        assert_eq!(
            Action::sorted_names(),
            vec!["add", "bake", "cool", "heat", "mix"]
        );
        assert_eq!(
            Ingredient::sorted_names(),
            vec!["butter", "eggs", "flour", "milk", "salt", "sugar", "vanilla", "water"]
        );
        assert_eq!(
            TimeUnit::sorted_names(),
            vec!["hours", "minutes", "seconds"]
        );
    }

    #[test]
    fn test_parse_word_is_exact() {
        assert_eq!(Action::parse_word("bake"), Some(Action::Bake));
        assert_eq!(Action::parse_word("Bake"), None);
        assert_eq!(Ingredient::parse_word("egg"), None);
        assert_eq!(TimeUnit::parse_word("hours"), Some(TimeUnit::Hours));
    }

    #[test]
    fn test_capitalized_matches_spelling() {
        for action in Action::ALL {
            let lower = action.capitalized().to_lowercase();
            assert_eq!(lower, action.as_str());
        }
    }
}
