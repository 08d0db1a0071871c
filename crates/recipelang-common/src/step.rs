use crate::vocabulary::{Action, Ingredient, TimeUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-number duration exactly as it was written.
///
/// Only ASCII decimal digits are allowed, so the value is never negative or
/// fractional. The digits are kept verbatim because the language puts no
/// upper bound on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Duration(String);

impl Duration {
    pub fn parse(token: &str) -> Option<Self> {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Duration {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("not a whole number: {:?}", value))
    }
}

impl From<Duration> for String {
    fn from(d: Duration) -> Self {
        d.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A recognized command, before it has been numbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    /// `<action> <ingredient> and <ingredient>`
    Mixing {
        action: Action,
        first: Ingredient,
        second: Ingredient,
    },
    /// `<action> for <number> <unit>`
    Timed {
        action: Action,
        duration: Duration,
        unit: TimeUnit,
    },
}

impl Instruction {
    pub fn action(&self) -> Action {
        match self {
            Instruction::Mixing { action, .. } | Instruction::Timed { action, .. } => *action,
        }
    }

    /// Ingredients this instruction brings into the recipe.
    pub fn ingredients(&self) -> Option<[Ingredient; 2]> {
        match self {
            Instruction::Mixing { first, second, .. } => Some([*first, *second]),
            Instruction::Timed { .. } => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Mixing {
                action,
                first,
                second,
            } => write!(f, "{} {} and {}", action.capitalized(), first, second),
            Instruction::Timed {
                action,
                duration,
                unit,
            } => write!(f, "{} for {} {}", action.capitalized(), duration, unit),
        }
    }
}

/// One recorded recipe instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based position in the recipe.
    pub number: usize,
    #[serde(flatten)]
    pub instruction: Instruction,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number, self.instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_accepts_digits_only() {
        assert!(Duration::parse("0").is_some());
        assert!(Duration::parse("30").is_some());
        assert!(Duration::parse("").is_none());
        assert!(Duration::parse("-5").is_none());
        assert!(Duration::parse("2.5").is_none());
        assert!(Duration::parse("+5").is_none());
        assert!(Duration::parse("thirty").is_none());
    }

    #[test]
    fn test_duration_keeps_digits_verbatim() {
        let d = Duration::parse("007").unwrap();
        assert_eq!(d.to_string(), "007");

        let huge = Duration::parse("123456789012345678901234567890").unwrap();
        assert_eq!(huge.as_str(), "123456789012345678901234567890");
    }

    #[test]
    fn test_step_display() {
        let mixing = Step {
            number: 1,
            instruction: Instruction::Mixing {
                action: Action::Mix,
                first: Ingredient::Flour,
                second: Ingredient::Eggs,
            },
        };
        assert_eq!(mixing.to_string(), "Step 1: Mix flour and eggs");

        let timed = Step {
            number: 2,
            instruction: Instruction::Timed {
                action: Action::Bake,
                duration: Duration::parse("30").unwrap(),
                unit: TimeUnit::Minutes,
            },
        };
        assert_eq!(timed.to_string(), "Step 2: Bake for 30 minutes");
    }

    #[test]
    fn test_ingredients_only_for_mixing() {
        let timed = Instruction::Timed {
            action: Action::Cool,
            duration: Duration::parse("10").unwrap(),
            unit: TimeUnit::Minutes,
        };
        assert_eq!(timed.ingredients(), None);
        assert_eq!(timed.action(), Action::Cool);
    }
}
