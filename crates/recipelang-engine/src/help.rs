use recipelang_common::{Action, Ingredient, TimeUnit, Vocabulary};

fn word_list<V: Vocabulary>() -> String {
    V::ALL
        .iter()
        .map(|w| w.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Usage text shown by the interactive `help` command.
pub fn usage() -> String {
    format!(
        "
RecipeLang - A Simple Recipe Programming Language
=================================================

COMMAND PATTERNS:
  1. Mix ingredients:  <action> <ingredient1> and <ingredient2>
  2. Timed actions:    <action> for <number> <unit>

VALID ACTIONS:
  {actions}

VALID INGREDIENTS:
  {ingredients}

VALID TIME UNITS:
  {units}

EXAMPLE COMMANDS:
  mix flour and eggs
  add sugar and butter
  bake for 30 minutes
  cool for 10 minutes

SPECIAL COMMANDS:
  help     - Show this help
  recipe   - Display current recipe
  clear    - Clear current recipe
  quit     - Exit the interpreter
",
        actions = word_list::<Action>(),
        ingredients = word_list::<Ingredient>(),
        units = word_list::<TimeUnit>(),
    )
}
