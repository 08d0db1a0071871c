pub mod cli;
pub mod config;
pub mod executor;
pub mod formatter;
pub mod help;
pub mod recipe;

pub use recipelang_common::{Action, Ingredient, Instruction, RecognizeError, Step, TimeUnit};
pub use recipelang_parser::recognize;
