pub mod error;
pub mod step;
pub mod vocabulary;

pub use error::{RecognizeError, ShapeDefect};
pub use step::{Duration, Instruction, Step};
pub use vocabulary::{Action, Ingredient, TimeUnit, Vocabulary};
