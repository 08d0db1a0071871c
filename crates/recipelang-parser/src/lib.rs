pub mod normalizer;
pub mod recognizer;

pub use normalizer::{is_blank_or_comment, normalize, tokenize};
pub use recipelang_common::{Instruction, RecognizeError};
pub use recognizer::{recognize, recognize_tokens};
