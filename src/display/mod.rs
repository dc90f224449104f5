//! Human-readable output: justification text, breakdown and the request letter.
pub mod format;
pub mod letter;
pub mod narrative;

pub use letter::{compose_letter, BlockKind, Letter, LetterData, LetterError, TextBlock};
