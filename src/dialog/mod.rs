//! Interactive collection of the fields document extraction could not supply.
//!
//! `DialogController` is a small state machine: it asks one question at a
//! time in a fixed order, coerces each answer through the field's own
//! parser, and finishes once every originally missing field has an answer.

pub use self::controller::{AnswerOutcome, DialogController};
pub use self::error::{AnswerError, DialogError};
pub use self::field::{DialogField, FieldValue, InputKind};
pub use self::questions::Question;
pub use self::state::{DialogState, Progress};

// --- MODULE DECLARATIONS ---
mod controller;
mod error;
mod field;
mod questions;
mod state;
