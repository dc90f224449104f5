use super::field::DialogField;
use thiserror::Error;

/// A rejected answer. The tenant can correct it and retry the same question.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnswerError {
    #[error("Bitte geben Sie einen gültigen Betrag ein (z.B. 2650).")]
    InvalidAmount { field: DialogField },
    #[error("Bitte wählen Sie eine der verfügbaren Optionen.")]
    NotAnOption { field: DialogField, answer: String },
}

impl AnswerError {
    pub fn field(&self) -> DialogField {
        match self {
            AnswerError::InvalidAmount { field } | AnswerError::NotAnOption { field, .. } => *field,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DialogError {
    /// An answer arrived after the dialog finished. This is an integration
    /// bug in the caller, not a user mistake.
    #[error("Keine aktive Frage")]
    NoActiveQuestion,
    #[error(transparent)]
    Rejected(#[from] AnswerError),
}

impl DialogError {
    /// True for errors the tenant can fix by answering differently.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, DialogError::Rejected(_))
    }
}
