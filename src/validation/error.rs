//! Defines the error types for the validation module.
use crate::model::ContractField;
use thiserror::Error;

/// A rejected calculation input.
///
/// Every variant names the offending field and the bound it violated, so a
/// caller can show the message to the tenant as-is. These are permanent:
/// the same record always fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} fehlt")]
    Missing { field: ContractField },
    #[error("{field} ist keine gültige Zahl")]
    NonFinite { field: ContractField },
    #[error("Nettomiete muss grösser als 0 sein (erhalten: {value})")]
    NonPositiveRent { value: f64 },
    #[error("{field} darf nicht negativ sein (erhalten: {value})")]
    NegativeRate { field: ContractField, value: f64 },
    #[error("Vertragsdatum ist nicht plausibel: Jahr {year} liegt nicht zwischen {min} und {max}")]
    ImplausibleContractYear { year: i32, min: i32, max: i32 },
    #[error("Kostensteigerung pro Jahr muss zwischen {min}% und {max}% liegen (erhalten: {value}%)")]
    CostIncreaseOutOfRange { value: f64, min: f64, max: f64 },
    #[error("Datum der letzten Mietzinsanpassung ist nicht plausibel: Jahr {year} liegt vor {min}")]
    ImplausibleLastIncreaseYear { year: i32, min: i32 },
    #[error("{field} '{raw}' ist kein gültiges Datum (erwartet: TT.MM.JJJJ oder JJJJ-MM-TT)")]
    UnparseableDate { field: ContractField, raw: String },
}

impl ValidationError {
    /// The record field this error is about.
    pub fn field(&self) -> ContractField {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NonFinite { field }
            | ValidationError::NegativeRate { field, .. }
            | ValidationError::UnparseableDate { field, .. } => *field,
            ValidationError::NonPositiveRent { .. } => ContractField::NetRent,
            ValidationError::ImplausibleContractYear { .. } => ContractField::ContractDate,
            ValidationError::CostIncreaseOutOfRange { .. } => ContractField::CostIncreasePerYear,
            ValidationError::ImplausibleLastIncreaseYear { .. } => ContractField::LastIncreaseDate,
        }
    }
}
