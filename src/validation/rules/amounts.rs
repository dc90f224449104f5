//! Validation rules for the numeric calculation inputs.
use crate::model::ContractField;
use crate::validation::error::ValidationError;

pub const MIN_COST_INCREASE_PER_YEAR: f64 = 0.0;
pub const MAX_COST_INCREASE_PER_YEAR: f64 = 10.0;

/// NaN and infinities can slip in through non-JSON callers.
pub(crate) fn validate_finite(field: ContractField, value: f64) -> Option<ValidationError> {
    if value.is_finite() {
        None
    } else {
        Some(ValidationError::NonFinite { field })
    }
}

/// A rent of zero or less makes every percentage meaningless.
pub(crate) fn validate_net_rent(value: f64) -> Option<ValidationError> {
    if value <= 0.0 {
        return Some(ValidationError::NonPositiveRent { value });
    }
    None
}

/// Reference rates are published as non-negative percentages.
pub(crate) fn validate_reference_rate(field: ContractField, value: f64) -> Option<ValidationError> {
    if value < 0.0 {
        return Some(ValidationError::NegativeRate { field, value });
    }
    None
}

pub(crate) fn validate_cost_increase(value: f64) -> Option<ValidationError> {
    if !(MIN_COST_INCREASE_PER_YEAR..=MAX_COST_INCREASE_PER_YEAR).contains(&value) {
        return Some(ValidationError::CostIncreaseOutOfRange {
            value,
            min: MIN_COST_INCREASE_PER_YEAR,
            max: MAX_COST_INCREASE_PER_YEAR,
        });
    }
    None
}
