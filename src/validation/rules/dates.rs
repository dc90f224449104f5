//! Validation rules for contract and adjustment dates.
use crate::model::ContractField;
use crate::validation::error::ValidationError;
use chrono::{Datelike, NaiveDate};

/// Earliest contract year considered plausible.
pub const MIN_CONTRACT_YEAR: i32 = 1990;

const SWISS_FORMAT: &str = "%d.%m.%Y";
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parses a date as typed by a tenant ("01.01.2023") or as exchanged by
/// machines ("2023-01-01").
///
/// The year must be written with four digits; "01.01.23" is not a date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let (year, fmt) = match trimmed.rsplit_once('.') {
        Some((_, year)) => (year, SWISS_FORMAT),
        None => (trimmed.split('-').next().unwrap_or_default(), ISO_FORMAT),
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, fmt).ok()
}

/// The contract year must lie in `[MIN_CONTRACT_YEAR, current year]`.
pub(crate) fn validate_contract_year(contract_date: NaiveDate, today: NaiveDate) -> Option<ValidationError> {
    let year = contract_date.year();
    let max = today.year();
    if year < MIN_CONTRACT_YEAR || year > max {
        return Some(ValidationError::ImplausibleContractYear {
            year,
            min: MIN_CONTRACT_YEAR,
            max,
        });
    }
    None
}

/// Resolves the free-text last-increase answer. Blank text counts as "no
/// adjustment", the same as an absent value. Years before
/// `MIN_CONTRACT_YEAR` are rejected.
pub(crate) fn resolve_last_increase(raw: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => {
            let date = parse_date(text).ok_or_else(|| ValidationError::UnparseableDate {
                field: ContractField::LastIncreaseDate,
                raw: text.to_string(),
            })?;
            if date.year() < MIN_CONTRACT_YEAR {
                return Err(ValidationError::ImplausibleLastIncreaseYear {
                    year: date.year(),
                    min: MIN_CONTRACT_YEAR,
                });
            }
            Ok(Some(date))
        }
    }
}
