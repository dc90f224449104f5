//! Detects which dialog fields a partial record still lacks.
use crate::dialog::DialogField;
use crate::model::ContractRecord;

/// Absent, or blank after trimming.
fn blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

/// Returns the missing dialog fields in question order.
///
/// Each field is tested independently, in `DialogField::ORDER`. A gross
/// rent of exactly zero counts as missing, as an extraction placeholder.
pub fn missing_fields(record: &ContractRecord) -> Vec<DialogField> {
    DialogField::ORDER
        .into_iter()
        .filter(|field| match field {
            DialogField::LastIncrease => blank(record.last_increase_date.as_deref()),
            DialogField::Improvements => record.improvements_made.is_none(),
            DialogField::Canton => record.canton.is_none(),
            DialogField::GrossRent => record.gross_rent.map_or(true, |v| v == 0.0 || v.is_nan()),
            DialogField::Goal => record.goal.is_none(),
        })
        .collect()
}

/// True when every field the engine and the letter header rely on is present.
pub fn is_ready_for_calculation(record: &ContractRecord) -> bool {
    record.net_rent.is_some()
        && record.reference_rate_at_contract.is_some()
        && record.current_reference_rate.is_some()
        && record.contract_date.is_some()
        && !blank(record.address.as_deref())
        && record.canton.is_some()
        && record.inflation_since_contract.is_some()
        && record.cost_increase_per_year.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Canton, Goal};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_record_misses_everything_in_order() {
        assert_eq!(missing_fields(&ContractRecord::default()), DialogField::ORDER.to_vec());
    }

    #[test]
    fn test_filled_record_misses_nothing() {
        let record = ContractRecord {
            last_increase_date: Some("01.01.2023".into()),
            improvements_made: Some(false),
            canton: Some(Canton::Zurich),
            gross_rent: Some(2650.0),
            goal: Some(Goal::Letter),
            ..Default::default()
        };
        assert!(missing_fields(&record).is_empty());
    }

    #[test]
    fn test_blank_strings_and_zero_rent_count_as_missing() {
        let record = ContractRecord {
            last_increase_date: Some("   ".into()),
            improvements_made: Some(true),
            canton: Some(Canton::Bern),
            gross_rent: Some(0.0),
            goal: Some(Goal::ReviewOnly),
            ..Default::default()
        };
        assert_eq!(missing_fields(&record), vec![DialogField::LastIncrease, DialogField::GrossRent]);
    }

    #[test]
    fn test_improvements_false_is_present() {
        let record = ContractRecord { improvements_made: Some(false), ..Default::default() };
        assert!(!missing_fields(&record).contains(&DialogField::Improvements));
    }

    #[test]
    fn test_ready_for_calculation() {
        let mut record = ContractRecord {
            net_rent: Some(2400.0),
            reference_rate_at_contract: Some(1.75),
            current_reference_rate: Some(1.25),
            contract_date: NaiveDate::from_ymd_opt(2019, 10, 1),
            address: Some("Nordstrasse 9, 8006 Zürich".into()),
            canton: Some(Canton::Zurich),
            inflation_since_contract: Some(3.8),
            cost_increase_per_year: Some(0.5),
            ..Default::default()
        };
        assert!(is_ready_for_calculation(&record));
        record.address = Some(" ".into());
        assert!(!is_ready_for_calculation(&record));
    }
}
