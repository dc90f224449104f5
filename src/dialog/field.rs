//! The dialog fields and their per-field answer coercion.
//!
//! Each variant owns its coercer, so adding a field forces a decision on how
//! its answers are parsed (the `match` arms are exhaustive).
use super::error::AnswerError;
use crate::model::{Canton, ContractRecord, Goal, CANTON_LABELS, GOAL_LABELS};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogField {
    LastIncrease,
    Improvements,
    Canton,
    GrossRent,
    Goal,
}

/// How the answer is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    Text,
    Boolean,
    Select,
}

/// A coerced answer, ready to be merged into the record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// `None` when the tenant said there was no adjustment.
    LastIncrease(Option<String>),
    Improvements(bool),
    Canton(Canton),
    GrossRent(f64),
    Goal(Goal),
}

impl DialogField {
    /// Question order.
    pub const ORDER: [DialogField; 5] = [
        DialogField::LastIncrease,
        DialogField::Improvements,
        DialogField::Canton,
        DialogField::GrossRent,
        DialogField::Goal,
    ];

    pub fn kind(&self) -> InputKind {
        match self {
            DialogField::LastIncrease | DialogField::GrossRent => InputKind::Text,
            DialogField::Improvements => InputKind::Boolean,
            DialogField::Canton | DialogField::Goal => InputKind::Select,
        }
    }

    /// The fixed option set for select fields; empty otherwise.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            DialogField::Canton => &CANTON_LABELS,
            DialogField::Goal => &GOAL_LABELS,
            _ => &[],
        }
    }

    /// Converts a raw answer into a typed value or a user-facing rejection.
    pub fn coerce(&self, answer: &str) -> Result<FieldValue, AnswerError> {
        match self {
            DialogField::Improvements => Ok(FieldValue::Improvements(parse_yes(answer))),
            DialogField::LastIncrease => Ok(FieldValue::LastIncrease(parse_last_increase(answer))),
            DialogField::GrossRent => parse_amount(answer)
                .map(FieldValue::GrossRent)
                .ok_or(AnswerError::InvalidAmount { field: *self }),
            DialogField::Canton => Canton::from_label(answer)
                .map(FieldValue::Canton)
                .ok_or_else(|| self.not_an_option(answer)),
            DialogField::Goal => Goal::from_label(answer)
                .map(FieldValue::Goal)
                .ok_or_else(|| self.not_an_option(answer)),
        }
    }

    fn not_an_option(&self, answer: &str) -> AnswerError {
        AnswerError::NotAnOption { field: *self, answer: answer.to_string() }
    }
}

impl fmt::Display for DialogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DialogField::LastIncrease => "lastIncrease",
            DialogField::Improvements => "improvements",
            DialogField::Canton => "canton",
            DialogField::GrossRent => "grossRent",
            DialogField::Goal => "goal",
        };
        f.write_str(name)
    }
}

impl FieldValue {
    pub fn field(&self) -> DialogField {
        match self {
            FieldValue::LastIncrease(_) => DialogField::LastIncrease,
            FieldValue::Improvements(_) => DialogField::Improvements,
            FieldValue::Canton(_) => DialogField::Canton,
            FieldValue::GrossRent(_) => DialogField::GrossRent,
            FieldValue::Goal(_) => DialogField::Goal,
        }
    }

    /// Writes the value into its record slot.
    pub fn apply(self, record: &mut ContractRecord) {
        match self {
            FieldValue::LastIncrease(v) => record.last_increase_date = v,
            FieldValue::Improvements(v) => record.improvements_made = Some(v),
            FieldValue::Canton(v) => record.canton = Some(v),
            FieldValue::GrossRent(v) => record.gross_rent = Some(v),
            FieldValue::Goal(v) => record.goal = Some(v),
        }
    }
}

/// "ja"/"yes" anywhere (any case), or exactly "true". Everything else is no.
fn parse_yes(answer: &str) -> bool {
    let lower = answer.to_lowercase();
    lower.contains("ja") || lower.contains("yes") || lower == "true"
}

/// "keine"/"none" means no adjustment; anything else is kept verbatim.
fn parse_last_increase(answer: &str) -> Option<String> {
    let lower = answer.to_lowercase();
    if lower.contains("keine") || lower.contains("none") {
        None
    } else {
        Some(answer.to_string())
    }
}

/// Reads an amount like "2650", "CHF 2'650.-" or "2 650.50".
///
/// Everything but digits and dots is dropped, then the longest leading
/// number is parsed. A minus sign directly before the first digit (spaces
/// aside) marks the amount negative, which is rejected along with zero and
/// unparsable input. Hyphens inside words ("Brutto-Miete") are ignored.
fn parse_amount(answer: &str) -> Option<f64> {
    let negative = answer
        .chars()
        .take_while(|c| !c.is_ascii_digit())
        .filter(|c| !c.is_whitespace())
        .last()
        .is_some_and(|c| c == '-' || c == '\u{2212}');

    let cleaned: String = answer.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    let mut seen_dot = false;
    let leading: String = cleaned
        .chars()
        .take_while(|&c| {
            if c == '.' {
                if seen_dot {
                    return false;
                }
                seen_dot = true;
            }
            true
        })
        .collect();

    let value: f64 = leading.parse().ok()?;
    let value = if negative { -value } else { value };
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Ja", true)]
    #[case("ja, das Dach wurde saniert", true)]
    #[case("YES", true)]
    #[case("true", true)]
    #[case("TRUE", true)]
    #[case("Nein", false)]
    #[case("no", false)]
    #[case("", false)]
    fn test_boolean_answers(#[case] answer: &str, #[case] expected: bool) {
        assert_eq!(DialogField::Improvements.coerce(answer), Ok(FieldValue::Improvements(expected)));
    }

    #[rstest]
    #[case("keine", None)]
    #[case("Keine Anpassung", None)]
    #[case("none", None)]
    #[case("01.01.2023", Some("01.01.2023"))]
    #[case("irgendwann 2021", Some("irgendwann 2021"))]
    fn test_last_increase_answers(#[case] answer: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            DialogField::LastIncrease.coerce(answer),
            Ok(FieldValue::LastIncrease(expected.map(String::from)))
        );
    }

    #[rstest]
    #[case("2650", Some(2650.0))]
    #[case("CHF 2'650.-", Some(2650.0))]
    #[case("2 650.50", Some(2650.5))]
    #[case("1.2.3", Some(1.2))]
    #[case("Brutto-Miete 2650", Some(2650.0))]
    #[case("Netto-/Bruttomiete: 2650", Some(2650.0))]
    #[case("-50", None)]
    #[case("ca. -2650", None)]
    #[case("- 50", None)]
    #[case("\u{2212}50", None)]
    #[case("abc", None)]
    #[case("0", None)]
    #[case("", None)]
    #[case(".", None)]
    fn test_amount_parsing(#[case] answer: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_amount(answer), expected);
    }

    #[test]
    fn test_gross_rent_rejection_is_field_specific() {
        let err = DialogField::GrossRent.coerce("abc").unwrap_err();
        assert_eq!(err, AnswerError::InvalidAmount { field: DialogField::GrossRent });
        assert!(err.to_string().contains("gültigen Betrag"));
    }

    #[test]
    fn test_select_fields_require_exact_option() {
        assert_eq!(DialogField::Canton.coerce("Basel-Stadt"), Ok(FieldValue::Canton(Canton::BaselStadt)));
        assert!(DialogField::Canton.coerce("basel-stadt").is_err());
        assert_eq!(DialogField::Goal.coerce("Brief"), Ok(FieldValue::Goal(Goal::Letter)));
        let err = DialogField::Goal.coerce("beides").unwrap_err();
        assert!(err.to_string().contains("verfügbaren Optionen"));
    }

    #[test]
    fn test_options_only_for_select_fields() {
        for field in DialogField::ORDER {
            assert_eq!(field.options().is_empty(), field.kind() != InputKind::Select);
        }
        assert_eq!(DialogField::Canton.options().len(), 26);
    }

    #[test]
    fn test_apply_writes_matching_slot() {
        let mut record = ContractRecord::default();
        FieldValue::GrossRent(2650.0).apply(&mut record);
        FieldValue::LastIncrease(None).apply(&mut record);
        FieldValue::Improvements(true).apply(&mut record);
        assert_eq!(record.gross_rent, Some(2650.0));
        assert_eq!(record.last_increase_date, None);
        assert_eq!(record.improvements_made, Some(true));
    }
}
