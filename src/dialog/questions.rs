//! Static question table, one entry per dialog field.
use super::field::{DialogField, InputKind};
use crate::model::{CANTON_LABELS, GOAL_LABELS};
use serde::Serialize;

/// The descriptor a UI needs to render one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub field: DialogField,
    pub prompt: &'static str,
    pub input_kind: InputKind,
    /// Non-empty only for select questions.
    pub options: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

static QUESTIONS: [Question; 5] = [
    Question {
        field: DialogField::LastIncrease,
        prompt: "Wann wurde Ihr Mietzins zuletzt angepasst?",
        input_kind: InputKind::Text,
        options: &[],
        placeholder: Some("z.B. 01.01.2023 oder 'keine'"),
    },
    Question {
        field: DialogField::Improvements,
        prompt: "Gab es seither bauliche Verbesserungen am Gebäude?",
        input_kind: InputKind::Boolean,
        options: &[],
        placeholder: None,
    },
    Question {
        field: DialogField::Canton,
        prompt: "In welchem Kanton befindet sich die Mietwohnung?",
        input_kind: InputKind::Select,
        options: &CANTON_LABELS,
        placeholder: Some("Kanton auswählen"),
    },
    Question {
        field: DialogField::GrossRent,
        prompt: "Wie hoch ist Ihr Bruttomietzins (inkl. Nebenkosten)?",
        input_kind: InputKind::Text,
        options: &[],
        placeholder: Some("z.B. 2650"),
    },
    Question {
        field: DialogField::Goal,
        prompt: "Was möchten Sie tun?",
        input_kind: InputKind::Select,
        options: &GOAL_LABELS,
        placeholder: Some("Ziel auswählen"),
    },
];

impl DialogField {
    pub fn question(&self) -> &'static Question {
        let idx = match self {
            DialogField::LastIncrease => 0,
            DialogField::Improvements => 1,
            DialogField::Canton => 2,
            DialogField::GrossRent => 3,
            DialogField::Goal => 4,
        };
        &QUESTIONS[idx]
    }
}
