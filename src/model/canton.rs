//! Closed enumerations that are part of the external contract: the 26 Swiss
//! cantons and the user's goal. Labels must match the offered dialog options
//! exactly, so every variant carries its canonical German label.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Canton {
    #[serde(rename = "Zürich")]
    Zurich,
    #[serde(rename = "Bern")]
    Bern,
    #[serde(rename = "Luzern")]
    Luzern,
    #[serde(rename = "Uri")]
    Uri,
    #[serde(rename = "Schwyz")]
    Schwyz,
    #[serde(rename = "Obwalden")]
    Obwalden,
    #[serde(rename = "Nidwalden")]
    Nidwalden,
    #[serde(rename = "Glarus")]
    Glarus,
    #[serde(rename = "Zug")]
    Zug,
    #[serde(rename = "Freiburg")]
    Freiburg,
    #[serde(rename = "Solothurn")]
    Solothurn,
    #[serde(rename = "Basel-Stadt")]
    BaselStadt,
    #[serde(rename = "Basel-Landschaft")]
    BaselLandschaft,
    #[serde(rename = "Schaffhausen")]
    Schaffhausen,
    #[serde(rename = "Appenzell Ausserrhoden")]
    AppenzellAusserrhoden,
    #[serde(rename = "Appenzell Innerrhoden")]
    AppenzellInnerrhoden,
    #[serde(rename = "St. Gallen")]
    StGallen,
    #[serde(rename = "Graubünden")]
    Graubunden,
    #[serde(rename = "Aargau")]
    Aargau,
    #[serde(rename = "Thurgau")]
    Thurgau,
    #[serde(rename = "Tessin")]
    Tessin,
    #[serde(rename = "Waadt")]
    Waadt,
    #[serde(rename = "Wallis")]
    Wallis,
    #[serde(rename = "Neuenburg")]
    Neuenburg,
    #[serde(rename = "Genf")]
    Genf,
    #[serde(rename = "Jura")]
    Jura,
}

/// Canton labels in the order they are offered to the user.
pub const CANTON_LABELS: [&str; 26] = [
    "Zürich", "Bern", "Luzern", "Uri", "Schwyz", "Obwalden", "Nidwalden",
    "Glarus", "Zug", "Freiburg", "Solothurn", "Basel-Stadt", "Basel-Landschaft",
    "Schaffhausen", "Appenzell Ausserrhoden", "Appenzell Innerrhoden", "St. Gallen",
    "Graubünden", "Aargau", "Thurgau", "Tessin", "Waadt", "Wallis", "Neuenburg",
    "Genf", "Jura",
];

impl Canton {
    pub const ALL: [Canton; 26] = [
        Canton::Zurich, Canton::Bern, Canton::Luzern, Canton::Uri, Canton::Schwyz,
        Canton::Obwalden, Canton::Nidwalden, Canton::Glarus, Canton::Zug, Canton::Freiburg,
        Canton::Solothurn, Canton::BaselStadt, Canton::BaselLandschaft, Canton::Schaffhausen,
        Canton::AppenzellAusserrhoden, Canton::AppenzellInnerrhoden, Canton::StGallen,
        Canton::Graubunden, Canton::Aargau, Canton::Thurgau, Canton::Tessin, Canton::Waadt,
        Canton::Wallis, Canton::Neuenburg, Canton::Genf, Canton::Jura,
    ];

    pub fn label(&self) -> &'static str {
        // ALL and CANTON_LABELS share one ordering.
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        CANTON_LABELS[idx]
    }

    /// Exact match against the canonical label. No case folding: the label
    /// set is part of the external contract.
    pub fn from_label(label: &str) -> Option<Self> {
        CANTON_LABELS
            .iter()
            .position(|&l| l == label)
            .map(|idx| Self::ALL[idx])
    }
}

impl fmt::Display for Canton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the tenant wants to do with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "nur Prüfung", alias = "review only")]
    ReviewOnly,
    #[serde(rename = "Brief", alias = "letter")]
    Letter,
}

pub const GOAL_LABELS: [&str; 2] = ["nur Prüfung", "Brief"];

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::ReviewOnly => GOAL_LABELS[0],
            Goal::Letter => GOAL_LABELS[1],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "nur Prüfung" => Some(Goal::ReviewOnly),
            "Brief" => Some(Goal::Letter),
            _ => None,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_every_canton_round_trips_through_its_label() {
        for canton in Canton::ALL {
            assert_eq!(Canton::from_label(canton.label()), Some(canton));
        }
    }

    #[test]
    fn test_serde_label_matches_offered_label() {
        for canton in Canton::ALL {
            let json = serde_json::to_string(&canton).unwrap();
            assert_eq!(json, format!("\"{}\"", canton.label()));
        }
    }

    #[rstest]
    #[case("zürich")]
    #[case("Zurich")]
    #[case(" Bern")]
    #[case("")]
    fn test_canton_lookup_is_exact(#[case] label: &str) {
        assert_eq!(Canton::from_label(label), None);
    }

    #[test]
    fn test_goal_accepts_english_alias_on_deserialize() {
        let goal: Goal = serde_json::from_str("\"letter\"").unwrap();
        assert_eq!(goal, Goal::Letter);
        let goal: Goal = serde_json::from_str("\"nur Prüfung\"").unwrap();
        assert_eq!(goal, Goal::ReviewOnly);
        assert_eq!(Goal::from_label("letter"), None);
    }
}
