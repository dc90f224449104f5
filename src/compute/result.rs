//! result.rs
//! The immutable product of one calculation run.

use serde::{Deserialize, Serialize};

pub use self::error::CalculationError;
mod error {
    use crate::validation::ValidationError;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum CalculationError {
        #[error("Ungültige Eingabe: {0}")]
        InvalidInput(#[from] ValidationError),
    }
}

/// Direction the reference rate moved since the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RateTrend {
    Fell,
    Rose,
    Unchanged,
}

/// Net effect after all offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Reduction,
    Increase,
    Neutral,
}

impl RateTrend {
    /// Differentials within `tolerance` of zero count as unchanged.
    pub fn classify(differential: f64, tolerance: f64) -> Self {
        if differential > tolerance {
            RateTrend::Fell
        } else if differential < -tolerance {
            RateTrend::Rose
        } else {
            RateTrend::Unchanged
        }
    }
}

impl Outcome {
    /// Effective reductions within `tolerance` of zero are neutral.
    pub fn classify(effective_pct: f64, tolerance: f64) -> Self {
        if effective_pct > tolerance {
            Outcome::Reduction
        } else if effective_pct < -tolerance {
            Outcome::Increase
        } else {
            Outcome::Neutral
        }
    }
}

/// One labeled line of the calculation breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownStep {
    pub step: String,
    pub value: String,
    pub explanation: String,
}

/// Everything the presentation layer and the letter composer need.
///
/// Built fresh by every `CalculationEngine::calculate` call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub is_reduction_possible: bool,
    pub rate_trend: RateTrend,
    pub outcome: Outcome,
    pub rate_differential: f64,
    pub interest_reduction_percent: f64,
    pub years_since_adjustment: f64,
    pub cost_increase_percent: f64,
    pub inflation_adjustment_percent: f64,
    pub effective_reduction_percent: f64,
    pub current_rent: f64,
    pub new_rent: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    /// German justification text.
    pub explanation: String,
    pub breakdown: Vec<BreakdownStep>,
}

impl CalculationResult {
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.5, RateTrend::Fell)]
    #[case(-0.25, RateTrend::Rose)]
    #[case(0.0, RateTrend::Unchanged)]
    #[case(1e-12, RateTrend::Unchanged)]
    fn test_rate_trend(#[case] diff: f64, #[case] expected: RateTrend) {
        assert_eq!(RateTrend::classify(diff, 1e-9), expected);
    }

    #[rstest]
    #[case(2.1, Outcome::Reduction)]
    #[case(-0.4, Outcome::Increase)]
    #[case(-4.4e-16, Outcome::Neutral)]
    #[case(0.0, Outcome::Neutral)]
    fn test_outcome_applies_tolerance(#[case] pct: f64, #[case] expected: Outcome) {
        assert_eq!(Outcome::classify(pct, 1e-9), expected);
    }
}
