//! Engine configuration.
//!
//! The legal constants are fixed in `compute::formulas` and `validation`;
//! what a deployment may tune lives here.
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default epsilon below which a percentage counts as zero.
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-9;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid engine configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("zero_tolerance must be a finite, non-negative number (got {0})")]
    InvalidTolerance(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed "today" for reproducible runs; `None` uses the local date.
    pub reference_date: Option<NaiveDate>,
    /// Effective reductions and rate differentials with an absolute value
    /// at or below this are reported as zero.
    pub zero_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// The date calculations run against.
    pub fn today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Local::now().date_naive())
    }

    fn check(&self) -> Result<(), ConfigError> {
        if !self.zero_tolerance.is_finite() || self.zero_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.zero_tolerance));
        }
        Ok(())
    }
}
