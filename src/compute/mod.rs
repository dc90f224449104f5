//! Executes the rent adjustment calculation.
pub mod engine;
pub mod formulas;
pub mod result;

pub use engine::CalculationEngine;
pub use result::{BreakdownStep, CalculationError, CalculationResult, Outcome, RateTrend};
