//! Plausibility checks that gate the calculation engine.
//!
//! The `Validator` runs a set of small rules against a `ContractRecord`
//! and, on success, hands out `ContractTerms`, the only input type the
//! engine accepts.

pub use self::error::ValidationError;
pub use self::rules::amounts::{MAX_COST_INCREASE_PER_YEAR, MIN_COST_INCREASE_PER_YEAR};
pub use self::rules::dates::{parse_date, MIN_CONTRACT_YEAR};
pub use self::validator::Validator;

// --- MODULE DECLARATIONS ---
mod error;
mod validator;
mod rules {
    pub mod amounts;
    pub mod dates;
}
