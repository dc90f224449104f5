//! Plain data exchanged with the surrounding system.
pub mod canton;
pub mod record;
pub mod terms;

pub use canton::{Canton, Goal, CANTON_LABELS, GOAL_LABELS};
pub use record::{ContractField, ContractRecord};
pub use terms::ContractTerms;
