//! Static inspection of partial records.
pub mod completeness;

pub use completeness::{is_ready_for_calculation, missing_fields};
