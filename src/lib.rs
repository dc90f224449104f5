//! Rent reduction engine for Swiss tenancies (Art. 270a OR).
//!
//! The crate turns contract figures into a reduction estimate with a German
//! justification, runs the question dialog that completes partially
//! extracted contracts, and composes the formal request letter. Everything
//! here is synchronous and free of I/O; upload, extraction and rendering
//! surfaces are external.
//!
//! ```
//! use mietzins_core::{compose_letter, CalculationEngine, DialogController, EngineConfig};
//! use mietzins_core::intake::{ContractSource, SampleContract};
//!
//! let record = SampleContract.extract(b"%PDF", "vertrag.pdf")?;
//! let mut dialog = DialogController::new(record);
//! // Last increase, gross rent, goal.
//! for answer in ["keine", "2650", "Brief"] {
//!     dialog.submit_answer(answer)?;
//! }
//! assert!(dialog.is_complete());
//!
//! let engine = CalculationEngine::new(EngineConfig::default());
//! let result = engine.calculate(dialog.record())?;
//! let letter = compose_letter(dialog.record(), &result, engine.config().today())?;
//! println!("{}\n\n{}", result.explanation, letter.to_plain_text());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analysis;
pub mod compute;
pub mod config;
pub mod dialog;
pub mod display;
pub mod intake;
pub mod model;
pub mod validation;

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

pub use compute::{CalculationEngine, CalculationError, CalculationResult};
pub use config::EngineConfig;
pub use dialog::{DialogController, DialogError};
pub use display::{compose_letter, Letter};
pub use model::{ContractRecord, ContractTerms};
