//! Seam to the document extraction service.
//!
//! Extraction itself (OCR, form recognition) lives outside this crate. A
//! `ContractSource` turns an uploaded document into a best-effort partial
//! `ContractRecord`; the dialog fills whatever it could not read.
use crate::model::{Canton, ContractRecord};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

/// Upload size limit enforced before extraction.
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;
const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Leeres Dokument")]
    EmptyDocument,
    #[error("Dokument ist zu gross ({size} Bytes, maximal {max})")]
    TooLarge { size: usize, max: usize },
    #[error("Ungültiger Dateityp '{0}'. Erlaubt sind PDF, JPG und PNG.")]
    UnsupportedType(String),
    #[error("Extraktion fehlgeschlagen: {0}")]
    Extraction(String),
}

/// Checks size and file type of an upload.
pub fn check_document(document: &[u8], filename: &str) -> Result<(), IntakeError> {
    if document.is_empty() {
        return Err(IntakeError::EmptyDocument);
    }
    if document.len() > MAX_DOCUMENT_BYTES {
        return Err(IntakeError::TooLarge { size: document.len(), max: MAX_DOCUMENT_BYTES });
    }
    let extension = filename.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(IntakeError::UnsupportedType(filename.to_string())),
    }
}

pub trait ContractSource {
    fn extract(&self, document: &[u8], filename: &str) -> Result<ContractRecord, IntakeError>;
}

/// Returns the same demo contract for every accepted document. Used for
/// demos and tests until a real extraction backend is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleContract;

impl SampleContract {
    pub fn record() -> ContractRecord {
        ContractRecord {
            net_rent: Some(2400.0),
            reference_rate_at_contract: Some(1.75),
            current_reference_rate: Some(1.25),
            inflation_since_contract: Some(3.8),
            cost_increase_per_year: Some(0.5),
            contract_date: NaiveDate::from_ymd_opt(2019, 10, 1),
            last_increase_date: None,
            canton: Some(Canton::Zurich),
            improvements_made: Some(false),
            address: Some("Nordstrasse 9, 8006 Zürich".into()),
            tenant_name: Some("Max Muster".into()),
            landlord_name: Some("Muster Immobilien AG".into()),
            property_address: Some("Nordstrasse 9, 8006 Zürich".into()),
            ..Default::default()
        }
    }
}

impl ContractSource for SampleContract {
    fn extract(&self, document: &[u8], filename: &str) -> Result<ContractRecord, IntakeError> {
        check_document(document, filename)?;
        debug!(filename, bytes = document.len(), "Extracting contract (sample data)");
        Ok(Self::record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::missing_fields;
    use crate::dialog::DialogField;
    use rstest::rstest;

    #[rstest]
    #[case("vertrag.pdf", true)]
    #[case("SCAN.JPG", true)]
    #[case("foto.png", true)]
    #[case("vertrag.docx", false)]
    #[case("ohne_endung", false)]
    fn test_accepted_file_types(#[case] filename: &str, #[case] accepted: bool) {
        assert_eq!(check_document(b"%PDF", filename).is_ok(), accepted);
    }

    #[test]
    fn test_empty_and_oversized_documents() {
        assert_eq!(check_document(b"", "a.pdf"), Err(IntakeError::EmptyDocument));
        let big = vec![0u8; MAX_DOCUMENT_BYTES + 1];
        assert!(matches!(check_document(&big, "a.pdf"), Err(IntakeError::TooLarge { .. })));
    }

    #[test]
    fn test_sample_leaves_dialog_fields_open() {
        let record = SampleContract.extract(b"%PDF-1.7", "vertrag.pdf").unwrap();
        assert_eq!(
            missing_fields(&record),
            vec![DialogField::LastIncrease, DialogField::GrossRent, DialogField::Goal]
        );
    }
}
