//! The formal rent reduction request under Art. 270a OR.
//!
//! `LetterData` gathers what the letter needs from a completed record and a
//! calculation result; `LetterData::render` fills the fixed templates. The
//! only branching is on whether a landlord name is known.
use crate::compute::CalculationResult;
use crate::display::format::{chf, letter_percent, swiss_long_date};
use crate::model::{ContractField, ContractRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SUBJECT: &str = "Gesuch um Mietzinssenkung gemäss Art. 270a OR";
const GENERIC_SALUTATION: &str = "Sehr geehrte Damen und Herren";
const CLOSING: &str = "Mit freundlichen Grüssen";
const FOOTER: &str = "Erstellt mit LexRent – Ihre digitale Unterstützung für Mietrecht in der Schweiz";
const DEFAULT_TENANT_NAME: &str = "Mieter";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LetterError {
    #[error("{0} fehlt für das Schreiben")]
    MissingField(ContractField),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantBlock {
    pub name: String,
    pub street: String,
    pub city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandlordBlock {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterData {
    pub tenant: TenantBlock,
    pub landlord: LandlordBlock,
    pub property_address: String,
    pub net_rent: f64,
    pub reference_rate_at_contract: f64,
    pub current_reference_rate: f64,
    pub effective_reduction_percent: f64,
    pub new_net_rent: f64,
    pub monthly_savings: f64,
    pub date: NaiveDate,
}

/// Kind of a rendered text block, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Subject,
    Salutation,
    Paragraph,
    Closing,
    Signature,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub kind: BlockKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    /// Sender block lines: name, street, city.
    pub sender: Vec<String>,
    /// Recipient block lines; empty when no landlord is known.
    pub recipient: Vec<String>,
    /// "16. Oktober 2026"
    pub date: String,
    /// "8006 Zürich, 16. Oktober 2026"; the bare date when no city is known.
    pub place_and_date: String,
    pub subject: String,
    pub salutation: String,
    pub paragraphs: Vec<String>,
    pub closing: String,
    /// Tenant name under the closing.
    pub signature: String,
    pub footer: String,
}

/// Trimmed, non-empty text.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl LetterData {
    /// Derives letter data. Rates must be present on the record; the rent
    /// figures come from the calculation result.
    pub fn from_record(
        record: &ContractRecord,
        result: &CalculationResult,
        date: NaiveDate,
    ) -> Result<Self, LetterError> {
        let reference_rate_at_contract = record
            .reference_rate_at_contract
            .ok_or(LetterError::MissingField(ContractField::ReferenceRateAtContract))?;
        let current_reference_rate = record
            .current_reference_rate
            .ok_or(LetterError::MissingField(ContractField::CurrentReferenceRate))?;

        // "Nordstrasse 9, 8006 Zürich" -> street, city.
        let address = record.address.as_deref().unwrap_or("");
        let (street, city) = match address.split_once(',') {
            Some((street, city)) => (street.trim(), city.trim()),
            None => (address.trim(), ""),
        };
        let city = if city.is_empty() {
            record.canton.map(|c| c.label()).unwrap_or("")
        } else {
            city
        };

        Ok(Self {
            tenant: TenantBlock {
                name: present(record.tenant_name.as_deref()).unwrap_or(DEFAULT_TENANT_NAME).to_string(),
                street: street.to_string(),
                city: city.to_string(),
            },
            landlord: LandlordBlock {
                name: present(record.landlord_name.as_deref()).map(String::from),
                address: present(record.landlord_address.as_deref()).map(String::from),
            },
            property_address: present(record.property_address.as_deref()).unwrap_or(street).to_string(),
            net_rent: result.current_rent,
            reference_rate_at_contract,
            current_reference_rate,
            effective_reduction_percent: result.effective_reduction_percent,
            new_net_rent: result.new_rent,
            monthly_savings: result.monthly_savings,
            date,
        })
    }

    pub fn salutation(&self) -> String {
        match &self.landlord.name {
            Some(name) => format!("{} der {}", GENERIC_SALUTATION, name),
            None => GENERIC_SALUTATION.to_string(),
        }
    }

    fn body(&self) -> Vec<String> {
        vec![
            format!(
                "Ich bin Mieter/Mieterin der Liegenschaft {} mit einem aktuellen Nettomietzins von {} pro Monat.",
                self.property_address,
                chf(self.net_rent)
            ),
            format!(
                "Aufgrund der Senkung des hypothekarischen Referenzzinssatzes von {} auf {} ersuche ich Sie hiermit um eine entsprechende Anpassung meines Mietzinses gemäss Art. 270a OR.",
                letter_percent(self.reference_rate_at_contract),
                letter_percent(self.current_reference_rate)
            ),
            format!(
                "Gemäss der durchgeführten Berechnung ergibt sich eine Reduktion von {}, was einem neuen Nettomietzins von {} pro Monat entspricht. Dies bedeutet eine monatliche Reduktion von {}.",
                letter_percent(self.effective_reduction_percent),
                chf(self.new_net_rent),
                chf(self.monthly_savings)
            ),
            "Ich bitte Sie, diese Mietzinssenkung per nächstmöglichem Termin umzusetzen und mir dies schriftlich zu bestätigen.".to_string(),
            "Für Rückfragen stehe ich Ihnen gerne zur Verfügung. Ich danke Ihnen für Ihr Verständnis und freue mich auf eine positive Rückmeldung.".to_string(),
        ]
    }

    pub fn render(&self) -> Letter {
        let sender = [&self.tenant.name, &self.tenant.street, &self.tenant.city]
            .into_iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect();
        let recipient = [&self.landlord.name, &self.landlord.address]
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        let date = swiss_long_date(self.date);
        let place_and_date = if self.tenant.city.is_empty() {
            date.clone()
        } else {
            format!("{}, {}", self.tenant.city, date)
        };

        Letter {
            sender,
            recipient,
            date,
            place_and_date,
            subject: SUBJECT.to_string(),
            salutation: self.salutation(),
            paragraphs: self.body(),
            closing: CLOSING.to_string(),
            signature: self.tenant.name.clone(),
            footer: FOOTER.to_string(),
        }
    }
}

impl Letter {
    /// Subject, salutation, five paragraphs, closing, signature, footer.
    pub fn blocks(&self) -> Vec<TextBlock> {
        let block = |kind, text: &str| TextBlock { kind, text: text.to_string() };
        let mut blocks = Vec::with_capacity(self.paragraphs.len() + 5);
        blocks.push(block(BlockKind::Subject, &self.subject));
        blocks.push(block(BlockKind::Salutation, &self.salutation));
        blocks.extend(self.paragraphs.iter().map(|p| block(BlockKind::Paragraph, p)));
        blocks.push(block(BlockKind::Closing, &self.closing));
        blocks.push(block(BlockKind::Signature, &self.signature));
        blocks.push(block(BlockKind::Footer, &self.footer));
        blocks
    }

    /// Plain-text rendering for simple surfaces.
    pub fn to_plain_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.sender.is_empty() {
            parts.push(self.sender.join("\n"));
        }
        if !self.recipient.is_empty() {
            parts.push(self.recipient.join("\n"));
        }
        parts.push(self.place_and_date.clone());
        parts.extend(self.blocks().into_iter().map(|b| b.text));
        parts.join("\n\n")
    }
}

/// Composes the request letter for a completed record.
pub fn compose_letter(
    record: &ContractRecord,
    result: &CalculationResult,
    date: NaiveDate,
) -> Result<Letter, LetterError> {
    Ok(LetterData::from_record(record, result, date)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{Outcome, RateTrend};
    use crate::model::Canton;

    fn result() -> CalculationResult {
        CalculationResult {
            is_reduction_possible: true,
            rate_trend: RateTrend::Fell,
            outcome: Outcome::Reduction,
            rate_differential: 0.5,
            interest_reduction_percent: 5.82,
            years_since_adjustment: 1.0,
            cost_increase_percent: 0.5,
            inflation_adjustment_percent: 1.52,
            effective_reduction_percent: 3.8,
            current_rent: 2400.0,
            new_rent: 2308.8,
            monthly_savings: 91.2,
            annual_savings: 1094.4,
            explanation: String::new(),
            breakdown: Vec::new(),
        }
    }

    fn record() -> ContractRecord {
        ContractRecord {
            reference_rate_at_contract: Some(1.75),
            current_reference_rate: Some(1.25),
            address: Some("Nordstrasse 9, 8006 Zürich".into()),
            tenant_name: Some("Max Muster".into()),
            landlord_name: Some("Muster Immobilien AG".into()),
            canton: Some(Canton::Zurich),
            ..Default::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_salutation_names_landlord() {
        let letter = compose_letter(&record(), &result(), date()).unwrap();
        assert_eq!(letter.salutation, "Sehr geehrte Damen und Herren der Muster Immobilien AG");
        assert_eq!(letter.recipient, vec!["Muster Immobilien AG".to_string()]);
    }

    #[test]
    fn test_generic_salutation_without_landlord() {
        let mut record = record();
        record.landlord_name = Some("  ".into());
        let letter = compose_letter(&record, &result(), date()).unwrap();
        assert_eq!(letter.salutation, "Sehr geehrte Damen und Herren");
        assert!(letter.recipient.is_empty());
    }

    #[test]
    fn test_block_sequence() {
        let letter = compose_letter(&record(), &result(), date()).unwrap();
        let kinds: Vec<_> = letter.blocks().iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Subject,
                BlockKind::Salutation,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::Closing,
                BlockKind::Signature,
                BlockKind::Footer,
            ]
        );
    }

    #[test]
    fn test_place_and_date_line_and_signature() {
        let letter = compose_letter(&record(), &result(), date()).unwrap();
        assert_eq!(letter.place_and_date, "8006 Zürich, 16. Oktober 2026");
        assert_eq!(letter.signature, "Max Muster");

        let text = letter.to_plain_text();
        assert!(text.contains("\n\n8006 Zürich, 16. Oktober 2026\n\n"));
        assert!(text.contains("Mit freundlichen Grüssen\n\nMax Muster\n\n"));
    }

    #[test]
    fn test_place_and_date_without_city_is_bare_date() {
        let record = ContractRecord {
            reference_rate_at_contract: Some(1.75),
            current_reference_rate: Some(1.25),
            ..Default::default()
        };
        let letter = compose_letter(&record, &result(), date()).unwrap();
        assert_eq!(letter.place_and_date, "16. Oktober 2026");
        assert_eq!(letter.signature, "Mieter");
    }

    #[test]
    fn test_body_substitutions() {
        let letter = compose_letter(&record(), &result(), date()).unwrap();
        assert!(letter.paragraphs[0].contains("Nordstrasse 9 mit einem aktuellen Nettomietzins von CHF 2'400.00"));
        assert!(letter.paragraphs[1].contains("von 1.75 % auf 1.25 %"));
        assert!(letter.paragraphs[2].contains("Reduktion von 3.80 %"));
        assert!(letter.paragraphs[2].contains("CHF 2'308.80"));
        assert!(letter.paragraphs[2].contains("CHF 91.20"));
        assert_eq!(letter.date, "16. Oktober 2026");
    }

    #[test]
    fn test_sender_derivation_and_fallbacks() {
        let record = ContractRecord {
            reference_rate_at_contract: Some(1.75),
            current_reference_rate: Some(1.25),
            address: Some("Seeweg 4".into()),
            canton: Some(Canton::Luzern),
            ..Default::default()
        };
        let data = LetterData::from_record(&record, &result(), date()).unwrap();
        assert_eq!(data.tenant.name, "Mieter");
        assert_eq!(data.tenant.street, "Seeweg 4");
        assert_eq!(data.tenant.city, "Luzern");
        assert_eq!(data.property_address, "Seeweg 4");
        assert_eq!(data.render().sender, vec!["Mieter", "Seeweg 4", "Luzern"]);
    }

    #[test]
    fn test_missing_rate_is_reported() {
        let mut record = record();
        record.current_reference_rate = None;
        assert_eq!(
            compose_letter(&record, &result(), date()),
            Err(LetterError::MissingField(ContractField::CurrentReferenceRate))
        );
    }

    #[test]
    fn test_plain_text_contains_all_blocks() {
        let letter = compose_letter(&record(), &result(), date()).unwrap();
        let text = letter.to_plain_text();
        assert!(text.starts_with("Max Muster\nNordstrasse 9\n8006 Zürich"));
        assert!(text.contains(SUBJECT));
        assert!(text.ends_with(FOOTER));
    }
}
