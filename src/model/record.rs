//! The contract record: the subject of every computation.
//!
//! A record arrives partially filled (from document extraction or a form),
//! gets completed by the dialog, and is finally checked by the validator
//! before the engine runs. Every field is therefore optional at this level.
use super::canton::{Canton, Goal};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractRecord {
    // --- Calculation inputs ---
    /// Current monthly net rent in CHF.
    pub net_rent: Option<f64>,
    /// Reference rate in force when the contract was signed (percent).
    #[serde(alias = "reference_rate_contract")]
    pub reference_rate_at_contract: Option<f64>,
    #[serde(alias = "current_reference_rate")]
    pub current_reference_rate: Option<f64>,
    /// Cumulative consumer-price inflation since signing (percent).
    #[serde(alias = "inflation_since_contract")]
    pub inflation_since_contract: Option<f64>,
    /// Estimated general cost increase per year (percent, 0..=10).
    #[serde(alias = "cost_increase_per_year")]
    pub cost_increase_per_year: Option<f64>,
    #[serde(alias = "contract_date")]
    pub contract_date: Option<NaiveDate>,
    /// Free text as entered; `None` means no adjustment since signing.
    #[serde(alias = "last_increase")]
    pub last_increase_date: Option<String>,

    // --- Dialog fields ---
    #[serde(alias = "kanton", deserialize_with = "lenient_canton")]
    pub canton: Option<Canton>,
    #[serde(alias = "gross_rent")]
    pub gross_rent: Option<f64>,
    #[serde(alias = "ziel")]
    pub goal: Option<Goal>,
    #[serde(alias = "improvements")]
    pub improvements_made: Option<bool>,

    // --- Letter-only fields ---
    /// Tenant address, "street, zip city".
    pub address: Option<String>,
    #[serde(alias = "name")]
    pub tenant_name: Option<String>,
    /// Landlord or property management company.
    #[serde(alias = "management")]
    pub landlord_name: Option<String>,
    pub landlord_address: Option<String>,
    #[serde(alias = "property_address")]
    pub property_address: Option<String>,
}

impl ContractRecord {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Extracted documents frequently carry a blank or misspelled canton. Those
/// become `None` so the dialog asks for the canton instead of rejecting the
/// whole record.
fn lenient_canton<'de, D>(deserializer: D) -> Result<Option<Canton>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| Canton::from_label(s.trim())))
}

/// Identifies a record field in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractField {
    NetRent,
    ReferenceRateAtContract,
    CurrentReferenceRate,
    InflationSinceContract,
    CostIncreasePerYear,
    ContractDate,
    LastIncreaseDate,
    Canton,
    Address,
}

impl ContractField {
    /// German field label as shown to the tenant.
    pub fn label(&self) -> &'static str {
        match self {
            ContractField::NetRent => "Nettomiete",
            ContractField::ReferenceRateAtContract => "Referenzzinssatz bei Vertragsabschluss",
            ContractField::CurrentReferenceRate => "Aktueller Referenzzinssatz",
            ContractField::InflationSinceContract => "Teuerung seit Vertragsabschluss",
            ContractField::CostIncreasePerYear => "Kostensteigerung pro Jahr",
            ContractField::ContractDate => "Vertragsdatum",
            ContractField::LastIncreaseDate => "Datum der letzten Mietzinsanpassung",
            ContractField::Canton => "Kanton",
            ContractField::Address => "Adresse",
        }
    }
}

impl fmt::Display for ContractField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_snake_case_extraction_payload() {
        let json = r#"{
            "net_rent": 2400,
            "reference_rate_contract": 1.75,
            "contract_date": "2019-10-01",
            "address": "Nordstrasse 9, 8006 Zürich",
            "kanton": "Zürich",
            "last_increase": null,
            "improvements": false,
            "current_reference_rate": 1.25,
            "inflation_since_contract": 3.8,
            "cost_increase_per_year": 0.5,
            "management": "Muster Immobilien AG"
        }"#;
        let record = ContractRecord::from_json_str(json).unwrap();
        assert_eq!(record.net_rent, Some(2400.0));
        assert_eq!(record.reference_rate_at_contract, Some(1.75));
        assert_eq!(record.contract_date, NaiveDate::from_ymd_opt(2019, 10, 1));
        assert_eq!(record.canton, Some(Canton::Zurich));
        assert_eq!(record.improvements_made, Some(false));
        assert_eq!(record.landlord_name.as_deref(), Some("Muster Immobilien AG"));
        assert_eq!(record.last_increase_date, None);
        assert_eq!(record.goal, None);
    }

    #[test]
    fn test_blank_or_unknown_canton_becomes_none() {
        let record = ContractRecord::from_json_str(r#"{"canton": "  "}"#).unwrap();
        assert_eq!(record.canton, None);
        let record = ContractRecord::from_json_str(r#"{"canton": "Atlantis"}"#).unwrap();
        assert_eq!(record.canton, None);
        let record = ContractRecord::from_json_str(r#"{"canton": " Genf "}"#).unwrap();
        assert_eq!(record.canton, Some(Canton::Genf));
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = ContractRecord { net_rent: Some(1800.0), canton: Some(Canton::Bern), ..Default::default() };
        let value: serde_json::Value = serde_json::from_str(&record.to_json_string().unwrap()).unwrap();
        assert_eq!(value["netRent"], 1800.0);
        assert_eq!(value["canton"], "Bern");
    }
}
