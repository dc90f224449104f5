use chrono::NaiveDate;
use serde::Serialize;

/// The calculation inputs of a record after presence and bounds checks.
///
/// Only the validator constructs this, so holding one means every figure is
/// present and inside its legal bounds. Fields are read through getters.
///
/// ```compile_fail
/// use chrono::NaiveDate;
/// use mietzins_core::ContractTerms;
///
/// let _ = ContractTerms {
///     net_rent: 0.0,
///     reference_rate_at_contract: -3.0,
///     current_reference_rate: 1.25,
///     inflation_since_contract: 0.0,
///     cost_increase_per_year: 55.0,
///     contract_date: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
///     last_increase_date: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTerms {
    pub(crate) net_rent: f64,
    pub(crate) reference_rate_at_contract: f64,
    pub(crate) current_reference_rate: f64,
    pub(crate) inflation_since_contract: f64,
    pub(crate) cost_increase_per_year: f64,
    pub(crate) contract_date: NaiveDate,
    /// Parsed last adjustment; `None` when the rent was never adjusted.
    pub(crate) last_increase_date: Option<NaiveDate>,
}

impl ContractTerms {
    pub fn net_rent(&self) -> f64 {
        self.net_rent
    }

    pub fn reference_rate_at_contract(&self) -> f64 {
        self.reference_rate_at_contract
    }

    pub fn current_reference_rate(&self) -> f64 {
        self.current_reference_rate
    }

    pub fn inflation_since_contract(&self) -> f64 {
        self.inflation_since_contract
    }

    pub fn cost_increase_per_year(&self) -> f64 {
        self.cost_increase_per_year
    }

    pub fn contract_date(&self) -> NaiveDate {
        self.contract_date
    }

    pub fn last_increase_date(&self) -> Option<NaiveDate> {
        self.last_increase_date
    }
}
