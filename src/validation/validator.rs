//! The central validator that orchestrates the execution of all validation rules.
use super::error::ValidationError;
use super::rules::{amounts, dates};
use crate::model::{ContractField, ContractRecord, ContractTerms};
use chrono::NaiveDate;

/// Turns a (possibly partial) record into checked `ContractTerms`.
///
/// Rules run in a fixed order: presence, finiteness, net rent, reference
/// rates, contract year, cost increase, last-increase date. `validate`
/// stops at the first failure; `validate_all` collects every failure so a
/// form can highlight all offending fields at once.
pub struct Validator<'a> {
    record: &'a ContractRecord,
    today: NaiveDate,
}

impl<'a> Validator<'a> {
    /// `today` fixes the upper contract-year bound.
    pub fn new(record: &'a ContractRecord, today: NaiveDate) -> Self {
        Self { record, today }
    }

    /// Fail-fast validation.
    pub fn validate(&self) -> Result<ContractTerms, ValidationError> {
        self.run(true).map_err(|mut errors| errors.remove(0))
    }

    /// Executes all rules and reports every violation.
    ///
    /// # Returns
    /// - `Ok(ContractTerms)` if the record is complete and in bounds.
    /// - `Err(Vec<ValidationError>)` containing all errors, in rule order.
    pub fn validate_all(&self) -> Result<ContractTerms, Vec<ValidationError>> {
        self.run(false)
    }

    fn run(&self, fail_fast: bool) -> Result<ContractTerms, Vec<ValidationError>> {
        let mut errors = Vec::new();
        macro_rules! check {
            ($rule:expr) => {
                if let Some(err) = $rule {
                    errors.push(err);
                    if fail_fast {
                        return Err(errors);
                    }
                }
            };
        }

        // 1. Presence.
        let r = self.record;
        let net_rent = self.required(ContractField::NetRent, r.net_rent, &mut errors);
        let old_rate = self.required(ContractField::ReferenceRateAtContract, r.reference_rate_at_contract, &mut errors);
        let current_rate = self.required(ContractField::CurrentReferenceRate, r.current_reference_rate, &mut errors);
        let contract_date = self.required(ContractField::ContractDate, r.contract_date, &mut errors);
        let inflation = self.required(ContractField::InflationSinceContract, r.inflation_since_contract, &mut errors);
        let cost = self.required(ContractField::CostIncreasePerYear, r.cost_increase_per_year, &mut errors);

        if fail_fast && !errors.is_empty() {
            errors.truncate(1);
            return Err(errors);
        }

        // 2. Finiteness.
        for (field, value) in [
            (ContractField::NetRent, net_rent),
            (ContractField::ReferenceRateAtContract, old_rate),
            (ContractField::CurrentReferenceRate, current_rate),
            (ContractField::InflationSinceContract, inflation),
            (ContractField::CostIncreasePerYear, cost),
        ] {
            if let Some(v) = value {
                check!(amounts::validate_finite(field, v));
            }
        }

        // 3. Bounds. Non-finite values were reported above and are skipped here.
        if let Some(v) = net_rent.filter(|v| v.is_finite()) {
            check!(amounts::validate_net_rent(v));
        }
        if let Some(v) = old_rate.filter(|v| v.is_finite()) {
            check!(amounts::validate_reference_rate(ContractField::ReferenceRateAtContract, v));
        }
        if let Some(v) = current_rate.filter(|v| v.is_finite()) {
            check!(amounts::validate_reference_rate(ContractField::CurrentReferenceRate, v));
        }
        if let Some(d) = contract_date {
            check!(dates::validate_contract_year(d, self.today));
        }
        if let Some(v) = cost.filter(|v| v.is_finite()) {
            check!(amounts::validate_cost_increase(v));
        }

        // 4. Last adjustment.
        let last_increase = match dates::resolve_last_increase(r.last_increase_date.as_deref()) {
            Ok(d) => d,
            Err(err) => {
                check!(Some(err));
                None
            }
        };

        match (net_rent, old_rate, current_rate, contract_date, inflation, cost) {
            (Some(net_rent), Some(old_rate), Some(current_rate), Some(contract_date), Some(inflation), Some(cost))
                if errors.is_empty() =>
            {
                Ok(ContractTerms {
                    net_rent,
                    reference_rate_at_contract: old_rate,
                    current_reference_rate: current_rate,
                    inflation_since_contract: inflation,
                    cost_increase_per_year: cost,
                    contract_date,
                    last_increase_date: last_increase,
                })
            }
            _ => Err(errors),
        }
    }

    fn required<T>(&self, field: ContractField, value: Option<T>, errors: &mut Vec<ValidationError>) -> Option<T> {
        if value.is_none() {
            errors.push(ValidationError::Missing { field });
        }
        value
    }
}
