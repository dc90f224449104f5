//! A synchronous, single-threaded calculation engine.
use crate::compute::formulas;
use crate::compute::result::{CalculationError, CalculationResult, Outcome, RateTrend};
use crate::config::EngineConfig;
use crate::display::narrative::{self, Figures};
use crate::model::{ContractRecord, ContractTerms};
use crate::validation::Validator;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Runs the Art. 270a OR pipeline over a contract record.
#[derive(Debug, Clone, Default)]
pub struct CalculationEngine {
    config: EngineConfig,
}

impl CalculationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates the record and computes the result.
    ///
    /// This is the only way to a result: the pipeline never sees a record
    /// that failed validation. Fails with the first violated plausibility rule. Identical input and
    /// configuration always give an identical outcome.
    pub fn calculate(&self, record: &ContractRecord) -> Result<CalculationResult, CalculationError> {
        let today = self.config.today();

        // 1. Validate.
        let terms = Validator::new(record, today).validate().map_err(|err| {
            warn!(field = %err.field(), error = %err, "Calculation input rejected");
            CalculationError::from(err)
        })?;

        Ok(self.run(&terms, today))
    }

    /// The pipeline proper, over already-validated terms. `today` is the
    /// same date the validator checked the contract year against.
    fn run(&self, terms: &ContractTerms, today: NaiveDate) -> CalculationResult {
        let tolerance = self.config.zero_tolerance;

        // 2-3. Reference-rate component.
        let rate_differential =
            formulas::rate_differential(terms.reference_rate_at_contract, terms.current_reference_rate);
        let interest_reduction_percent = formulas::interest_reduction_percent(rate_differential);

        // 4-6. Cost component since the last adjustment.
        let baseline = formulas::last_adjustment_date(terms.contract_date, terms.last_increase_date);
        let years_since_adjustment = formulas::years_between(baseline, today);
        let cost_increase_percent =
            formulas::cost_increase_percent(years_since_adjustment, terms.cost_increase_per_year);
        debug!(
            %baseline,
            years = years_since_adjustment,
            cost_pct = cost_increase_percent,
            "Cost increase since last adjustment"
        );

        // 7. Inflation component.
        let inflation_adjustment_percent =
            formulas::inflation_adjustment_percent(terms.inflation_since_contract);

        // 8. Net effect.
        let effective_reduction_percent = formulas::effective_reduction_percent(
            interest_reduction_percent,
            cost_increase_percent,
            inflation_adjustment_percent,
        );

        // 9. Rent figures.
        let new_rent = formulas::new_rent(terms.net_rent, effective_reduction_percent);
        let monthly_savings = terms.net_rent - new_rent;
        let annual_savings = monthly_savings * 12.0;

        let rate_trend = RateTrend::classify(rate_differential, tolerance);
        let outcome = Outcome::classify(effective_reduction_percent, tolerance);

        let figures = Figures {
            original_rate: terms.reference_rate_at_contract,
            current_rate: terms.current_reference_rate,
            rate_differential,
            interest_reduction_percent,
            years_since_adjustment,
            cost_increase_percent,
            inflation_adjustment_percent,
            effective_reduction_percent,
            current_rent: terms.net_rent,
            new_rent,
            monthly_savings,
            annual_savings,
            rate_trend,
            outcome,
        };

        // 10-11. Breakdown and narrative.
        let breakdown = narrative::breakdown(&figures);
        let explanation = narrative::explain(&figures);

        info!(
            effective_pct = effective_reduction_percent,
            new_rent,
            outcome = ?outcome,
            "Rent calculation complete"
        );

        CalculationResult {
            is_reduction_possible: outcome == Outcome::Reduction,
            rate_trend,
            outcome,
            rate_differential,
            interest_reduction_percent,
            years_since_adjustment,
            cost_increase_percent,
            inflation_adjustment_percent,
            effective_reduction_percent,
            current_rent: terms.net_rent,
            new_rent,
            monthly_savings,
            annual_savings,
            explanation,
            breakdown,
        }
    }
}
