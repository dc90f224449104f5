//! Rent adjustment formulas under Art. 270a OR.
//!
//! Pure, stateless and total over their numeric domain. Bounds are enforced
//! by the validator before any of these run; the functions themselves never
//! fail.
use chrono::NaiveDate;

/// Reference-rate step the statutory reduction is quoted against (percentage points).
pub const RATE_STEP: f64 = 0.25;
/// Rent change per `RATE_STEP` of reference-rate movement (percent).
pub const REDUCTION_PER_STEP: f64 = 2.91;
/// Share of cumulative inflation the landlord may offset.
pub const CREDITABLE_INFLATION_SHARE: f64 = 0.4;
/// Year length used to convert elapsed days into years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Positive when the reference rate fell since signing.
#[inline]
pub fn rate_differential(old_rate: f64, current_rate: f64) -> f64 {
    old_rate - current_rate
}

/// Each `RATE_STEP` of rate decrease allows a `REDUCTION_PER_STEP` reduction.
#[inline]
pub fn interest_reduction_percent(differential: f64) -> f64 {
    (differential / RATE_STEP) * REDUCTION_PER_STEP
}

#[inline]
pub fn cost_increase_percent(years: f64, per_year_rate: f64) -> f64 {
    years * per_year_rate
}

#[inline]
pub fn inflation_adjustment_percent(total_inflation: f64) -> f64 {
    total_inflation * CREDITABLE_INFLATION_SHARE
}

/// Net change after offsetting cost and inflation. Negative means an
/// increase would be justified.
#[inline]
pub fn effective_reduction_percent(interest_pct: f64, cost_pct: f64, inflation_pct: f64) -> f64 {
    interest_pct - (cost_pct + inflation_pct)
}

#[inline]
pub fn new_rent(current_rent: f64, effective_reduction_pct: f64) -> f64 {
    current_rent * (1.0 - effective_reduction_pct / 100.0)
}

/// Elapsed time in fractional 365.25-day years, never negative.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    let days = (to - from).num_days() as f64;
    (days / DAYS_PER_YEAR).max(0.0)
}

/// Baseline for "years since adjustment".
pub fn last_adjustment_date(contract_date: NaiveDate, last_increase: Option<NaiveDate>) -> NaiveDate {
    last_increase.unwrap_or(contract_date)
}
