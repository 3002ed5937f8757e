//! Mortgage amortization.
//!
//! Computes the outstanding value of a mortgage at a reference date under a
//! linear or annuity schedule, net of manually recorded extra payoff. The
//! reference date is the first working day of the month after the injected
//! "as of" date, matching when payments are collected.

use chrono::{Datelike, NaiveDate};
use model::entities::mortgage::{self, AmortizationType};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, instrument, trace};

use crate::error::{ComputeError, Result};

/// The first Monday-Friday day of the month following `date`.
pub fn first_working_day_of_next_month(date: NaiveDate) -> Result<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    let mut day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ComputeError::Date(format!("Invalid date {year}-{month:02}-01")))?;
    while day.weekday().num_days_from_monday() >= 5 {
        day = day
            .succ_opt()
            .ok_or_else(|| ComputeError::Date(format!("Date overflow after {day}")))?;
    }
    Ok(day)
}

/// Elapsed years between two dates using a fixed 365.25-day year. This is
/// deliberately different from the literal day counting in the valuation
/// module and must not be unified with it.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    to.signed_duration_since(from).num_days() as f64 / 365.25
}

fn decimal_from_f64(value: f64) -> Result<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| ComputeError::Decimal(format!("Value {value} is not representable")))
}

fn to_f64(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| ComputeError::Decimal(format!("Value {value} does not fit in an f64")))
}

/// Outstanding principal under linear amortization: the remaining share of
/// the term times the start value.
fn linear_outstanding(m: &mortgage::Model, years_remaining: f64) -> Result<Decimal> {
    let start = to_f64(m.start_value)?;
    decimal_from_f64(start * years_remaining / m.term_years as f64)
}

/// Outstanding principal under annuity amortization, via the standard
/// fixed-payment and remaining-balance closed forms. A zero interest rate
/// degrades to the linear proportion, since the annuity formula would
/// otherwise divide by zero.
fn annuity_outstanding(
    m: &mortgage::Model,
    years_elapsed: f64,
    years_remaining: f64,
) -> Result<Decimal> {
    let monthly_rate = to_f64(m.current_interest_rate)? / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        trace!("Zero interest rate, degrading annuity to linear amortization");
        return linear_outstanding(m, years_remaining);
    }

    let principal = to_f64(m.start_value)?;
    let total_months = (m.term_years * 12) as f64;
    let months_elapsed = (years_elapsed * 12.0).floor();

    let growth_total = (1.0 + monthly_rate).powf(total_months);
    let payment = principal * (monthly_rate * growth_total) / (growth_total - 1.0);

    // Remaining balance after `months_elapsed` payments.
    let growth_elapsed = (1.0 + monthly_rate).powf(months_elapsed);
    let balance = principal * growth_elapsed - payment * (growth_elapsed - 1.0) / monthly_rate;

    decimal_from_f64(balance.max(0.0))
}

/// Computes the outstanding value of a mortgage as of the given date.
///
/// A paid-off mortgage is always 0; a manually entered current value is
/// returned verbatim and skips the schedule entirely. Otherwise the
/// scheduled amortization is evaluated at the first working day of the
/// month after `as_of`, reduced by the cumulative extra payoff, and
/// clamped at 0.
#[instrument(skip(m), fields(mortgage_id = m.id, kind = ?m.amortization_type))]
pub fn current_value(m: &mortgage::Model, as_of: NaiveDate) -> Result<Decimal> {
    if m.is_paid_off {
        trace!("Mortgage {} is paid off", m.id);
        return Ok(Decimal::ZERO);
    }
    if let Some(manual) = m.current_value {
        trace!("Mortgage {} has a manual current value {}", m.id, manual);
        return Ok(manual);
    }

    let reference_date = first_working_day_of_next_month(as_of)?;
    let years_elapsed = years_between(m.interest_start_date, reference_date);
    let years_remaining = (m.term_years as f64 - years_elapsed).max(0.0);
    if years_remaining <= 0.0 {
        debug!("Mortgage {} has run its full term", m.id);
        return Ok(Decimal::ZERO);
    }

    let amortized = match m.amortization_type {
        AmortizationType::Linear => linear_outstanding(m, years_remaining)?,
        AmortizationType::Annuity => annuity_outstanding(m, years_elapsed, years_remaining)?,
    };

    let value = (amortized - m.extra_paid_off).max(Decimal::ZERO);
    debug!("Mortgage {} outstanding value {} as of {}", m.id, value, reference_date);
    Ok(value)
}
