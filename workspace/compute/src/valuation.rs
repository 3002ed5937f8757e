//! Property valuation estimation.
//!
//! A property owns a series of dated point-in-time valuations. The current
//! value at an arbitrary reference date is estimated by linear interpolation
//! between the bracketing valuations, or by linear extrapolation of the last
//! observed growth rate when the reference date lies past the series.

use chrono::NaiveDate;
use model::entities::{property, property_valuation};
use rust_decimal::Decimal;
use tracing::{debug, trace};

/// Literal day difference between two dates. Valuation growth rates use
/// actual day counts, unlike mortgage elapsed time which uses 365.25-day
/// years; the two are intentionally kept separate.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Estimates a property's value at `reference_date` from its valuations.
///
/// Returns `None` when there are no valuations at all; the caller falls
/// back to the purchase value (see [`property_value`]). A single valuation
/// is returned regardless of its date. With two or more:
///
/// - at or before the earliest valuation, the earliest value is returned
///   (no backward extrapolation);
/// - past the latest valuation, the per-day growth of the last two entries
///   is projected forward linearly;
/// - between two valuations, the value is interpolated linearly by day
///   ratio.
///
/// Degenerate spans (two entries on the same date) fall back to the nearest
/// known value instead of dividing by zero.
pub fn estimate_value(
    valuations: &[property_valuation::Model],
    reference_date: NaiveDate,
) -> Option<Decimal> {
    if valuations.is_empty() {
        return None;
    }

    let mut sorted: Vec<&property_valuation::Model> = valuations.iter().collect();
    sorted.sort_by_key(|v| v.valuation_date);

    if sorted.len() == 1 {
        trace!("Single valuation, returning it regardless of date");
        return Some(sorted[0].value);
    }

    let earliest = sorted[0];
    if reference_date <= earliest.valuation_date {
        return Some(earliest.value);
    }

    // Scan ascending, tracking the last entry at or before the reference
    // date and the first entry strictly after it.
    let mut before = earliest;
    let mut after: Option<&property_valuation::Model> = None;
    for valuation in &sorted {
        if valuation.valuation_date <= reference_date {
            before = valuation;
        } else {
            after = Some(valuation);
            break;
        }
    }

    match after {
        None => {
            // Reference date lies past the series: extrapolate the growth
            // implied by the last two entries.
            let last = sorted[sorted.len() - 1];
            let second_last = sorted[sorted.len() - 2];
            let span = days_between(second_last.valuation_date, last.valuation_date);
            if span == 0 {
                return Some(last.value);
            }
            let per_day = (last.value - second_last.value) / Decimal::from(span);
            let ahead = days_between(last.valuation_date, reference_date);
            let estimate = last.value + per_day * Decimal::from(ahead);
            debug!("Extrapolated value {} ({} days past the last valuation)", estimate, ahead);
            Some(estimate)
        }
        Some(after) => {
            let span = days_between(before.valuation_date, after.valuation_date);
            if span == 0 {
                return Some(before.value);
            }
            let ratio =
                Decimal::from(days_between(before.valuation_date, reference_date)) / Decimal::from(span);
            let estimate = before.value + (after.value - before.value) * ratio;
            debug!("Interpolated value {} (ratio {})", estimate, ratio);
            Some(estimate)
        }
    }
}

/// A property's estimated value at the reference date, falling back to its
/// purchase value when no valuations have been recorded.
pub fn property_value(
    property: &property::Model,
    valuations: &[property_valuation::Model],
    reference_date: NaiveDate,
) -> Decimal {
    estimate_value(valuations, reference_date).unwrap_or(property.purchase_value)
}
