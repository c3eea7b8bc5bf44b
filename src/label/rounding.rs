//! Regulatory rounding rules
//!
//! Implements the FDA 21 CFR 101.9 increments used to turn raw nutrient
//! amounts into the values printed on a facts panel:
//!
//! - grams: below 0.5 -> one decimal place, otherwise nearest whole gram
//! - milligrams: below 5 -> nearest 1, 5 to below 50 -> nearest 5,
//!   otherwise nearest 10
//! - micrograms: below 10 -> nearest 1, 10 to below 50 -> nearest 5,
//!   otherwise nearest 10
//! - energy: nearest whole value
//!
//! The same table serves every label format; formats differ in which
//! nutrients they show and how percentages are referenced, not in how
//! amounts round.

use crate::models::Unit;

/// Coerce NaN/infinity to 0
///
/// Upstream forms are supposed to reject non-numeric entry, but nothing in
/// this crate relies on that.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round to the nearest multiple of `step`
fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Round a raw amount to its regulatory display string
///
/// The boundary at each break is inclusive on the upper rule: exactly 0.5 g
/// rounds as a whole gram, exactly 5 mg steps by 5, exactly 50 mg steps
/// by 10.
pub fn round_nutrient_value(value: f64, unit: Unit) -> String {
    let v = finite_or_zero(value);
    match unit {
        Unit::G => {
            if v < 0.5 {
                format!("{:.1}", v)
            } else {
                format!("{}", v.round() as i64)
            }
        }
        Unit::Mg => {
            let rounded = if v < 5.0 {
                v.round()
            } else if v < 50.0 {
                round_to_step(v, 5.0)
            } else {
                round_to_step(v, 10.0)
            };
            format!("{}", rounded as i64)
        }
        Unit::Mcg => {
            let rounded = if v < 10.0 {
                v.round()
            } else if v < 50.0 {
                round_to_step(v, 5.0)
            } else {
                round_to_step(v, 10.0)
            };
            format!("{}", rounded as i64)
        }
        Unit::Kcal => format!("{}", v.round() as i64),
    }
}

/// Percent of a daily reference, rounded to the nearest whole percent
///
/// A zero or non-finite reference yields 0. Values above the reference are
/// reported as computed, never clamped to 100.
pub fn percent_daily_value(value: f64, reference: f64) -> u32 {
    if !reference.is_finite() || reference <= 0.0 {
        return 0;
    }
    let v = finite_or_zero(value);
    ((v / reference) * 100.0).round() as u32
}
