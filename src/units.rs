//! Measurement units and conversions
//!
//! Serving sizes arrive as free-text units ("cup", "tbsp (20g)", "2 slices"),
//! and per-100 label columns and recipe math both need them in grams or
//! milliliters. This module recognizes household and metric units, parses
//! parenthetical weight annotations, and converts quantities where a factor
//! exists.

use crate::models::ServingInfo;

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Mass units with a fixed gram factor
    Weight,
    /// Volume units with a fixed milliliter factor
    Volume,
    /// Discrete counts with no inherent weight
    Count,
    /// Anything else; needs an annotation to convert (scoop, slice, patty)
    Custom,
}

/// A parenthetical measure attached to a unit, as in "tbsp (20g)"
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Annotation {
    Grams(f64),
    Milliliters(f64),
}

/// A unit string split into its base unit and optional annotation
#[derive(Debug, Clone)]
pub struct ParsedUnit {
    pub base_unit: String,
    pub annotation: Option<Annotation>,
    pub category: UnitCategory,
}

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 4.92892;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 14.7868;
/// Milliliters per fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per pint (US)
pub const ML_PER_PINT: f64 = 473.176;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.41;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

// ============================================================================
// Unit Recognition
// ============================================================================

/// Gram factor for a weight unit, `None` for anything else
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    match unit.to_lowercase().trim() {
        "g" | "gram" | "grams" => Some(1.0),
        "mg" | "milligram" | "milligrams" => Some(G_PER_MG),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "oz" | "ounce" | "ounces" => Some(G_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

/// Milliliter factor for a volume unit, `None` for anything else
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    match unit.to_lowercase().trim() {
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(1.0),
        "l" | "liter" | "liters" | "litre" | "litres" => Some(ML_PER_LITER),
        "tsp" | "teaspoon" | "teaspoons" => Some(ML_PER_TSP),
        "tbsp" | "tablespoon" | "tablespoons" => Some(ML_PER_TBSP),
        "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => Some(ML_PER_FL_OZ),
        "cup" | "cups" => Some(ML_PER_CUP),
        "pint" | "pints" => Some(ML_PER_PINT),
        "quart" | "quarts" => Some(ML_PER_QUART),
        "gallon" | "gallons" => Some(ML_PER_GALLON),
        _ => None,
    }
}

/// Determine the category of a unit string
pub fn categorize_unit(unit: &str) -> UnitCategory {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    if grams_per_unit(trimmed).is_some() {
        UnitCategory::Weight
    } else if ml_per_unit(trimmed).is_some() {
        UnitCategory::Volume
    } else if matches!(
        trimmed,
        "each" | "piece" | "pieces" | "item" | "items" | "count" | "unit" | "units"
    ) {
        UnitCategory::Count
    } else {
        UnitCategory::Custom
    }
}

/// Split a unit string into base unit and annotation
///
/// "tbsp (20g)" parses as base "tbsp" with 20 grams; "cup (240ml)" as base
/// "cup" with 240 ml; a bare "slice" has no annotation and categorizes as
/// custom.
pub fn parse_unit(unit_str: &str) -> ParsedUnit {
    let trimmed = unit_str.trim();

    if let (Some(open), Some(close)) = (trimmed.find('('), trimmed.find(')')) {
        if open < close {
            let base_unit = trimmed[..open].trim().to_lowercase();
            let annotation = parse_annotation(&trimmed[open + 1..close]);
            let category = categorize_unit(&base_unit);
            return ParsedUnit {
                base_unit,
                annotation,
                category,
            };
        }
    }

    let base_unit = trimmed.to_lowercase();
    let category = categorize_unit(&base_unit);
    ParsedUnit {
        base_unit,
        annotation: None,
        category,
    }
}

/// Read "20g", "20 grams", or "240 ml" inside an annotation
fn parse_annotation(s: &str) -> Option<Annotation> {
    let lower = s.to_lowercase();
    let trimmed = lower.trim();

    let split_at = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
        .map(|(i, _)| i)?;
    let amount: f64 = trimmed[..split_at].trim().parse().ok()?;

    match trimmed[split_at..].trim() {
        "g" | "gram" | "grams" => Some(Annotation::Grams(amount)),
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
            Some(Annotation::Milliliters(amount))
        }
        _ => None,
    }
}

/// Convert a quantity in the given unit to grams
///
/// A gram annotation on the unit wins over the base unit's factor. Returns
/// `None` when neither gives a weight (plain volumes, counts, custom units).
pub fn to_grams(quantity: f64, unit: &str) -> Option<f64> {
    let parsed = parse_unit(unit);
    if let Some(Annotation::Grams(per)) = parsed.annotation {
        return Some(quantity * per);
    }
    grams_per_unit(&parsed.base_unit).map(|factor| quantity * factor)
}

/// Convert a quantity in the given unit to milliliters
pub fn to_ml(quantity: f64, unit: &str) -> Option<f64> {
    let parsed = parse_unit(unit);
    if let Some(Annotation::Milliliters(per)) = parsed.annotation {
        return Some(quantity * per);
    }
    ml_per_unit(&parsed.base_unit).map(|factor| quantity * factor)
}

/// Gram weight of one declared serving
///
/// A declared net weight ("2/3 cup (55g)" declares 55) wins; otherwise the
/// serving size and unit are converted. `None` when neither gives a
/// positive finite weight.
pub fn grams_per_serving(serving: &ServingInfo) -> Option<f64> {
    if let Some(grams) = serving.serving_weight_g {
        if grams.is_finite() && grams > 0.0 {
            return Some(grams);
        }
    }
    to_grams(serving.serving_size, &serving.serving_unit).filter(|g| g.is_finite() && *g > 0.0)
}

/// Milliliter volume of one declared serving
pub fn ml_per_serving(serving: &ServingInfo) -> Option<f64> {
    to_ml(serving.serving_size, &serving.serving_unit).filter(|ml| ml.is_finite() && *ml > 0.0)
}
