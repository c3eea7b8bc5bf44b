//! Label assembly
//!
//! Turns a nutrient panel plus a format selection into the rows a renderer
//! prints. Column bases are scaled on the raw amounts and rounding happens
//! afterwards, so multi-column formats never compound rounding error.
//! Derived rows (EU salt, kilojoule energy) are computed here; everything
//! layout-shaped comes from the format's static tables.

use serde::{Deserialize, Serialize};

use crate::models::{Nutrient, NutrientPanel, NutrientValue, Nutrients, ServingInfo, Unit};
use crate::units;

use super::daily_values::CANADA_SAT_TRANS_DV_G;
use super::format::{ColumnBasis, DvTable, EnergyStyle, FormatSpec, LabelFormat, PercentSource, RowSpec};
use super::rounding::{finite_or_zero, percent_daily_value, round_nutrient_value};
use super::significance::is_insignificant;

/// Kilojoules per kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;

/// Grams of salt per milligram of sodium (salt = sodium x 2.5)
pub const SALT_G_PER_SODIUM_MG: f64 = 2.5 / 1000.0;

/// One rounded amount with its unit and optional percent column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelCell {
    /// Display string, already rounded per the regulatory table
    pub value: String,
    /// Unit suffix; empty when the value embeds its own units
    pub unit: String,
    /// Percent daily value / RDA, absent where the format declares none
    pub percent: Option<u32>,
}

/// One printed line of the label body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRow {
    pub nutrient: Nutrient,
    pub name: String,
    /// Nesting depth under the parent nutrient (0 = flush left)
    pub indent: u8,
    /// One cell per column, in heading order
    pub cells: Vec<LabelCell>,
}

/// A fully computed label, ready for a renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub format: LabelFormat,
    /// One heading per amount column
    pub headings: Vec<String>,
    pub serving: ServingInfo,
    pub rows: Vec<LabelRow>,
    /// Simplified-format footer: nutrients omitted as insignificant
    #[serde(default)]
    pub not_significant: Vec<String>,
}

/// One item of a variety pack and its share of the declared serving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateItem {
    pub name: String,
    /// Fraction of the per-serving amounts this item contributes
    pub fraction: f64,
}

/// An amount column resolved to concrete nutrient values
struct Column {
    nutrients: Nutrients,
    /// Per-100 columns never carry percentages, even where the format has
    /// a reference table (India reports %RDA per serve only)
    with_percent: bool,
}

/// Round one nutrient amount for a format
///
/// This is the single-nutrient entry point: rounding and unit come from the
/// nutrient, the percent reference from the format's DV table. Rows whose
/// percent needs more context (Canada's combined saturated + trans figure)
/// only appear through [`build_label`].
pub fn compute_display(nutrient: NutrientValue, format: LabelFormat) -> LabelCell {
    let spec = format.spec();
    let amount = finite_or_zero(nutrient.amount);
    let (value, unit) = format_amount(nutrient.nutrient, amount, spec.energy);
    let percent = spec
        .dv
        .reference(nutrient.nutrient)
        .map(|reference| percent_daily_value(amount, reference));
    LabelCell { value, unit, percent }
}

/// Build the full label for a panel in the given format
pub fn build_label(panel: &NutrientPanel, format: LabelFormat) -> Label {
    let spec = format.spec();
    let columns: Vec<Column> = spec
        .columns
        .iter()
        .map(|basis| resolve_column(panel, *basis))
        .collect();
    let headings = spec
        .columns
        .iter()
        .map(|basis| column_heading(*basis, &panel.serving))
        .collect();

    let (rows, not_significant) = assemble_rows(spec, &columns, &panel.nutrients);
    Label {
        format,
        headings,
        serving: panel.serving.clone(),
        rows,
        not_significant,
    }
}

/// Build a variety-pack label with one column per item
///
/// Each item's column is the per-serving panel scaled by that item's
/// fraction, scaled first and rounded after. Fractions are caller data
/// taken from the actual pack composition.
pub fn build_aggregate_label(panel: &NutrientPanel, items: &[AggregateItem]) -> Label {
    let spec = LabelFormat::UsAggregate.spec();
    let columns: Vec<Column> = items
        .iter()
        .map(|item| Column {
            nutrients: panel.nutrients.scale(finite_or_zero(item.fraction)),
            with_percent: true,
        })
        .collect();
    let headings = items.iter().map(|item| item.name.clone()).collect();

    let (rows, not_significant) = assemble_rows(spec, &columns, &panel.nutrients);
    Label {
        format: LabelFormat::UsAggregate,
        headings,
        serving: panel.serving.clone(),
        rows,
        not_significant,
    }
}

fn assemble_rows(
    spec: &FormatSpec,
    columns: &[Column],
    per_serving: &Nutrients,
) -> (Vec<LabelRow>, Vec<String>) {
    let mut rows = Vec::with_capacity(spec.rows.len());
    let mut not_significant = Vec::new();

    for row in spec.rows {
        // insignificance is judged on the raw per-serving amount
        if spec.simplified && is_insignificant(row.nutrient, per_serving.amount(row.nutrient)) {
            not_significant.push(row.name.to_string());
            continue;
        }
        let cells = columns
            .iter()
            .map(|column| make_cell(row, column, spec))
            .collect();
        rows.push(LabelRow {
            nutrient: row.nutrient,
            name: row.name.to_string(),
            indent: row.indent,
            cells,
        });
    }

    (rows, not_significant)
}

fn make_cell(row: &RowSpec, column: &Column, spec: &FormatSpec) -> LabelCell {
    let amount = row_amount(&column.nutrients, row.nutrient);
    let (value, unit) = format_amount(row.nutrient, amount, spec.energy);
    let percent = if column.with_percent {
        row_percent(row, &column.nutrients, spec.dv)
    } else {
        None
    };
    LabelCell { value, unit, percent }
}

/// Raw amount for a row, including derived nutrients
fn row_amount(nutrients: &Nutrients, nutrient: Nutrient) -> f64 {
    match nutrient {
        Nutrient::Salt => finite_or_zero(nutrients.sodium) * SALT_G_PER_SODIUM_MG,
        _ => finite_or_zero(nutrients.amount(nutrient)),
    }
}

fn row_percent(row: &RowSpec, nutrients: &Nutrients, dv: DvTable) -> Option<u32> {
    match row.percent {
        PercentSource::None => None,
        PercentSource::SatPlusTrans => {
            let combined =
                finite_or_zero(nutrients.saturated_fat) + finite_or_zero(nutrients.trans_fat);
            Some(percent_daily_value(combined, CANADA_SAT_TRANS_DV_G))
        }
        PercentSource::Table => dv
            .reference(row.nutrient)
            .map(|reference| percent_daily_value(row_amount(nutrients, row.nutrient), reference)),
    }
}

/// Display string and unit suffix for one amount
fn format_amount(nutrient: Nutrient, amount: f64, energy: EnergyStyle) -> (String, String) {
    if nutrient == Nutrient::Calories {
        let kcal = finite_or_zero(amount);
        return match energy {
            EnergyStyle::Kcal => (
                round_nutrient_value(kcal, Unit::Kcal),
                Unit::Kcal.suffix().to_string(),
            ),
            EnergyStyle::Kilojoules => (
                round_nutrient_value(kcal * KJ_PER_KCAL, Unit::Kcal),
                "kJ".to_string(),
            ),
            EnergyStyle::KilojoulesAndKcal => (
                format!(
                    "{} kJ / {} kcal",
                    round_nutrient_value(kcal * KJ_PER_KCAL, Unit::Kcal),
                    round_nutrient_value(kcal, Unit::Kcal)
                ),
                String::new(),
            ),
        };
    }
    let unit = nutrient.unit();
    (round_nutrient_value(amount, unit), unit.suffix().to_string())
}

fn resolve_column(panel: &NutrientPanel, basis: ColumnBasis) -> Column {
    match basis {
        ColumnBasis::PerServing => Column {
            nutrients: panel.nutrients.clone(),
            with_percent: true,
        },
        ColumnBasis::PerContainer => Column {
            nutrients: panel
                .nutrients
                .scale(finite_or_zero(panel.serving.servings_per_container)),
            with_percent: true,
        },
        ColumnBasis::PerHundred => Column {
            nutrients: per_hundred(panel),
            with_percent: false,
        },
    }
}

/// Per-100 amounts, based on the serving's gram weight where known,
/// otherwise its milliliter volume
fn per_hundred(panel: &NutrientPanel) -> Nutrients {
    match hundred_basis(&panel.serving) {
        Some((per_serving, _)) => panel.nutrients.scale(100.0 / per_serving),
        None => {
            tracing::warn!(
                "No gram or ml equivalent for serving '{} {}'. Using per-serving values for the per-100 column.",
                panel.serving.serving_size,
                panel.serving.serving_unit
            );
            panel.nutrients.clone()
        }
    }
}

fn hundred_basis(serving: &ServingInfo) -> Option<(f64, &'static str)> {
    if let Some(grams) = units::grams_per_serving(serving) {
        return Some((grams, "g"));
    }
    if let Some(ml) = units::ml_per_serving(serving) {
        return Some((ml, "ml"));
    }
    None
}

fn column_heading(basis: ColumnBasis, serving: &ServingInfo) -> String {
    match basis {
        ColumnBasis::PerServing => "Per serving".to_string(),
        ColumnBasis::PerContainer => "Per container".to_string(),
        ColumnBasis::PerHundred => {
            let suffix = hundred_basis(serving).map(|(_, s)| s).unwrap_or("g");
            format!("Per 100 {}", suffix)
        }
    }
}
