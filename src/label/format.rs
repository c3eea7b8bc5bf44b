//! Label format catalog
//!
//! Each label format fixes a nutrient subset, a daily-value table, a column
//! scheme, and a row layout. All of that is static configuration resolved
//! once through [`LabelFormat::spec`]; the builder never branches on the
//! format beyond what these tables encode.

use serde::{Deserialize, Serialize};

use crate::models::Nutrient;

use super::daily_values::{canada_daily_value, india_rda, us_daily_value};

/// A jurisdiction- or layout-specific label variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelFormat {
    UsStandard,
    UsSimplified,
    UsDualColumn,
    UsLinear,
    UsTabular,
    UsVerticalCondensed,
    UsBilingual,
    UsAggregate,
    Eu,
    Canada,
    Australia,
    India,
}

impl LabelFormat {
    /// Every supported format, for CLI listings and exhaustive tests
    pub const ALL: [LabelFormat; 12] = [
        LabelFormat::UsStandard,
        LabelFormat::UsSimplified,
        LabelFormat::UsDualColumn,
        LabelFormat::UsLinear,
        LabelFormat::UsTabular,
        LabelFormat::UsVerticalCondensed,
        LabelFormat::UsBilingual,
        LabelFormat::UsAggregate,
        LabelFormat::Eu,
        LabelFormat::Canada,
        LabelFormat::Australia,
        LabelFormat::India,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelFormat::UsStandard => "us-standard",
            LabelFormat::UsSimplified => "us-simplified",
            LabelFormat::UsDualColumn => "us-dual-column",
            LabelFormat::UsLinear => "us-linear",
            LabelFormat::UsTabular => "us-tabular",
            LabelFormat::UsVerticalCondensed => "us-vertical-condensed",
            LabelFormat::UsBilingual => "us-bilingual",
            LabelFormat::UsAggregate => "us-aggregate",
            LabelFormat::Eu => "eu",
            LabelFormat::Canada => "canada",
            LabelFormat::Australia => "australia",
            LabelFormat::India => "india",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "us-standard" => Some(LabelFormat::UsStandard),
            "us-simplified" => Some(LabelFormat::UsSimplified),
            "us-dual-column" => Some(LabelFormat::UsDualColumn),
            "us-linear" => Some(LabelFormat::UsLinear),
            "us-tabular" => Some(LabelFormat::UsTabular),
            "us-vertical-condensed" => Some(LabelFormat::UsVerticalCondensed),
            "us-bilingual" => Some(LabelFormat::UsBilingual),
            "us-aggregate" => Some(LabelFormat::UsAggregate),
            "eu" => Some(LabelFormat::Eu),
            "canada" => Some(LabelFormat::Canada),
            "australia" => Some(LabelFormat::Australia),
            "india" => Some(LabelFormat::India),
            _ => None,
        }
    }

    /// The static configuration this format renders from
    pub fn spec(&self) -> &'static FormatSpec {
        match self {
            LabelFormat::UsStandard => &US_STANDARD,
            LabelFormat::UsSimplified => &US_SIMPLIFIED,
            LabelFormat::UsDualColumn => &US_DUAL_COLUMN,
            LabelFormat::UsLinear => &US_LINEAR,
            LabelFormat::UsTabular => &US_TABULAR,
            LabelFormat::UsVerticalCondensed => &US_VERTICAL_CONDENSED,
            LabelFormat::UsBilingual => &US_BILINGUAL,
            LabelFormat::UsAggregate => &US_AGGREGATE,
            LabelFormat::Eu => &EU,
            LabelFormat::Canada => &CANADA,
            LabelFormat::Australia => &AUSTRALIA,
            LabelFormat::India => &INDIA,
        }
    }
}

/// What a single amount column is computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnBasis {
    /// One declared serving
    PerServing,
    /// The whole package (serving x servings per container)
    PerContainer,
    /// 100 g or 100 ml of the food
    PerHundred,
}

/// How the energy row is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyStyle {
    /// Calories (kcal), the bare number
    Kcal,
    /// Kilojoules only
    Kilojoules,
    /// "X kJ / Y kcal" on one line
    KilojoulesAndKcal,
}

/// Which reference table backs the percent column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DvTable {
    Us,
    Canada,
    IndiaRda,
    /// Format shows no percentages at all
    None,
}

impl DvTable {
    /// Reference amount for a nutrient, in the nutrient's own unit
    pub fn reference(&self, nutrient: Nutrient) -> Option<f64> {
        match self {
            DvTable::Us => us_daily_value(nutrient),
            DvTable::Canada => canada_daily_value(nutrient),
            DvTable::IndiaRda => india_rda(nutrient),
            DvTable::None => None,
        }
    }
}

/// Where a row's percent figure comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentSource {
    /// Look this row's nutrient up in the format's DV table
    Table,
    /// Canada's combined saturated + trans reference, shown on the
    /// saturated line
    SatPlusTrans,
    /// Row never carries a percent
    None,
}

/// One line of the label body
#[derive(Debug, Clone, Copy)]
pub struct RowSpec {
    pub nutrient: Nutrient,
    /// Printed name, bilingual pairs baked in where the format requires them
    pub name: &'static str,
    /// Nesting depth under the parent nutrient (0 = flush left)
    pub indent: u8,
    pub percent: PercentSource,
}

const fn row(nutrient: Nutrient, name: &'static str, indent: u8, percent: PercentSource) -> RowSpec {
    RowSpec {
        nutrient,
        name,
        indent,
        percent,
    }
}

/// Full static configuration for one label format
#[derive(Debug, Clone, Copy)]
pub struct FormatSpec {
    pub columns: &'static [ColumnBasis],
    pub dv: DvTable,
    pub energy: EnergyStyle,
    pub rows: &'static [RowSpec],
    /// Insignificant nutrients drop to a footer instead of the body
    pub simplified: bool,
}

// ============================================================================
// Row templates
// ============================================================================

/// FDA 2016 vertical label rows, shared by every monolingual US variant
static US_ROWS: [RowSpec; 15] = [
    row(Nutrient::Calories, "Calories", 0, PercentSource::None),
    row(Nutrient::TotalFat, "Total Fat", 0, PercentSource::Table),
    row(Nutrient::SaturatedFat, "Saturated Fat", 1, PercentSource::Table),
    row(Nutrient::TransFat, "Trans Fat", 1, PercentSource::Table),
    row(Nutrient::Cholesterol, "Cholesterol", 0, PercentSource::Table),
    row(Nutrient::Sodium, "Sodium", 0, PercentSource::Table),
    row(
        Nutrient::TotalCarbohydrate,
        "Total Carbohydrate",
        0,
        PercentSource::Table,
    ),
    row(Nutrient::DietaryFiber, "Dietary Fiber", 1, PercentSource::Table),
    row(Nutrient::TotalSugars, "Total Sugars", 1, PercentSource::Table),
    row(Nutrient::AddedSugars, "Added Sugars", 2, PercentSource::Table),
    row(Nutrient::Protein, "Protein", 0, PercentSource::Table),
    row(Nutrient::VitaminD, "Vitamin D", 0, PercentSource::Table),
    row(Nutrient::Calcium, "Calcium", 0, PercentSource::Table),
    row(Nutrient::Iron, "Iron", 0, PercentSource::Table),
    row(Nutrient::Potassium, "Potassium", 0, PercentSource::Table),
];

static US_BILINGUAL_ROWS: [RowSpec; 15] = [
    row(Nutrient::Calories, "Calories / Calorías", 0, PercentSource::None),
    row(
        Nutrient::TotalFat,
        "Total Fat / Grasa Total",
        0,
        PercentSource::Table,
    ),
    row(
        Nutrient::SaturatedFat,
        "Saturated Fat / Grasa Saturada",
        1,
        PercentSource::Table,
    ),
    row(
        Nutrient::TransFat,
        "Trans Fat / Grasa Trans",
        1,
        PercentSource::Table,
    ),
    row(
        Nutrient::Cholesterol,
        "Cholesterol / Colesterol",
        0,
        PercentSource::Table,
    ),
    row(Nutrient::Sodium, "Sodium / Sodio", 0, PercentSource::Table),
    row(
        Nutrient::TotalCarbohydrate,
        "Total Carbohydrate / Carbohidrato Total",
        0,
        PercentSource::Table,
    ),
    row(
        Nutrient::DietaryFiber,
        "Dietary Fiber / Fibra Dietética",
        1,
        PercentSource::Table,
    ),
    row(
        Nutrient::TotalSugars,
        "Total Sugars / Azúcares Totales",
        1,
        PercentSource::Table,
    ),
    row(
        Nutrient::AddedSugars,
        "Added Sugars / Azúcares Añadidos",
        2,
        PercentSource::Table,
    ),
    row(Nutrient::Protein, "Protein / Proteínas", 0, PercentSource::Table),
    row(
        Nutrient::VitaminD,
        "Vitamin D / Vitamina D",
        0,
        PercentSource::Table,
    ),
    row(Nutrient::Calcium, "Calcium / Calcio", 0, PercentSource::Table),
    row(Nutrient::Iron, "Iron / Hierro", 0, PercentSource::Table),
    row(
        Nutrient::Potassium,
        "Potassium / Potasio",
        0,
        PercentSource::Table,
    ),
];

/// Canadian NFt rows; the combined saturated/trans %DV sits on the
/// saturated line
static CANADA_ROWS: [RowSpec; 13] = [
    row(Nutrient::Calories, "Calories", 0, PercentSource::None),
    row(Nutrient::TotalFat, "Fat / Lipides", 0, PercentSource::Table),
    row(
        Nutrient::SaturatedFat,
        "Saturated / saturés",
        1,
        PercentSource::SatPlusTrans,
    ),
    row(Nutrient::TransFat, "+ Trans / trans", 1, PercentSource::None),
    row(
        Nutrient::TotalCarbohydrate,
        "Carbohydrate / Glucides",
        0,
        PercentSource::Table,
    ),
    row(Nutrient::DietaryFiber, "Fibre / Fibres", 1, PercentSource::Table),
    row(Nutrient::TotalSugars, "Sugars / Sucres", 1, PercentSource::Table),
    row(Nutrient::Protein, "Protein / Protéines", 0, PercentSource::Table),
    row(
        Nutrient::Cholesterol,
        "Cholesterol / Cholestérol",
        0,
        PercentSource::Table,
    ),
    row(Nutrient::Sodium, "Sodium", 0, PercentSource::Table),
    row(Nutrient::Potassium, "Potassium", 0, PercentSource::Table),
    row(Nutrient::Calcium, "Calcium", 0, PercentSource::Table),
    row(Nutrient::Iron, "Iron / Fer", 0, PercentSource::Table),
];

/// EU mandatory seven-line declaration; salt is derived from sodium
static EU_ROWS: [RowSpec; 7] = [
    row(Nutrient::Calories, "Energy", 0, PercentSource::None),
    row(Nutrient::TotalFat, "Fat", 0, PercentSource::None),
    row(
        Nutrient::SaturatedFat,
        "of which saturates",
        1,
        PercentSource::None,
    ),
    row(
        Nutrient::TotalCarbohydrate,
        "Carbohydrate",
        0,
        PercentSource::None,
    ),
    row(Nutrient::TotalSugars, "of which sugars", 1, PercentSource::None),
    row(Nutrient::Protein, "Protein", 0, PercentSource::None),
    row(Nutrient::Salt, "Salt", 0, PercentSource::None),
];

static AUSTRALIA_ROWS: [RowSpec; 7] = [
    row(Nutrient::Calories, "Energy", 0, PercentSource::None),
    row(Nutrient::Protein, "Protein", 0, PercentSource::None),
    row(Nutrient::TotalFat, "Fat, total", 0, PercentSource::None),
    row(Nutrient::SaturatedFat, "Saturated", 1, PercentSource::None),
    row(
        Nutrient::TotalCarbohydrate,
        "Carbohydrate",
        0,
        PercentSource::None,
    ),
    row(Nutrient::TotalSugars, "Sugars", 1, PercentSource::None),
    row(Nutrient::Sodium, "Sodium", 0, PercentSource::None),
];

/// FSSAI nutritional information rows
static INDIA_ROWS: [RowSpec; 9] = [
    row(Nutrient::Calories, "Energy", 0, PercentSource::Table),
    row(Nutrient::Protein, "Protein", 0, PercentSource::Table),
    row(
        Nutrient::TotalCarbohydrate,
        "Carbohydrate",
        0,
        PercentSource::Table,
    ),
    row(Nutrient::TotalSugars, "Total Sugars", 1, PercentSource::Table),
    row(Nutrient::AddedSugars, "Added Sugars", 1, PercentSource::Table),
    row(Nutrient::TotalFat, "Total Fat", 0, PercentSource::Table),
    row(Nutrient::SaturatedFat, "Saturated Fat", 1, PercentSource::Table),
    row(Nutrient::TransFat, "Trans Fat", 1, PercentSource::Table),
    row(Nutrient::Sodium, "Sodium", 0, PercentSource::Table),
];

// ============================================================================
// Format specs
// ============================================================================

static US_STANDARD: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerServing],
    dv: DvTable::Us,
    energy: EnergyStyle::Kcal,
    rows: &US_ROWS,
    simplified: false,
};

static US_SIMPLIFIED: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerServing],
    dv: DvTable::Us,
    energy: EnergyStyle::Kcal,
    rows: &US_ROWS,
    simplified: true,
};

static US_DUAL_COLUMN: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerServing, ColumnBasis::PerContainer],
    dv: DvTable::Us,
    energy: EnergyStyle::Kcal,
    rows: &US_ROWS,
    simplified: false,
};

static US_LINEAR: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerServing],
    dv: DvTable::Us,
    energy: EnergyStyle::Kcal,
    rows: &US_ROWS,
    simplified: false,
};

static US_TABULAR: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerServing],
    dv: DvTable::Us,
    energy: EnergyStyle::Kcal,
    rows: &US_ROWS,
    simplified: false,
};

static US_VERTICAL_CONDENSED: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerServing],
    dv: DvTable::Us,
    energy: EnergyStyle::Kcal,
    rows: &US_ROWS,
    simplified: false,
};

static US_BILINGUAL: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerServing],
    dv: DvTable::Us,
    energy: EnergyStyle::Kcal,
    rows: &US_BILINGUAL_ROWS,
    simplified: false,
};

static US_AGGREGATE: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerServing],
    dv: DvTable::Us,
    energy: EnergyStyle::Kcal,
    rows: &US_ROWS,
    simplified: false,
};

static EU: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerHundred],
    dv: DvTable::None,
    energy: EnergyStyle::KilojoulesAndKcal,
    rows: &EU_ROWS,
    simplified: false,
};

static CANADA: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerServing],
    dv: DvTable::Canada,
    energy: EnergyStyle::Kcal,
    rows: &CANADA_ROWS,
    simplified: false,
};

static AUSTRALIA: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerServing, ColumnBasis::PerHundred],
    dv: DvTable::None,
    energy: EnergyStyle::Kilojoules,
    rows: &AUSTRALIA_ROWS,
    simplified: false,
};

static INDIA: FormatSpec = FormatSpec {
    columns: &[ColumnBasis::PerHundred, ColumnBasis::PerServing],
    dv: DvTable::IndiaRda,
    energy: EnergyStyle::Kcal,
    rows: &INDIA_ROWS,
    simplified: false,
};
