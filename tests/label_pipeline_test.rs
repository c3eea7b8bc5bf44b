//! Panel-to-label pipeline: JSON input through format layout to the
//! renderer-ready rows, plus the recipe path that feeds it.

use labelgen::label::{
    build_aggregate_label, build_label, AggregateItem, Label, LabelCell, LabelFormat,
};
use labelgen::models::NutrientPanel;
use labelgen::recipe::{bakers_percentages, hydration, scale_to_yield, Recipe};

/// Breakfast cereal panel, the FDA's own sample label numbers
const CEREAL_JSON: &str = r#"{
    "serving": {
        "serving_size": 0.667,
        "serving_unit": "cup",
        "servings_per_container": 8.0,
        "serving_weight_g": 55.0
    },
    "nutrients": {
        "calories": 230.0,
        "total_fat": 8.0,
        "saturated_fat": 1.0,
        "trans_fat": 0.0,
        "cholesterol": 0.0,
        "sodium": 160.0,
        "total_carbohydrate": 37.0,
        "dietary_fiber": 4.0,
        "total_sugars": 12.0,
        "added_sugars": 10.0,
        "protein": 3.0,
        "vitamin_d": 2.0,
        "calcium": 260.0,
        "iron": 8.0,
        "potassium": 235.0
    }
}"#;

const DOUGH_JSON: &str = r#"{
    "name": "Lean dough",
    "servings": 4,
    "ingredients": [
        {"name": "Bread flour", "quantity": 500.0, "unit": "g", "role": "flour"},
        {"name": "Water", "quantity": 350.0, "unit": "g", "role": "liquid"},
        {"name": "Salt", "quantity": 10.0, "unit": "g"}
    ]
}"#;

const PORRIDGE_JSON: &str = r#"{
    "name": "Porridge",
    "servings": 6,
    "ingredients": [
        {
            "name": "Rolled oats",
            "quantity": 300.0,
            "unit": "g",
            "nutrients_per_100g": {
                "calories": 380.0,
                "total_fat": 7.0,
                "total_carbohydrate": 68.0,
                "total_sugars": 1.0,
                "protein": 13.0
            }
        },
        {"name": "Water", "quantity": 290.0, "unit": "g", "role": "liquid"},
        {"name": "Salt", "quantity": 10.0, "unit": "g", "nutrients_per_100g": {"sodium": 38000.0}}
    ]
}"#;

fn cereal() -> NutrientPanel {
    serde_json::from_str(CEREAL_JSON).unwrap()
}

fn cell<'a>(label: &'a Label, name: &str) -> &'a LabelCell {
    &label
        .rows
        .iter()
        .find(|row| row.name == name)
        .unwrap_or_else(|| panic!("no row named '{}'", name))
        .cells[0]
}

#[test]
fn test_us_standard_label_from_panel_json() {
    let label = build_label(&cereal(), LabelFormat::UsStandard);

    assert_eq!(label.headings, vec!["Per serving"]);
    assert_eq!(label.rows.len(), 15);

    let calories = cell(&label, "Calories");
    assert_eq!(calories.value, "230");
    assert_eq!(calories.unit, "kcal");
    assert_eq!(calories.percent, None);

    let fat = cell(&label, "Total Fat");
    assert_eq!(fat.value, "8");
    assert_eq!(fat.unit, "g");
    assert_eq!(fat.percent, Some(10));

    assert_eq!(cell(&label, "Sodium").value, "160");
    assert_eq!(cell(&label, "Sodium").percent, Some(7));
    assert_eq!(cell(&label, "Total Carbohydrate").percent, Some(13));
    assert_eq!(cell(&label, "Dietary Fiber").percent, Some(14));

    // iron rounds by fives on display, the percent uses the raw amount
    assert_eq!(cell(&label, "Iron").value, "10");
    assert_eq!(cell(&label, "Iron").percent, Some(44));
    assert_eq!(cell(&label, "Potassium").value, "240");
    assert_eq!(cell(&label, "Potassium").percent, Some(5));

    // no US daily value for trans fat, sugars, or protein
    assert_eq!(cell(&label, "Trans Fat").value, "0.0");
    assert_eq!(cell(&label, "Trans Fat").percent, None);
    assert_eq!(cell(&label, "Total Sugars").percent, None);
    assert_eq!(cell(&label, "Protein").percent, None);

    let added = label
        .rows
        .iter()
        .find(|row| row.name == "Added Sugars")
        .unwrap();
    assert_eq!(added.indent, 2);
    assert_eq!(added.cells[0].percent, Some(20));
}

#[test]
fn test_dual_column_scales_before_rounding() {
    let label = build_label(&cereal(), LabelFormat::UsDualColumn);

    assert_eq!(label.headings, vec!["Per serving", "Per container"]);
    for row in &label.rows {
        assert_eq!(row.cells.len(), 2);
    }

    let calories = &label.rows[0];
    assert_eq!(calories.cells[0].value, "230");
    assert_eq!(calories.cells[1].value, "1840");

    let sodium = label.rows.iter().find(|r| r.name == "Sodium").unwrap();
    assert_eq!(sodium.cells[1].value, "1280");
    assert_eq!(sodium.cells[1].percent, Some(56));
}

#[test]
fn test_bilingual_rows_mirror_standard_values() {
    let standard = build_label(&cereal(), LabelFormat::UsStandard);
    let bilingual = build_label(&cereal(), LabelFormat::UsBilingual);

    assert_eq!(bilingual.rows.len(), standard.rows.len());
    for (b, s) in bilingual.rows.iter().zip(standard.rows.iter()) {
        assert_eq!(b.nutrient, s.nutrient);
        assert_eq!(b.cells, s.cells);
        assert!(b.name.contains('/'), "bilingual name '{}'", b.name);
    }
    assert_eq!(cell(&bilingual, "Sodium / Sodio").value, "160");
}

#[test]
fn test_canada_combined_sat_trans_percent() {
    let label = build_label(&cereal(), LabelFormat::Canada);

    // (1 g saturated + 0 g trans) against the 20 g combined reference
    let saturated = cell(&label, "Saturated / saturés");
    assert_eq!(saturated.value, "1");
    assert_eq!(saturated.percent, Some(5));
    assert_eq!(cell(&label, "+ Trans / trans").percent, None);

    // Canada references total sugars, the US table does not
    assert_eq!(cell(&label, "Sugars / Sucres").percent, Some(12));
}

#[test]
fn test_india_per_hundred_and_rda_columns() {
    let label = build_label(&cereal(), LabelFormat::India);

    assert_eq!(label.headings, vec!["Per 100 g", "Per serving"]);

    let energy = &label.rows[0];
    assert_eq!(energy.name, "Energy");
    // 55 g serving: per-100 scales by 100/55
    assert_eq!(energy.cells[0].value, "418");
    assert_eq!(energy.cells[0].percent, None);
    assert_eq!(energy.cells[1].value, "230");
    assert_eq!(energy.cells[1].percent, Some(12));

    let added = label.rows.iter().find(|r| r.name == "Added Sugars").unwrap();
    assert_eq!(added.cells[1].percent, Some(20));
    // no Indian RDA for protein
    let protein = label.rows.iter().find(|r| r.name == "Protein").unwrap();
    assert_eq!(protein.cells[1].percent, None);
}

#[test]
fn test_simplified_format_footers_insignificant_rows() {
    let label = build_label(&cereal(), LabelFormat::UsSimplified);

    assert_eq!(label.not_significant, vec!["Trans Fat", "Cholesterol"]);
    assert_eq!(label.rows.len(), 13);
    assert!(label.rows.iter().all(|row| row.name != "Trans Fat"));
    assert_eq!(cell(&label, "Sodium").value, "160");
}

#[test]
fn test_aggregate_label_per_item_columns() {
    let items = [
        AggregateItem {
            name: "Granola".to_string(),
            fraction: 0.6,
        },
        AggregateItem {
            name: "Yogurt".to_string(),
            fraction: 0.4,
        },
    ];
    let label = build_aggregate_label(&cereal(), &items);

    assert_eq!(label.format, LabelFormat::UsAggregate);
    assert_eq!(label.headings, vec!["Granola", "Yogurt"]);

    // 230 kcal splits 138 / 92, scaled before rounding
    let calories = &label.rows[0];
    assert_eq!(calories.cells[0].value, "138");
    assert_eq!(calories.cells[1].value, "92");

    // 160 mg sodium splits 96 / 64, landing on different rounding steps
    let sodium = label.rows.iter().find(|r| r.name == "Sodium").unwrap();
    assert_eq!(sodium.cells[0].value, "100");
    assert_eq!(sodium.cells[1].value, "60");
    assert_eq!(sodium.cells[0].percent, Some(4));
    assert_eq!(sodium.cells[1].percent, Some(3));
}

#[test]
fn test_recipe_json_to_eu_label() {
    let recipe: Recipe = serde_json::from_str(PORRIDGE_JSON).unwrap();
    let panel = recipe.to_panel().unwrap();

    // 600 g batch over 6 servings: the per-100 column equals per-serving
    assert_eq!(panel.serving.serving_weight_g, Some(100.0));

    let label = build_label(&panel, LabelFormat::Eu);
    assert_eq!(label.headings, vec!["Per 100 g"]);

    let energy = cell(&label, "Energy");
    assert_eq!(energy.value, "795 kJ / 190 kcal");
    assert_eq!(energy.unit, "");

    assert_eq!(cell(&label, "Fat").value, "4");
    assert_eq!(cell(&label, "Carbohydrate").value, "34");
    assert_eq!(cell(&label, "of which sugars").value, "1");
    assert_eq!(cell(&label, "Protein").value, "7");

    // salt is derived from sodium: 633 mg -> 1.58 g -> 2
    assert_eq!(cell(&label, "Salt").value, "2");
    assert_eq!(cell(&label, "Salt").unit, "g");

    // the EU declaration carries no percent column at all
    assert!(label
        .rows
        .iter()
        .all(|row| row.cells.iter().all(|c| c.percent.is_none())));
}

#[test]
fn test_scaling_a_batch_keeps_the_per_serving_label() {
    let recipe: Recipe = serde_json::from_str(PORRIDGE_JSON).unwrap();
    let doubled = scale_to_yield(&recipe, 12.0).unwrap();

    assert_eq!(doubled.servings, 12.0);
    assert_eq!(doubled.total_weight_g().unwrap(), 1200.0);

    let before = build_label(&recipe.to_panel().unwrap(), LabelFormat::Eu);
    let after = build_label(&doubled.to_panel().unwrap(), LabelFormat::Eu);
    for (b, a) in before.rows.iter().zip(after.rows.iter()) {
        assert_eq!(b.name, a.name);
        assert_eq!(b.cells, a.cells);
    }
}

#[test]
fn test_bakers_report_from_recipe_json() {
    let recipe: Recipe = serde_json::from_str(DOUGH_JSON).unwrap();

    let lines = bakers_percentages(&recipe).unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].name, "Bread flour");
    assert_eq!(lines[0].grams, 500.0);
    assert_eq!(lines[0].percent, 100.0);
    assert_eq!(lines[1].percent, 70.0);
    assert_eq!(lines[2].percent, 2.0);

    assert_eq!(hydration(&recipe).unwrap(), 70.0);
}

#[test]
fn test_label_serializes_for_the_renderer() {
    let label = build_label(&cereal(), LabelFormat::UsStandard);
    let value = serde_json::to_value(&label).unwrap();

    assert_eq!(value["format"], "us-standard");
    assert_eq!(value["headings"][0], "Per serving");
    assert_eq!(value["rows"][0]["nutrient"], "calories");
    assert_eq!(value["rows"][0]["cells"][0]["value"], "230");
    assert_eq!(value["rows"][0]["cells"][0]["percent"], serde_json::Value::Null);
    assert_eq!(value["rows"][1]["nutrient"], "total_fat");
    assert_eq!(value["serving"]["serving_weight_g"], 55.0);
}
