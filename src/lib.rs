//! Nutrition Label Toolkit (labelgen)
//!
//! Core functionality for regulatory nutrition-facts computation and
//! barcode data preparation: rounding rules and daily values for twelve
//! label formats, check-digit math and formatting for nine barcode
//! symbologies, and recipe aggregation with baker's percentages.

pub mod barcode;
pub mod build_info;
pub mod label;
pub mod models;
pub mod recipe;
pub mod units;
