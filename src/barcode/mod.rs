//! Barcode module
//!
//! Validates raw input for the nine supported symbologies and formats it
//! into the string a barcode-rendering library consumes.

pub mod check_digit;
pub mod format;
pub mod symbology;
pub mod validate;

pub use check_digit::{check_digit_str, mod10_check_digit, Weighting};
pub use format::format_barcode;
pub use symbology::{Scheme, Symbology};
pub use validate::{check, validate, BarcodeError, BarcodeResult};
