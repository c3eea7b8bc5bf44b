//! Barcode data formatting
//!
//! Turns validated input into the exact string a rendering library
//! encodes: digits only, zero-padded or truncated to the symbology's
//! payload width, check digit appended, GS1 types wrapped in their
//! application identifier. Formatting is a pure function of its input.

use super::check_digit::mod10_check_digit;
use super::symbology::{Scheme, Symbology};
use super::validate::{BarcodeError, BarcodeResult};

/// Format raw input into the renderer-ready string for a symbology
///
/// Intended to run after [`super::validate::check`] succeeds, but guards
/// its own bounds anyway: short input is zero-padded to the payload width
/// and long input keeps its leading digits.
pub fn format_barcode(symbology: Symbology, raw: &str) -> BarcodeResult<String> {
    match symbology.scheme() {
        Scheme::Gtin {
            prefix_len,
            weighting,
            ai,
            ..
        } => {
            let mut digits: Vec<u8> = raw
                .chars()
                .filter_map(|c| c.to_digit(10).map(|d| d as u8))
                .collect();
            if digits.is_empty() {
                return Err(BarcodeError::Empty);
            }
            if digits.len() < prefix_len {
                let mut padded = vec![0u8; prefix_len - digits.len()];
                padded.extend(digits);
                digits = padded;
            } else {
                digits.truncate(prefix_len);
            }
            let check = mod10_check_digit(&digits, weighting);

            let mut out = String::with_capacity(prefix_len + 5);
            if let Some(ai) = ai {
                out.push('(');
                out.push_str(ai);
                out.push(')');
            }
            for &d in &digits {
                out.push(char::from(b'0' + d));
            }
            out.push(char::from(b'0' + check));
            Ok(out)
        }
        Scheme::CondensedUpc => {
            let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                return Err(BarcodeError::Empty);
            }
            // bare 6-digit payload gets the number system digit
            if digits.len() == 6 {
                Ok(format!("0{}", digits))
            } else {
                Ok(digits)
            }
        }
        Scheme::Freeform => {
            if raw.trim().is_empty() {
                Err(BarcodeError::Empty)
            } else {
                Ok(raw.to_string())
            }
        }
    }
}
