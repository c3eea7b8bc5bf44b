//! Barcode input validation
//!
//! Checks the shape of raw user input against a symbology's scheme before
//! formatting. Whitespace and dashes are stripped first (both show up in
//! typed GTINs); the remaining characters must be digits, fit the
//! symbology's length window, and a full-length payload must end in the
//! correct check digit.

use thiserror::Error;

use super::check_digit::mod10_check_digit;
use super::symbology::{Scheme, Symbology};

/// Barcode validation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    #[error("Barcode data is empty")]
    Empty,

    #[error("Invalid character '{0}' in barcode data")]
    NonNumeric(char),

    #[error("Wrong length for {symbology}: expected {expected} digits, got {found}")]
    WrongLength {
        symbology: &'static str,
        expected: String,
        found: usize,
    },

    #[error("Check digit mismatch: computed {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },
}

/// Result type for barcode operations
pub type BarcodeResult<T> = Result<T, BarcodeError>;

/// Validate raw input for a symbology, with a structured error on failure
pub fn check(symbology: Symbology, raw: &str) -> BarcodeResult<()> {
    match symbology.scheme() {
        Scheme::Gtin {
            prefix_len,
            weighting,
            pad,
            ..
        } => {
            let digits = to_digits(&cleaned(raw))?;
            let full_len = prefix_len + 1;
            let min = if pad { 1 } else { prefix_len };
            if digits.len() < min || digits.len() > full_len {
                let expected = if pad {
                    format!("1 to {}", full_len)
                } else {
                    format!("{} or {}", prefix_len, full_len)
                };
                return Err(BarcodeError::WrongLength {
                    symbology: symbology.as_str(),
                    expected,
                    found: digits.len(),
                });
            }
            if digits.len() == full_len {
                let expected = mod10_check_digit(&digits[..prefix_len], weighting);
                let found = digits[prefix_len];
                if expected != found {
                    return Err(BarcodeError::ChecksumMismatch { expected, found });
                }
            }
            Ok(())
        }
        Scheme::CondensedUpc => {
            let digits = to_digits(&cleaned(raw))?;
            // 6-digit payload, optionally with number system and check
            if !(6..=8).contains(&digits.len()) {
                return Err(BarcodeError::WrongLength {
                    symbology: symbology.as_str(),
                    expected: "6 to 8".to_string(),
                    found: digits.len(),
                });
            }
            Ok(())
        }
        Scheme::Freeform => {
            if raw.trim().is_empty() {
                Err(BarcodeError::Empty)
            } else {
                Ok(())
            }
        }
    }
}

/// Whether raw input is acceptable for a symbology
pub fn validate(symbology: Symbology, raw: &str) -> bool {
    check(symbology, raw).is_ok()
}

/// Strip the separators users type into GTINs
fn cleaned(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

fn to_digits(data: &str) -> BarcodeResult<Vec<u8>> {
    if data.is_empty() {
        return Err(BarcodeError::Empty);
    }
    let mut digits = Vec::with_capacity(data.len());
    for ch in data.chars() {
        match ch.to_digit(10) {
            Some(d) => digits.push(d as u8),
            None => return Err(BarcodeError::NonNumeric(ch)),
        }
    }
    Ok(digits)
}
