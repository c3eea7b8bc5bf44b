//! Barcode symbology catalog
//!
//! The nine supported symbologies and the static scheme each one validates
//! and formats under. Everything symbology-specific lives in this table;
//! the validator and formatter only interpret it.

use serde::{Deserialize, Serialize};

use super::check_digit::Weighting;

/// A supported barcode symbology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symbology {
    UpcA,
    // rename_all does not split at digit boundaries
    #[serde(rename = "ean-13")]
    Ean13,
    UpcE,
    #[serde(rename = "ean-8")]
    Ean8,
    Gs1_128,
    #[serde(rename = "itf-14")]
    Itf14,
    DataBar,
    DataMatrix,
    Qr,
}

impl Symbology {
    /// Every supported symbology, for CLI listings and exhaustive tests
    pub const ALL: [Symbology; 9] = [
        Symbology::UpcA,
        Symbology::Ean13,
        Symbology::UpcE,
        Symbology::Ean8,
        Symbology::Gs1_128,
        Symbology::Itf14,
        Symbology::DataBar,
        Symbology::DataMatrix,
        Symbology::Qr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbology::UpcA => "upc-a",
            Symbology::Ean13 => "ean-13",
            Symbology::UpcE => "upc-e",
            Symbology::Ean8 => "ean-8",
            Symbology::Gs1_128 => "gs1-128",
            Symbology::Itf14 => "itf-14",
            Symbology::DataBar => "data-bar",
            Symbology::DataMatrix => "data-matrix",
            Symbology::Qr => "qr",
        }
    }

    /// Parse from string, accepting dashed and undashed spellings
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "upc-a" | "upca" => Some(Symbology::UpcA),
            "ean-13" | "ean13" => Some(Symbology::Ean13),
            "upc-e" | "upce" => Some(Symbology::UpcE),
            "ean-8" | "ean8" => Some(Symbology::Ean8),
            "gs1-128" | "gs1128" => Some(Symbology::Gs1_128),
            "itf-14" | "itf14" => Some(Symbology::Itf14),
            "data-bar" | "databar" => Some(Symbology::DataBar),
            "data-matrix" | "datamatrix" => Some(Symbology::DataMatrix),
            "qr" => Some(Symbology::Qr),
            _ => None,
        }
    }

    /// The static validation/formatting scheme for this symbology
    pub fn scheme(&self) -> Scheme {
        match self {
            Symbology::UpcA => Scheme::Gtin {
                prefix_len: 11,
                weighting: Weighting::ThreeOnEven,
                ai: None,
                pad: false,
            },
            Symbology::Ean13 => Scheme::Gtin {
                prefix_len: 12,
                weighting: Weighting::ThreeOnOdd,
                ai: None,
                pad: false,
            },
            Symbology::Ean8 => Scheme::Gtin {
                prefix_len: 7,
                weighting: Weighting::ThreeOnEven,
                ai: None,
                pad: false,
            },
            Symbology::Itf14 => Scheme::Gtin {
                prefix_len: 13,
                weighting: Weighting::ThreeOnEven,
                ai: None,
                pad: true,
            },
            // GS1 types weight odd positions, unlike the plain 14-digit
            // carton code
            Symbology::Gs1_128 => Scheme::Gtin {
                prefix_len: 13,
                weighting: Weighting::ThreeOnOdd,
                ai: Some("01"),
                pad: true,
            },
            Symbology::DataBar => Scheme::Gtin {
                prefix_len: 12,
                weighting: Weighting::ThreeOnOdd,
                ai: Some("01"),
                pad: true,
            },
            Symbology::UpcE => Scheme::CondensedUpc,
            Symbology::DataMatrix | Symbology::Qr => Scheme::Freeform,
        }
    }
}

/// How a symbology's data is validated and formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Fixed-width numeric payload ending in a weighted modulo-10 check
    /// digit
    Gtin {
        /// Payload digits before the check digit
        prefix_len: usize,
        weighting: Weighting,
        /// GS1 application identifier the formatted output is wrapped in
        ai: Option<&'static str>,
        /// Short input is accepted and zero-padded rather than rejected
        pad: bool,
    },
    /// Zero-suppressed 6-digit UPC; formatting prefixes the number system
    /// digit, other lengths pass through unchanged
    CondensedUpc,
    /// Free-form 2D payload; any non-empty string encodes
    Freeform,
}
