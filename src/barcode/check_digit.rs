//! Weighted modulo-10 check digits
//!
//! Every numeric retail symbology shares one checksum: payload digits are
//! weighted 1 and 3 in alternation, summed, and the check digit is the
//! complement to the next multiple of ten. Symbologies differ only in
//! which alternation phase carries the weight of 3, so that phase is the
//! single parameter here.

/// Which 0-indexed payload positions (counted from the left) weigh 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Positions 0, 2, 4, ... (UPC-A, EAN-8, ITF-14)
    ThreeOnEven,
    /// Positions 1, 3, 5, ... (EAN-13, GS1 application-identifier types)
    ThreeOnOdd,
}

/// Compute the modulo-10 check digit for a payload of digit values (0-9)
pub fn mod10_check_digit(digits: &[u8], weighting: Weighting) -> u8 {
    let mut sum = 0u32;
    for (i, &d) in digits.iter().enumerate() {
        let on_three = match weighting {
            Weighting::ThreeOnEven => i % 2 == 0,
            Weighting::ThreeOnOdd => i % 2 == 1,
        };
        if on_three {
            sum += d as u32 * 3;
        } else {
            sum += d as u32;
        }
    }
    let modulo = sum % 10;
    if modulo == 0 {
        0
    } else {
        (10 - modulo) as u8
    }
}

/// Check digit for a string payload; `None` if any character is not a digit
pub fn check_digit_str(payload: &str, weighting: Weighting) -> Option<u8> {
    let mut digits = Vec::with_capacity(payload.len());
    for ch in payload.chars() {
        digits.push(ch.to_digit(10)? as u8);
    }
    Some(mod10_check_digit(&digits, weighting))
}
