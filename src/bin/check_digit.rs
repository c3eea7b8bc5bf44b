//! Check digit calculator for GTIN payloads
//!
//! Usage: cargo run --bin check_digit -- <digits> [<digits>...]
//!
//! Prints the mod-10 check digit for each payload under both weighting
//! conventions, along with the completed code.

use std::env;
use std::error::Error;

use labelgen::barcode::{check_digit_str, Weighting};

fn main() -> Result<(), Box<dyn Error>> {
    let payloads: Vec<String> = env::args().skip(1).collect();
    if payloads.is_empty() {
        eprintln!("Usage: check_digit <digits> [<digits>...]");
        std::process::exit(1);
    }

    for payload in &payloads {
        let even = check_digit_str(payload, Weighting::ThreeOnEven)
            .ok_or_else(|| format!("Not a numeric payload: '{}'", payload))?;
        let odd = check_digit_str(payload, Weighting::ThreeOnOdd)
            .ok_or_else(|| format!("Not a numeric payload: '{}'", payload))?;

        println!("{}", payload);
        println!(
            "  triple even positions (UPC-A, EAN-8, ITF-14): {}  -> {}{}",
            even, payload, even
        );
        println!(
            "  triple odd positions  (EAN-13, GS1-128):      {}  -> {}{}",
            odd, payload, odd
        );
    }

    Ok(())
}
