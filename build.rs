//! Embeds a monotonically increasing build number and a UTC timestamp
//! into the binary. The counter lives in build_number.txt next to the
//! manifest and survives clean builds.

use std::fs;

const COUNTER_FILE: &str = "build_number.txt";

fn main() {
    println!("cargo:rerun-if-changed=src");

    let build = next_build_number();
    let stamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    println!("cargo:rustc-env=LABELGEN_BUILD_NUMBER={}", build);
    println!("cargo:rustc-env=LABELGEN_BUILD_TIMESTAMP={}", stamp);
    println!("cargo:warning=labelgen build #{} at {}", build, stamp);
}

fn next_build_number() -> u64 {
    let previous = fs::read_to_string(COUNTER_FILE)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0u64);
    let next = previous + 1;
    fs::write(COUNTER_FILE, next.to_string()).expect("Failed to write build number file");
    next
}
