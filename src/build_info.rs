//! Compile-time build metadata
//!
//! The build script embeds a build counter and timestamp through
//! environment variables; this module turns them into constants and a
//! serializable record for the CLI `version` subcommand.

use serde::Serialize;

/// Build counter, incremented by the build script on each compilation
pub const BUILD_NUMBER: u64 = match option_env!("LABELGEN_BUILD_NUMBER") {
    Some(s) => match parse_build_number(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// ISO 8601 timestamp of the build
pub const BUILD_TIMESTAMP: &str = match option_env!("LABELGEN_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

// option_env! values must be decoded in const context, so no str::parse
const fn parse_build_number(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    let mut n: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return None;
        }
        n = n * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    Some(n)
}

/// Build metadata, serialized by `labelgen version`
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Startup banner on stderr, keeping stdout machine-readable
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  Nutrition Label Toolkit (labelgen)");
    eprintln!("  Version: {} | Build: {}", info.version, info.build_number);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("===============================================");
}
