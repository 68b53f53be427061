//! Build metadata
//!
//! `build.rs` bumps `build_number.txt` on every rebuild and exports the number
//! and a UTC timestamp as compile-time env vars.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build stamp embedded at compile time
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            build_number: option_env!("DRINKDEX_BUILD_NUMBER")
                .and_then(|n| n.parse().ok())
                .unwrap_or(0),
            build_timestamp: option_env!("DRINKDEX_BUILD_TIMESTAMP").unwrap_or("unknown"),
        }
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!(
        "Drinkdex v{} (build {}, compiled {})",
        info.version, info.build_number, info.build_timestamp
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_current() {
        let info = BuildInfo::current();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(!info.build_timestamp.is_empty());
    }
}
