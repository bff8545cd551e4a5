//! Compile-time build stamp for the generator.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line shown by `--version` and logged at start-up.
pub fn version_line() -> String {
    format!(
        "{} (built {}, commit {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
