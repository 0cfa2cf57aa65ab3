//! Global output-mode helpers.
//!
//! The binary exports its global flags as environment variables so any
//! module can check them without threading state through every call.

/// Whether `--json` was passed: machine-readable output only.
pub fn is_json() -> bool {
    std::env::var("BOLETIN_JSON").is_ok()
}

/// Whether `--quiet` was passed: suppress non-essential output.
pub fn is_quiet() -> bool {
    std::env::var("BOLETIN_QUIET").is_ok()
}

/// Whether `--verbose` was passed.
pub fn is_verbose() -> bool {
    std::env::var("BOLETIN_VERBOSE").is_ok()
}

/// Print a JSON value to stdout, pretty-printed.
pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}
