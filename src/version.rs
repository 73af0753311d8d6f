//! Build-time identity of the library, taken from the Cargo manifest.

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub fn version_string() -> &'static str {
    VERSION
}

/// One-line banner, e.g. `examplelib v0.1.0`.
pub fn preamble() -> String {
    format!("{NAME} v{VERSION}")
}

pub fn description() -> &'static str {
    DESCRIPTION
}
