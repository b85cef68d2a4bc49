//! Error types with fix suggestions (v0.1)

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Errors surfaced by helpers that do not swallow failure internally.
///
/// The "never fail" helpers (deep_get, try_parse, try_stringify, the
/// predicates) return sentinels instead and never construct these.
#[derive(Error, Debug)]
pub enum SundryError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest parse error: {0}")]
    ManifestParse(#[from] toml::de::Error),
}

impl FixSuggestion for SundryError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            SundryError::Serialization(_) => {
                Some("Ensure the value serializes to JSON (string map keys, no non-finite floats)")
            }
            SundryError::Io(_) => Some("Check file path and permissions"),
            SundryError::ManifestParse(_) => {
                Some("Check Cargo.toml syntax with `cargo verify-project`")
            }
        }
    }
}
