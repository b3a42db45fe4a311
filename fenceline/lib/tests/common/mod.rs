//! Common test utilities for highlighting integration tests.
//!
//! Provides helpers for loading fixtures and stand-in tokenizers.

use std::fs;
use std::path::PathBuf;

use fenceline_lib::markdown::{HighlightError, HighlightResult};

/// Loads a markdown fixture from the `tests/fixtures/` directory.
///
/// ## Panics
///
/// Panics if the fixture file cannot be read or does not exist.
pub fn load_fixture(path: &str) -> String {
    let mut fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    fixture_path.push("tests");
    fixture_path.push("fixtures");
    fixture_path.push(path);

    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {:?}: {}",
            fixture_path.display(),
            e
        )
    })
}

/// Tokenizer that knows no languages, forcing the plain-text fallback.
pub fn no_grammars(language: &str, _source: &str) -> HighlightResult<String> {
    Err(HighlightError::UnsupportedLanguage(language.to_string()))
}

/// Tokenizer that returns the source unchanged.
#[allow(dead_code)]
pub fn passthrough(_language: &str, source: &str) -> HighlightResult<String> {
    Ok(source.to_string())
}
