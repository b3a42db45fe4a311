//! Type definitions for the markdown module.

use thiserror::Error;

/// Errors that can occur while highlighting a markdown document.
#[derive(Error, Debug)]
pub enum HighlightError {
    /// Invalid line range item inside a `{...}` annotation.
    #[error("Invalid line range: {0}")]
    InvalidLineRange(String),

    /// The tokenizer has no grammar for the requested language.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The tokenizer failed while processing source text.
    #[error("Tokenization failed: {0}")]
    Tokenize(String),

    /// Failed to parse AST.
    #[error("Failed to parse AST: {0}")]
    AstParse(String),

    /// Failed to parse YAML configuration.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Failed to parse JSON configuration.
    #[error("Failed to parse JSON configuration: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

/// Result type for highlighting operations.
pub type HighlightResult<T> = Result<T, HighlightError>;
