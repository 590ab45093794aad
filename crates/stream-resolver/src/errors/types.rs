//! Error type definitions for the stream resolver
//!
//! This module defines all error types used throughout the crate, providing
//! a hierarchical error system that makes debugging and error handling more
//! straightforward.

use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur in the crate.
/// It uses `thiserror` to provide automatic error trait implementations and
/// proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Source handling errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Extractor errors
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Source handling specific errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// A source did not answer within the configured deadline
    #[error("Connection timeout: {source_name} did not answer within {timeout_secs}s")]
    Timeout {
        source_name: String,
        timeout_secs: u64,
    },

    /// The source's candidate-producing call failed
    #[error("Fetch failed: {source_name} - {message}")]
    FetchFailed {
        source_name: String,
        message: String,
    },

    /// Parsing errors for source data
    #[error("Parse error: {source_name} - {message}")]
    ParseError {
        source_name: String,
        message: String,
    },

    /// Invalid source configuration
    #[error("Invalid configuration: {field} - {message}")]
    InvalidConfig { field: String, message: String },

    /// HTTP errors from external sources
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },
}

/// Extractor specific errors
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No extractor in the registry matched the candidate URL
    #[error("No extractor matched: {url}")]
    NoExtractor { url: String },

    /// An extractor matched but failed to resolve a playable stream
    #[error("Extraction failed: {url} - {message}")]
    Failed { url: String, message: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Create a fetch failure error
    pub fn fetch_failed<S: Into<String>, M: Into<String>>(source_name: S, message: M) -> Self {
        Self::FetchFailed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

impl ExtractError {
    /// Create an extraction failure error
    pub fn failed<U: Into<String>, M: Into<String>>(url: U, message: M) -> Self {
        Self::Failed {
            url: url.into(),
            message: message.into(),
        }
    }
}
