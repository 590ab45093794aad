//! Centralized error handling for the stream resolver
//!
//! This module unifies the error types used across the crate. Failures from
//! individual sources and extractors are recovered inside the orchestrator;
//! the types here exist so those failures can be counted, logged and
//! optionally rendered for the user in a consistent way.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;

/// Convenience type alias for Extractor Results
pub type ExtractResult<T> = Result<T, ExtractError>;
