//! Stream resolution orchestrator for media-addon backends.
//!
//! Given a title identifier, the [`resolver::Resolver`] queries a set of
//! pluggable content [`sources`], passes every discovered candidate URL
//! through a pluggable [`extractors::ExtractorRegistry`], then merges, ranks
//! and formats the results into a response a media-addon client can consume.
//!
//! The crate deliberately contains no site-specific scraping or extraction
//! logic and no transport layer; those live behind the [`sources::SourceHandler`]
//! and [`extractors::ExtractorRegistry`] traits and in the host application.

pub mod config;
pub mod context;
pub mod errors;
pub mod extractors;
pub mod models;
pub mod resolver;
pub mod sources;
pub mod streams;
pub mod utils;
