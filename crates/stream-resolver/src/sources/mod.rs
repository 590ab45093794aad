//! Source abstractions
//!
//! A source knows how to turn a title identifier into candidate page URLs
//! for one particular site. Concrete sources live in the host application;
//! this crate only defines the trait the orchestrator schedules against.

pub mod traits;

pub use traits::*;
