//! Stream entry presentation

pub mod format;

pub use format::*;
