//! Small, pure formatting utilities

pub mod country;
pub mod human_format;

pub use country::flag_emoji;
pub use human_format::format_bytes;
