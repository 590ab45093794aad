/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.

pub const DEFAULT_APP_NAME: &str = "Streamline";
pub const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 30;

pub fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

pub fn default_source_timeout_secs() -> u64 {
    DEFAULT_SOURCE_TIMEOUT_SECS
}
