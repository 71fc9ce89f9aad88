use std::time::Duration;

/// How long a status message stays visible before it is hidden again.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix for every backend path. Empty means same origin.
    pub api_base_url: String,
    pub message_timeout: Duration,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_base_url: env!("API_BASE_URL").to_string(),
            message_timeout: MESSAGE_TIMEOUT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
