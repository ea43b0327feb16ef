// Settings module
// Application configuration persisted as TOML

use serde::{Deserialize, Serialize};

/// Runtime configuration for the calendar engine and its HTTP event source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the property-management API, e.g. `https://api.example.com/v1`.
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub max_retries: usize,
    pub retry_delay_ms: u64,
    pub max_response_bytes: usize,
    /// Permit plain `http://` URLs (local development only).
    pub allow_insecure: bool,
    /// Reminders rendered inline per day cell before "+N more".
    pub inline_cap: usize,
    /// Distance from either scroll edge that triggers window expansion.
    pub scroll_threshold_px: f32,
    pub first_day_of_week: u8, // 0 = Sunday
    pub cache_stale_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://localhost/api".to_string(),
            api_token: None,
            request_timeout_secs: 20,
            max_retries: 2,
            retry_delay_ms: 400,
            max_response_bytes: 5 * 1024 * 1024,
            allow_insecure: false,
            inline_cap: 2,
            scroll_threshold_px: 200.0,
            first_day_of_week: 0,
            cache_stale_secs: 300,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.trim().is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }

        if self.inline_cap == 0 {
            return Err("Inline cap must be at least 1".to_string());
        }

        if self.first_day_of_week > 6 {
            return Err("First day of week must be between 0 (Sunday) and 6 (Saturday)".to_string());
        }

        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err("Scroll threshold must be a non-negative number".to_string());
        }

        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than 0 seconds".to_string());
        }

        Ok(())
    }
}
