// Settings service
// Loads and saves the TOML configuration file

mod service;

pub use service::{apply_env_overrides, SettingsService, ENV_API_TOKEN, ENV_API_URL};
