use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AppConfig;

/// Overrides `api_base_url` when set.
pub const ENV_API_URL: &str = "PROPERTY_CALENDAR_API_URL";
/// Overrides `api_token` when set.
pub const ENV_API_TOKEN: &str = "PROPERTY_CALENDAR_TOKEN";

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the per-user config file, if a home directory is known.
    pub fn from_default_location() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "PropertyCalendar", "PropertyCalendar")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration file; a missing file yields defaults.
    ///
    /// Environment overrides are applied before validation.
    pub fn get(&self) -> Result<AppConfig> {
        let mut config = if self.path.exists() {
            let data = fs::read_to_string(&self.path)
                .with_context(|| format!("failed to read config from {}", self.path.display()))?;
            toml::from_str(&data)
                .with_context(|| format!("failed to parse config from {}", self.path.display()))?
        } else {
            log::info!(
                "No config file at {}, using defaults",
                self.path.display()
            );
            AppConfig::default()
        };

        apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        config
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(config)
    }

    /// Validate and write `config`, creating parent directories as needed.
    pub fn update(&self, config: &AppConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(config).context("failed to serialize config")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&AppConfig::default())
    }
}

/// Apply [`ENV_API_URL`] and [`ENV_API_TOKEN`] from `lookup`; blank values are ignored.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = url;
    }
    if let Some(token) = lookup(ENV_API_TOKEN).filter(|v| !v.trim().is_empty()) {
        config.api_token = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("config.toml"));
        let mut config = service.get().unwrap();
        // Environment may override the URL; everything else is default.
        config.api_base_url = AppConfig::default().api_base_url;
        config.api_token = None;
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_update_and_reload() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join("config.toml"));

        let config = AppConfig {
            inline_cap: 4,
            first_day_of_week: 1,
            ..AppConfig::default()
        };
        service.update(&config).unwrap();

        let loaded = service.get().unwrap();
        assert_eq!(loaded.inline_cap, 4);
        assert_eq!(loaded.first_day_of_week, 1);
    }

    #[test]
    fn test_update_invalid_settings() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("config.toml"));

        let config = AppConfig {
            inline_cap: 0,
            ..AppConfig::default()
        };
        assert!(service.update(&config).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_parse_error_mentions_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "inline_cap = \"two\"").unwrap();

        let err = SettingsService::new(&path).get().unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }

    #[test]
    fn test_reset_settings() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("config.toml"));
        service
            .update(&AppConfig {
                inline_cap: 5,
                ..AppConfig::default()
            })
            .unwrap();

        service.reset().unwrap();
        assert_eq!(service.get().unwrap().inline_cap, 2);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |key| match key {
            ENV_API_URL => Some("https://api.example.com".to_string()),
            ENV_API_TOKEN => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.api_token, None);
    }
}
