use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub classification: ClassificationConfig,
}

/// Signal registry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Optional TOML overlay with additional registry entries, merged and
    /// validated at startup
    pub overlay: Option<PathBuf>,
}

/// Classification engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Run the detector set on scoped threads instead of sequentially.
    /// Results are identical either way.
    pub parallel: bool,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self { parallel: false }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables.
    /// Environment variables (TXLABEL_* prefix) take precedence over file
    /// configuration.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("classification.parallel", false)?
            // Load from config.toml if it exists
            .add_source(config::File::with_name("config").required(false))
            // TXLABEL_REGISTRY_OVERLAY, TXLABEL_CLASSIFICATION_PARALLEL, ...
            .add_source(
                config::Environment::with_prefix("TXLABEL")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Convenience override with a flat name
        if let Ok(overlay) = env::var("TXLABEL_OVERLAY_PATH") {
            app_config.registry.overlay = Some(PathBuf::from(overlay));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        Self {
            registry: RegistryConfig { overlay: None },
            classification: ClassificationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_defaults() {
        let config = AppConfig::get_defaults();
        assert!(config.registry.overlay.is_none());
        assert!(!config.classification.parallel);
    }
}
