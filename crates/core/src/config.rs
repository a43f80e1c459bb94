use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::paths::Paths;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformChannelConfig {
    #[serde(default = "default_platform_enabled")]
    pub enabled: bool,
    /// Channel name the platform bridge registers under.
    #[serde(default = "default_platform_channel")]
    pub channel: String,
}

fn default_platform_enabled() -> bool {
    true
}

fn default_platform_channel() -> String {
    "platform".to_string()
}

impl Default for PlatformChannelConfig {
    fn default() -> Self {
        Self {
            enabled: default_platform_enabled(),
            channel: default_platform_channel(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelsConfig {
    #[serde(default)]
    pub platform: PlatformChannelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub channels: ChannelsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default(paths: &Paths) -> Result<Self> {
        let config_path = paths.config_file();
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert!(cfg.channels.platform.enabled);
        assert_eq!(cfg.channels.platform.channel, "platform");
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_parse_partial_json() {
        let raw = r#"{
  "channels": { "platform": { "channel": "sys" } }
}"#;
        let cfg: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg.channels.platform.channel, "sys");
        // Unspecified fields fall back to defaults
        assert!(cfg.channels.platform.enabled);
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut cfg = Config::default();
        cfg.channels.platform.enabled = false;
        cfg.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!(!loaded.channels.platform.enabled);
        assert_eq!(loaded.channels.platform.channel, "platform");
    }
}
