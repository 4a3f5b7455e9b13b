use crate::error::{MedcartError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The relay's three fixed identifiers. All must be set before a quote can
/// be submitted; they are account credentials, not secrets, and live in the
/// config file rather than the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelaySettings {
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
}

impl RelaySettings {
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

/// Configuration for medcart, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedcartConfig {
    #[serde(default)]
    pub relay: RelaySettings,

    /// Relay request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for MedcartConfig {
    fn default() -> Self {
        Self {
            relay: RelaySettings::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl MedcartConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MedcartError::Io)?;
        let config: MedcartConfig =
            serde_json::from_str(&content).map_err(MedcartError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MedcartError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MedcartError::Serialization)?;
        fs::write(config_path, content).map_err(MedcartError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_unconfigured() {
        let config = MedcartConfig::default();
        assert!(!config.relay.is_configured());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = MedcartConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, MedcartConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();

        let config = MedcartConfig {
            relay: RelaySettings {
                service_id: "service_x".into(),
                template_id: "template_y".into(),
                public_key: "key_z".into(),
            },
            timeout_secs: 10,
        };
        config.save(dir.path()).unwrap();

        let loaded = MedcartConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.relay.is_configured());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"relay":{"service_id":"only-this"}}"#,
        )
        .unwrap();

        let loaded = MedcartConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.relay.service_id, "only-this");
        assert!(!loaded.relay.is_configured());
        assert_eq!(loaded.timeout_secs, 30);
    }
}
