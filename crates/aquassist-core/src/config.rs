use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AquaError, Result};

/// Top-level configuration for AquaAssist.
///
/// Loaded from `aquassist.toml` by default. Every section falls back to its
/// defaults when absent, so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AquaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub skill: SkillConfig,
    /// User-facing site name -> dataset metric key.
    #[serde(default = "default_sites")]
    pub sites: BTreeMap<String, String>,
}

impl Default for AquaConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            dataset: DatasetConfig::default(),
            server: ServerConfig::default(),
            skill: SkillConfig::default(),
            sites: default_sites(),
        }
    }
}

impl AquaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AquaConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Check the site table: names and keys must be non-empty, names must
    /// carry no surrounding whitespace, and names must stay unique once
    /// lower-cased.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (name, key) in &self.sites {
            if name.trim().is_empty() {
                return Err(AquaError::Config("site name must not be empty".to_string()));
            }
            if name.trim() != name {
                return Err(AquaError::Config(format!(
                    "site name '{}' has leading or trailing whitespace",
                    name
                )));
            }
            let normalized = name.to_lowercase();
            if key.trim().is_empty() {
                return Err(AquaError::Config(format!(
                    "site '{}' has an empty metric key",
                    name
                )));
            }
            if !seen.insert(normalized) {
                return Err(AquaError::Config(format!(
                    "duplicate site name after case folding: '{}'",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Consumption dataset location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the JSON array of consumption records.
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "./documents/water_data.json".to_string(),
        }
    }
}

/// HTTP endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3040,
        }
    }
}

/// Voice-platform skill settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// When set, request envelopes from any other application id are rejected.
    pub application_id: Option<String>,
}

/// The plant sites known out of the box.
pub fn default_sites() -> BTreeMap<String, String> {
    [
        ("amiad filter", "Group_4_pumps_to_Amiad_Filter_Consumption"),
        ("scale pit", "Group_4_pumps_to_Scale_Pit_Consumption"),
        ("cold well", "Make_up_line_valve_to_cold_well_Consumption"),
        ("cooling tower", "VT_Pump_to_cooling_tower_Consumption"),
        ("ppf pit", "PPF_Pit_to_cold_well_Consumption"),
    ]
    .into_iter()
    .map(|(name, key)| (name.to_string(), key.to_string()))
    .collect()
}
