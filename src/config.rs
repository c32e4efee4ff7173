use crate::error::{Result, UpdaterError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_HOLDER: &str = "PlayEveryWare, Inc.";
pub const DEFAULT_SNIFF_BYTES: usize = 1024;

const MAX_SNIFF_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub notice: NoticeConfig,
    pub detection: DetectionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Written after the year range, e.g. `(c) 2020-2024 PlayEveryWare, Inc.`
    pub holder: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// How many leading bytes are inspected for a null byte.
    pub sniff_bytes: usize,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            holder: DEFAULT_HOLDER.to_string(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sniff_bytes: DEFAULT_SNIFF_BYTES,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(UpdaterError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| UpdaterError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| UpdaterError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["copyright-update.toml", ".copyright-update.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        log::debug!("Loading configuration from {}", default_path);
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref holder) = cli_args.holder {
            self.notice.holder = holder.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.notice.holder.trim().is_empty() {
            return Err(UpdaterError::Config {
                message: "Copyright holder must not be empty".to_string(),
            });
        }

        if self.detection.sniff_bytes == 0 || self.detection.sniff_bytes > MAX_SNIFF_BYTES {
            return Err(UpdaterError::Config {
                message: format!(
                    "detection.sniff_bytes must be between 1 and {}",
                    MAX_SNIFF_BYTES
                ),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub holder: Option<String>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holder(mut self, holder: Option<String>) -> Self {
        self.holder = holder;
        self
    }
}
