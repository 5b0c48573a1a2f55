use crate::domains::agents::RuntimeSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the runtime config relative to a rig root.
pub const RUNTIME_CONFIG_PATH: &str = "settings/runtime.json";

/// Per-rig runtime configuration as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    pub provider: String,
    pub command: String,
    /// Omitted means "adapter default"; `[]` means "no arguments".
    pub args: Option<Vec<String>>,
    pub initial_prompt: String,
    pub model: String,
}

impl RuntimeConfig {
    pub fn to_settings(&self) -> RuntimeSettings {
        RuntimeSettings {
            command: self.command.clone(),
            args: self.args.clone(),
            initial_prompt: self.initial_prompt.clone(),
            model: self.model.clone(),
        }
    }
}

pub trait RuntimeConfigRepository: Send + Sync {
    fn load(&self) -> Result<RuntimeConfig>;
}

pub struct FileRuntimeConfigRepository {
    config_path: PathBuf,
}

impl FileRuntimeConfigRepository {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn for_rig(rig_path: &Path) -> Self {
        Self::new(rig_path.join(RUNTIME_CONFIG_PATH))
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl RuntimeConfigRepository for FileRuntimeConfigRepository {
    fn load(&self) -> Result<RuntimeConfig> {
        if !self.config_path.exists() {
            log::debug!(
                "No runtime config at {}, using defaults",
                self.config_path.display()
            );
            return Ok(RuntimeConfig::default());
        }

        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!(
                "Failed to read runtime config {}",
                self.config_path.display()
            )
        })?;
        let config: RuntimeConfig = serde_json::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse runtime config {}",
                self.config_path.display()
            )
        })?;

        log::debug!(
            "Loaded runtime config from {}: provider='{}' command='{}'",
            self.config_path.display(),
            config.provider,
            config.command
        );
        Ok(config)
    }
}
