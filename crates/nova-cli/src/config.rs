//! Assistant configuration.
//!
//! Reads the `[assistant]` section of `config/default.toml`, then applies
//! environment overrides (after loading `.env` with `dotenvy`).  A missing
//! file or section yields the defaults; a file that is not valid TOML is an
//! error.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Settings from the `[assistant]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Name used in the REPL greeting.
    pub name: String,
    /// Word that wakes a sleeping REPL session.
    pub wake_word: String,
    /// Whether the REPL starts asleep and waits for the wake word.
    pub wake_word_enabled: bool,
    /// Default tracing level when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "Nova".to_string(),
            wake_word: "nova".to_string(),
            wake_word_enabled: false,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    assistant: AssistantConfig,
}

impl AssistantConfig {
    /// Load `.env`, the config file, then environment overrides.
    pub fn resolve(path: &Path) -> Result<Self> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();

        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read the `[assistant]` section of a TOML file.
    ///
    /// Returns the defaults if the file does not exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        Self::from_toml_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse the `[assistant]` section from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).context("failed to parse TOML")?;
        Ok(file.assistant.normalized())
    }

    /// Apply `ASSISTANT_NAME`, `WAKE_WORD`, `WAKE_WORD_ENABLED` and
    /// `LOG_LEVEL` from `lookup`.
    ///
    /// Blank values are ignored; an unrecognized boolean keeps the current
    /// value.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(name) = get("ASSISTANT_NAME") {
            self.name = name.trim().to_string();
        }
        if let Some(word) = get("WAKE_WORD") {
            self.wake_word = word;
        }
        if let Some(enabled) = get("WAKE_WORD_ENABLED") {
            match parse_bool(&enabled) {
                Some(b) => self.wake_word_enabled = b,
                None => tracing::warn!(value = %enabled, "ignoring invalid WAKE_WORD_ENABLED"),
            }
        }
        if let Some(level) = get("LOG_LEVEL") {
            self.log_level = level;
        }

        *self = std::mem::take(self).normalized();
    }

    fn normalized(mut self) -> Self {
        self.wake_word = self.wake_word.trim().to_lowercase();
        self.log_level = self.log_level.trim().to_lowercase();
        if self.wake_word.is_empty() {
            self.wake_word = Self::default().wake_word;
        }
        self
    }
}

/// Parse `1/true/yes/on` and `0/false/no/off`, case-insensitively.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
