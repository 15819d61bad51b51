use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::header::{DEFAULT_FALLBACK_COLUMN, DEFAULT_TARGET_COLUMN};

pub const CONFIG_FILE_NAME: &str = ".es2ptrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_size_threshold")]
    pub size_threshold: u64,
    #[serde(default = "default_target_column")]
    pub target_column: String,
    #[serde(default = "default_fallback_column")]
    pub fallback_column: Option<usize>,
    #[serde(default = "default_method")]
    pub method: String,
    /// Extra entries merged over the built-in dictionary.
    #[serde(default)]
    pub dictionary: Map<String, Value>,
}

fn default_file_pattern() -> String {
    "*.csv".to_string()
}

fn default_log_file() -> String {
    "translated_files_log.txt".to_string()
}

/// Files at or below this many bytes are left alone.
fn default_size_threshold() -> u64 {
    10 * 1024
}

fn default_target_column() -> String {
    DEFAULT_TARGET_COLUMN.to_string()
}

fn default_fallback_column() -> Option<usize> {
    Some(DEFAULT_FALLBACK_COLUMN)
}

fn default_method() -> String {
    "SCRIPT".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_pattern: default_file_pattern(),
            log_file: default_log_file(),
            size_threshold: default_size_threshold(),
            target_column: default_target_column(),
            fallback_column: default_fallback_column(),
            method: default_method(),
            dictionary: Map::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        Pattern::new(&self.file_pattern).with_context(|| {
            format!("Invalid glob pattern in 'filePattern': \"{}\"", self.file_pattern)
        })?;

        if self.target_column.trim().is_empty() {
            bail!("'targetColumn' must not be empty");
        }

        if self.log_file.is_empty() || self.log_file.contains(['/', '\\']) {
            bail!("'logFile' must be a plain file name: \"{}\"", self.log_file);
        }

        for (key, value) in &self.dictionary {
            if !value.is_string() {
                bail!("Dictionary value for \"{}\" must be a string, got: {}", key, value);
            }
        }

        Ok(())
    }

    /// Extra dictionary entries, in file order.
    pub fn dictionary_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dictionary
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|value| (key.as_str(), value)))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
