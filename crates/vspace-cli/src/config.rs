//! Configuration management for the vspace CLI.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vspace_core::prelude::{LabelPolicy, LoaderOptions, DEFAULT_POSITIVE};

/// File name searched for in the current and parent directories.
pub const CONFIG_FILE: &str = "vspace.toml";

/// vspace project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_trim")]
    pub trim: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default = "default_positive")]
    pub positive: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How a computed boundary is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Default value functions
fn default_delimiter() -> char { ',' }
fn default_trim() -> bool { false }
fn default_positive() -> String { DEFAULT_POSITIVE.to_string() }

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            trim: default_trim(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            positive: default_positive(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, or from vspace.toml in the
    /// current or parent directories. No file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(find_config_file) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    pub fn loader_options(&self) -> Result<LoaderOptions> {
        Ok(LoaderOptions {
            delimiter: delimiter_byte(self.table.delimiter)?,
            trim: self.table.trim,
        })
    }

    pub fn label_policy(&self) -> LabelPolicy {
        LabelPolicy::new(self.labels.positive.clone())
    }
}

/// The CSV reader splits on a single byte.
pub fn delimiter_byte(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got {:?}", c);
    }
    Ok(c as u8)
}

/// Find vspace.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.table.delimiter, ',');
        assert!(!config.table.trim);
        assert_eq!(config.labels.positive, "Yes");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str("[labels]\npositive = \"Play\"\n").unwrap();
        assert_eq!(config.labels.positive, "Play");
        assert_eq!(config.table, TableConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.table.delimiter = ';';
        config.output.format = OutputFormat::Json;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.loader_options().unwrap().delimiter, b';');
        assert!(!loaded.loader_options().unwrap().trim);
    }

    #[test]
    fn non_ascii_delimiter_rejected() {
        assert!(delimiter_byte('§').is_err());
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
    }

    #[test]
    fn unreadable_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[table]\ndelimiter = 12\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
