use crate::{Error, Result};
use eyegrid_core::GridShape;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "EYEGRID_CONFIG";

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. EYEGRID_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`<config_dir>/eyegrid/config.toml`)
/// 4. ~/.eyegrid.toml (fallback for systems without a config directory)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    resolve_config_path_with(explicit_path, std::env::var(CONFIG_ENV).ok())
}

fn resolve_config_path_with(explicit_path: Option<&str>, env_path: Option<String>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(env_path) = env_path {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("eyegrid").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".eyegrid.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => expand_tilde(s),
        None => path.to_path_buf(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: GridShape::REFERENCE.rows(),
            cols: GridShape::REFERENCE.cols(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub path: Option<PathBuf>,
    pub grayscale: bool,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            path: None,
            grayscale: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Omitted means the built-in 7x7 label set
    pub path: Option<PathBuf>,
    pub delimiter: char,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: ',',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub delay_ms: u64,
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            delay_ms: 600,
            autoplay: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub atlas: AtlasConfig,
    pub labels: LabelsConfig,
    pub playback: PlaybackConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value the session depends on before anything is loaded
    pub fn validate(&self) -> Result<()> {
        self.shape()?;
        self.delimiter()?;
        if self.playback.delay_ms == 0 {
            return Err(Error::Config(
                "playback.delay_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn shape(&self) -> Result<GridShape> {
        GridShape::new(self.grid.rows, self.grid.cols)
            .map_err(|err| Error::Config(err.to_string()))
    }

    /// Label delimiter as the single byte the tokenizer splits on
    pub fn delimiter(&self) -> Result<u8> {
        let c = self.labels.delimiter;
        if !c.is_ascii() || c == '\n' || c == '\r' {
            return Err(Error::Config(format!(
                "labels.delimiter must be a single ASCII character other than a line break, got {:?}",
                c
            )));
        }
        Ok(c as u8)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.playback.delay_ms)
    }

    pub fn atlas_path(&self) -> Option<PathBuf> {
        self.atlas.path.as_deref().map(expand_path)
    }

    pub fn labels_path(&self) -> Option<PathBuf> {
        self.labels.path.as_deref().map(expand_path)
    }
}
