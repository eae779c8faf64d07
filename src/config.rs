//! Configuration management
//!
//! Config file is stored next to the executable as `oc-cobs.toml`,
//! or passed explicitly with `--config`.

use crate::codec::Variant;
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_HEX_LINE_WIDTH};
use crate::error::{Result, ToolError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

// =============================================================================
// Configuration
// =============================================================================

/// Tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub codec: CodecConfig,
    pub io: IoConfig,
}

/// Codec selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Variant used when the command line does not name one
    pub variant: Variant,
}

/// Representation of the encoded side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Encoded data is hex text (written by `encode`, read by `decode`)
    pub hex: bool,
    /// Bytes per line in hex output
    pub line_width: usize,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            hex: false,
            line_width: DEFAULT_HEX_LINE_WIDTH,
        }
    }
}

impl Config {
    /// Check values serde cannot constrain
    pub fn validate(&self) -> Result<()> {
        if self.io.line_width == 0 {
            return Err(ToolError::ConfigValidation {
                field: "io.line_width",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Loading / saving
// =============================================================================

/// Get the default config file path (next to the executable)
pub fn config_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| ToolError::ConfigRead {
        path: PathBuf::from("executable"),
        source: e,
    })?;
    let exe_dir = exe.parent().ok_or_else(|| ToolError::ConfigValidation {
        field: "exe_path",
        reason: "no parent directory".into(),
    })?;
    Ok(exe_dir.join(CONFIG_FILE_NAME))
}

/// Parse and validate config text
pub fn parse(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| ToolError::ConfigValidation {
        field: "config",
        reason: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit path, surfacing every error
pub fn load_strict(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| ToolError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&content)
}

/// Load config from the default location, falling back to defaults
///
/// A missing file is not an error. Unreadable or invalid files are logged.
pub fn load() -> Config {
    let path = match config_path() {
        Ok(p) => p,
        Err(e) => {
            warn!("Failed to determine config path: {}, using defaults", e);
            return Config::default();
        }
    };

    if !path.exists() {
        return Config::default();
    }

    match load_strict(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Config error in {:?}: {}, using defaults", path, e);
            Config::default()
        }
    }
}

/// Save config to file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config).map_err(|e| ToolError::ConfigValidation {
        field: "config",
        reason: e.to_string(),
    })?;
    fs::write(path, content).map_err(|e| ToolError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

// ============================================================================
// Tests
// ============================================================================
