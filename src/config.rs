//! # Configuration Module
//!
//! Locates the Upcurve configuration directory and loads the optional
//! runtime configuration file from it.
//!
//! ## Config Location
//!
//! - Linux: `~/.config/upcurve/config.json`
//! - macOS: `~/Library/Application Support/upcurve/config.json`
//! - Windows: `%APPDATA%\upcurve\config.json`
//!
//! ## Format
//!
//! ```json
//! {
//!   "playlist_path": "/home/user/music/playlist.csv",
//!   "default_curve": "negative-quadratic"
//! }
//! ```
//!
//! Both keys are optional. Command-line flags win over the file.

use crate::curve::CurveSelector;
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the playlist file used when nothing else is configured
pub const DEFAULT_PLAYLIST_FILE: &str = "playlist.csv";

const CONFIG_FILE: &str = "config.json";

/// Returns the platform-appropriate configuration directory for Upcurve.
///
/// Looks up the standard config directory for the current platform and
/// creates the `upcurve` subdirectory inside it if it doesn't exist.
///
/// # Platform Behavior
///
/// - **Linux**: `$XDG_CONFIG_HOME/upcurve` or `~/.config/upcurve`
/// - **macOS**: `~/Library/Application Support/upcurve`
/// - **Windows**: `%APPDATA%\upcurve`
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path to the upcurve config directory
/// * `Err(anyhow::Error)` - If the directory cannot be determined or created
///
/// # Errors
///
/// This function will return an error if:
/// - The system configuration directory cannot be determined
/// - The upcurve subdirectory cannot be created due to permissions
///
/// # Examples
///
/// ```no_run
/// use upcurve::config::get_config_dir;
///
/// let dir = get_config_dir()?;
/// println!("Config directory: {}", dir.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!(
            "Could not determine system config directory. Please ensure your platform supports standard config directories."
        ))?;

    let upcurve_dir = config_dir.join("upcurve");
    fs::create_dir_all(&upcurve_dir)
        .with_context(|| format!(
            "Failed to create Upcurve config directory at {}. Please check file permissions.",
            upcurve_dir.display()
        ))?;

    Ok(upcurve_dir)
}

/// Returns the path of the runtime config file (which may not exist yet).
///
/// # Platform Behavior
///
/// - **Linux**: `~/.config/upcurve/config.json`
/// - **macOS**: `~/Library/Application Support/upcurve/config.json`
/// - **Windows**: `%APPDATA%\upcurve\config.json`
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path to `config.json` inside [`get_config_dir`]
/// * `Err(anyhow::Error)` - If the config directory is unavailable
///
/// # Errors
///
/// Same as [`get_config_dir`].
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Playlist file read and rewritten by default
    pub playlist_path: PathBuf,
    /// Curve used when `reorder` is given none
    pub default_curve: CurveSelector,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            playlist_path: PathBuf::from(DEFAULT_PLAYLIST_FILE),
            default_curve: CurveSelector::default(),
        }
    }
}

impl RuntimeConfig {
    /// Load the config from the standard location.
    ///
    /// A missing file yields [`RuntimeConfig::default`]. So does a config
    /// directory that cannot be determined or created; that case is logged
    /// as a warning so the tool still runs on unusual platforms.
    ///
    /// # Returns
    ///
    /// * `Ok(RuntimeConfig)` - Parsed file, or defaults if there is none
    /// * `Err(anyhow::Error)` - If a config file exists but is unreadable
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use upcurve::config::RuntimeConfig;
    ///
    /// let config = RuntimeConfig::load()?;
    /// println!("Default curve: {}", config.default_curve);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                warn!("Config directory unavailable, using defaults: {e:#}");
                Ok(Self::default())
            }
        }
    }

    /// Load the config from `path`, falling back to defaults when it is absent.
    ///
    /// Keys missing from the file take their default values.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The file exists but cannot be read
    /// - The file is not valid JSON, or names an unknown curve
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use upcurve::config::RuntimeConfig;
    ///
    /// let config = RuntimeConfig::load_from(Path::new("upcurve.json"))?;
    /// println!("Playlist: {}", config.playlist_path.display());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RuntimeConfig::load_from(&dir.path().join("config.json")).unwrap();

        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.playlist_path, PathBuf::from("playlist.csv"));
        assert_eq!(config.default_curve, CurveSelector::PositiveLinear);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "default_curve": "negative-cubic" }"#).unwrap();

        let config = RuntimeConfig::load_from(&path).unwrap();
        assert_eq!(config.default_curve, CurveSelector::NegativeCubic);
        assert_eq!(config.playlist_path, PathBuf::from(DEFAULT_PLAYLIST_FILE));
    }

    #[test]
    fn test_unknown_curve_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "default_curve": "zigzag" }"#).unwrap();

        let err = RuntimeConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file"));
    }
}
