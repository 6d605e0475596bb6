//! TOML-based configuration for the `ir-remote` application.
//!
//! Reads and writes [`AppConfig`] to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\IrRemote\config.toml`
//! - Linux:    `$XDG_CONFIG_HOME/ir-remote/config.toml` (or `~/.config/...`)
//! - macOS:    `~/Library/Application Support/IrRemote/config.toml`
//!
//! Example file:
//!
//! ```toml
//! [remote]
//! log_level = "debug"
//! default_brand = "Samsung"
//!
//! [emitter]
//! backend = "dry-run"
//!
//! [presets]
//! include_defaults = true
//! files = ["/etc/ir-remote/living-room.json"]
//! ```
//!
//! Every section and field is optional.  Missing values take the defaults
//! produced by the `default_*` helpers below, so a first run without any
//! file behaves exactly like an empty file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub emitter: EmitterConfig,
    #[serde(default)]
    pub presets: PresetsConfig,
}

/// General behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteConfig {
    /// `tracing` log level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Brand used by `send` when `--brand` is omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_brand: Option<String>,
}

/// Which emitter backend to drive.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EmitterBackend {
    /// Log every transmission instead of sending it.
    #[default]
    DryRun,
    /// Behave like a device without an IR emitter.
    None,
}

/// Emitter backend settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmitterConfig {
    #[serde(default)]
    pub backend: EmitterBackend,
    /// Makes the dry-run backend report every transmission as failed.
    #[serde(default)]
    pub fail_transmissions: bool,
}

/// Preset catalog sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetsConfig {
    /// Whether the built-in brands are part of the catalog.
    #[serde(default = "default_true")]
    pub include_defaults: bool,
    /// JSON preset files merged after the built-in brands, in order.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_brand: None,
        }
    }
}

impl Default for PresetsConfig {
    fn default() -> Self {
        Self {
            include_defaults: default_true(),
            files: Vec::new(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the full path to the config file in the platform directory.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads `AppConfig` from the platform config file.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Persists `config` to the platform config file.
///
/// # Errors
///
/// See [`save_config_to`].
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_file_path()?)
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("IrRemote"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("ir-remote"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("IrRemote")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ir_remote_{name}_{}", std::process::id()))
    }

    #[test]
    fn test_app_config_default_values() {
        // Arrange / Act
        let cfg = AppConfig::default();

        // Assert
        assert_eq!(cfg.remote.log_level, "info");
        assert_eq!(cfg.remote.default_brand, None);
        assert_eq!(cfg.emitter.backend, EmitterBackend::DryRun);
        assert!(!cfg.emitter.fail_transmissions);
        assert!(cfg.presets.include_defaults);
        assert!(cfg.presets.files.is_empty());
    }

    #[test]
    fn test_empty_toml_equals_default() {
        let cfg: AppConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_unspecified_defaults() {
        // Arrange
        let toml_str = r#"
[remote]
default_brand = "Sony"

[emitter]
backend = "none"
"#;

        // Act
        let cfg: AppConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.remote.default_brand.as_deref(), Some("Sony"));
        assert_eq!(cfg.remote.log_level, "info");
        assert_eq!(cfg.emitter.backend, EmitterBackend::None);
        assert!(cfg.presets.include_defaults);
    }

    #[test]
    fn test_unknown_backend_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[emitter]\nbackend = \"lirc\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unset_default_brand_is_omitted_from_toml() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).expect("serialize");
        assert!(!toml_str.contains("default_brand"));
        assert!(toml_str.contains("backend = \"dry-run\""));
    }

    #[test]
    fn test_load_config_from_missing_file_returns_default() {
        let path = PathBuf::from("/nonexistent/path/that/cannot/exist/config.toml");
        let cfg = load_config_from(&path).expect("missing file is not an error");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_load_config_from_malformed_file_is_parse_error() {
        // Arrange
        let dir = scratch_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[[[ not valid toml").unwrap();

        // Act
        let result = load_config_from(&path);

        // Assert
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_and_load_config_round_trip() {
        // Arrange
        let dir = scratch_dir("round_trip");
        let path = dir.join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.remote.log_level = "debug".to_string();
        cfg.remote.default_brand = Some("Samsung".to_string());
        cfg.emitter.fail_transmissions = true;
        cfg.presets.files.push(PathBuf::from("extra.json"));

        // Act
        save_config_to(&cfg, &path).expect("save");
        let loaded = load_config_from(&path).expect("load");

        // Assert
        assert_eq!(loaded, cfg);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        // NoPlatformConfigDir is acceptable in a stripped environment.
        if let Ok(path) = config_file_path() {
            assert!(path.ends_with("config.toml"), "got {path:?}");
        }
    }
}
