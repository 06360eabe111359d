//! Presenter configuration.
//!
//! An optional TOML file supplies defaults; command-line flags override them.
//! A missing file at the default location is not an error. A file the user
//! named explicitly must exist.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Directory name under the platform config/cache dirs.
pub const APP_DIR: &str = "pitch-deck";

/// Config file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Log file name inside the cache dir.
pub const LOG_FILE: &str = "pitch-deck.log";

/// Resolved presenter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Slide to open on: 1-based ordinal or slide key.
    pub start_slide: String,
    /// Render every icon with its ASCII fallback.
    pub ascii_icons: bool,
    /// Where the interactive presenter writes its log.
    pub log_file: Option<PathBuf>,
    /// File these settings came from; `None` for built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_slide: "1".to_string(),
            ascii_icons: false,
            log_file: None,
            source: None,
        }
    }
}

/// Error loading a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read.
    Io { path: PathBuf, source: std::io::Error },

    /// File is not valid TOML for [`Config`].
    Parse { path: PathBuf, message: String },
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Default config file location, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}

/// Default log file location.
///
/// Falls back to the system temp dir when no cache dir is known.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(LOG_FILE)
}

/// Parse config from TOML text. `path` is only used for error messages.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl Config {
    /// The log path to use: configured or default.
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Load configuration.
///
/// With `explicit = Some(path)` the file must exist. Otherwise the default
/// location is tried and silently skipped when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => load_file(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => load_file(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = parse_config(&text, path)?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

// ============================================================================
// DISPLAY
// ============================================================================

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "Invalid config {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { .. } => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("", Path::new("c.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.start_slide, "1");
        assert!(!config.ascii_icons);
    }

    #[test]
    fn full_file_is_parsed() {
        let text = r#"
            start_slide = "kano"
            ascii_icons = true
            log_file = "/tmp/deck.log"
        "#;
        let config = parse_config(text, Path::new("c.toml")).unwrap();
        assert_eq!(config.start_slide, "kano");
        assert!(config.ascii_icons);
        assert_eq!(config.log_path(), PathBuf::from("/tmp/deck.log"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = parse_config("start_slide = ", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config("theme = \"dark\"", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "start_slide = \"3\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.start_slide, "3");
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn parsed_text_has_no_source() {
        let config = parse_config("ascii_icons = true", Path::new("c.toml")).unwrap();
        assert!(config.source.is_none());
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn default_log_path_ends_with_log_file() {
        let path = default_log_path();
        assert!(path.ends_with(Path::new(APP_DIR).join(LOG_FILE)));
    }
}
