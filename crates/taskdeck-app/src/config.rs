//! Optional user settings from `<config_dir>/taskdeck/config.toml`
//!
//! Everything has a default; a missing or unparseable file is logged
//! and ignored rather than surfaced.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use taskdeck_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";

/// User-tunable settings. All fields optional; flags override these.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the storage slot path
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Default port for `--serve` (flag and PORT env still win)
    pub port: Option<u16>,
}

impl Settings {
    /// Load settings from the default location, falling back to
    /// defaults when the file is absent or invalid.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Could not read {}: {e}", path.display());
                }
                return Self::default();
            }
        };

        match toml::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Invalid config at {}, using defaults: {e}", path.display());
                Self::default()
            }
        }
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("taskdeck").join(CONFIG_FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_toml_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "this is { not toml").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_settings_parse() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.server.port, Some(8080));
        assert_eq!(settings.storage.path, None);
    }

    #[test]
    fn test_storage_path_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[storage]\npath = \"/tmp/my-tasks.json\"\n").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(
            settings.storage.path,
            Some(PathBuf::from("/tmp/my-tasks.json"))
        );
    }
}
