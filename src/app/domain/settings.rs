use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::controllers::sidebar::{DEFAULT_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH};
use crate::app::infrastructure::error::AppError;
use crate::app::services::recent_files::RecentFiles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
    #[default]
    Dark,
}

impl ThemeName {
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_sidebar_visible")]
    pub sidebar_visible: bool,

    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: i32,

    #[serde(default)]
    pub theme: ThemeName,

    #[serde(default)]
    pub recent_files: RecentFiles,
}

fn default_word_wrap() -> bool {
    true
}

fn default_sidebar_visible() -> bool {
    true
}

fn default_sidebar_width() -> i32 {
    DEFAULT_SIDEBAR_WIDTH
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            word_wrap_enabled: default_word_wrap(),
            sidebar_visible: default_sidebar_visible(),
            sidebar_width: default_sidebar_width(),
            theme: ThemeName::default(),
            recent_files: RecentFiles::default(),
        }
    }
}

impl AppSettings {
    /// Load settings from `path`, falling back to defaults if it is missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        let mut settings = match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            // File doesn't exist, use defaults
            Err(_) => Self::default(),
        };
        settings.sidebar_width = settings.sidebar_width.max(MIN_SIDEBAR_WIDTH);
        settings
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("scribeone");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert!(settings.word_wrap_enabled);
        assert!(settings.sidebar_visible);
        assert_eq!(settings.sidebar_width, 260);
        assert_eq!(settings.theme, ThemeName::Dark);
        assert!(settings.recent_files.is_empty());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"word_wrap_enabled": false}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(!settings.word_wrap_enabled);  // Should use file value
        assert_eq!(settings.sidebar_width, 260);  // Should use default
        assert_eq!(settings.theme, ThemeName::Dark);
    }

    #[test]
    fn test_theme_serialization() {
        let settings = AppSettings {
            theme: ThemeName::Light,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"light\""));
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme, ThemeName::Light);
        assert!(ThemeName::Dark.is_dark());
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scribeone").join("settings.json");

        let mut settings = AppSettings {
            word_wrap_enabled: false,
            sidebar_visible: false,
            sidebar_width: 300,
            theme: ThemeName::Light,
            ..Default::default()
        };
        settings.recent_files.add("/tmp/a.txt");
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, settings);
        assert_eq!(loaded.recent_files.list(), ["/tmp/a.txt"]);
    }

    #[test]
    fn test_missing_or_corrupt_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(AppSettings::load_from(&missing), AppSettings::default());

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{ not json").unwrap();
        assert_eq!(AppSettings::load_from(&corrupt), AppSettings::default());
    }

    #[test]
    fn test_narrow_sidebar_width_is_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"sidebar_width": 12}"#).unwrap();
        assert_eq!(AppSettings::load_from(&path).sidebar_width, 180);
    }
}
