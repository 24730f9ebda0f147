use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::i18n::Language;
use super::theme::QrTheme;

/// Application configuration, persisted between runs.
///
/// `language` is the durable store for the user's explicit language choice.
/// It stays empty until the user picks a language, so locale detection keeps
/// working across machines until then.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Explicitly chosen interface language, if any.
    #[serde(default)]
    pub language: Option<Language>,
    /// Selected QR theme.
    #[serde(default)]
    pub qr_theme: QrTheme,
    /// Show help overlay
    #[serde(default)]
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            qr_theme: QrTheme::default(),
            show_help: false,
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            serde_json::from_str(&content).unwrap_or_else(|_| {
                // If parsing fails, use default and save it
                let default_config = Config::default();
                let _ = default_config.save();
                default_config
            })
        } else {
            let default_config = Config::default();
            let _ = default_config.save();
            default_config
        };

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;

        // Use XDG config directory standard or fallback to ~/.config
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else {
            home_dir.join(".config")
        };

        let app_config_dir = config_dir.join("fun-qrcode");

        fs::create_dir_all(&app_config_dir)?;

        Ok(app_config_dir.join("config.json"))
    }

    /// Record an explicit language choice.
    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }

    /// Stored language code, if the user ever picked one.
    pub fn stored_language_code(&self) -> Option<&'static str> {
        self.language.map(Language::code)
    }

    /// Set QR theme
    pub fn set_qr_theme(&mut self, theme: QrTheme) {
        self.qr_theme = theme;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language, None);
        assert_eq!(config.qr_theme, QrTheme::Classic);
        assert!(!config.show_help);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            language: Some(Language::French),
            qr_theme: QrTheme::Neon,
            show_help: true,
        };

        let serialized = serde_json::to_string_pretty(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(config.language, deserialized.language);
        assert_eq!(config.qr_theme, deserialized.qr_theme);
        assert_eq!(config.show_help, deserialized.show_help);
    }

    #[test]
    fn test_language_persisted_as_code() {
        let config = Config {
            language: Some(Language::Portuguese),
            ..Default::default()
        };

        let serialized = serde_json::to_string(&config).unwrap();
        assert!(serialized.contains("\"language\":\"pt\""));
    }

    #[test]
    fn test_first_run_config_has_no_language() {
        // Older or hand-edited files may omit fields entirely.
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.language, None);
        assert_eq!(config.stored_language_code(), None);
        assert_eq!(config.qr_theme, QrTheme::Classic);
    }

    #[test]
    fn test_stored_language_code() {
        let mut config = Config::default();
        config.set_language(Language::German);
        assert_eq!(config.stored_language_code(), Some("de"));
    }

    #[test]
    fn test_help_toggle() {
        let mut config = Config::default();
        assert!(!config.show_help);

        config.toggle_help();
        assert!(config.show_help);

        config.toggle_help();
        assert!(!config.show_help);
    }
}
