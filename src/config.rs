//! Runtime settings.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::content::{CV_ASSET, PORTRAIT_ASSET};
use crate::core::theme::{ThemeMode, default_theme_path};
use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Where the theme preference is persisted.
    pub theme_file: Option<PathBuf>,
    /// Theme used when nothing has been persisted yet.
    pub default_theme: ThemeMode,
    /// User agent used for touch-device detection.
    pub user_agent: Option<String>,
    /// Draw the custom cursor overlay.
    pub cursor: bool,
    /// Directory holding the CV and portrait assets.
    pub assets_dir: PathBuf,
    /// `tracing` filter directive, e.g. `folio=debug`.
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_file: None,
            default_theme: ThemeMode::default(),
            user_agent: None,
            cursor: true,
            assets_dir: PathBuf::from("assets"),
            log_filter: None,
        }
    }
}

/// Values supplied on the command line; `None` keeps the file setting.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub theme: Option<ThemeMode>,
    pub user_agent: Option<String>,
    pub no_cursor: bool,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = toml::from_str(&raw)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map(Self::load).unwrap_or_else(|| Ok(Self::default()))
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(theme) = overrides.theme {
            self.default_theme = theme;
        }
        if overrides.user_agent.is_some() {
            self.user_agent = overrides.user_agent;
        }
        if overrides.no_cursor {
            self.cursor = false;
        }
        self
    }

    /// CV offered by the download button.
    pub fn cv_path(&self) -> PathBuf {
        self.assets_dir.join(CV_ASSET)
    }

    pub fn portrait_path(&self) -> PathBuf {
        self.assets_dir.join(PORTRAIT_ASSET)
    }

    pub fn theme_path(&self) -> Option<PathBuf> {
        self.theme_file.clone().or_else(default_theme_path)
    }

    /// Effective user agent for this process.
    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            format!(
                "{}/{} ({}; {})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS,
                std::env::consts::ARCH
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("default_theme = \"dark\"").unwrap();
        assert_eq!(settings.default_theme, ThemeMode::Dark);
        assert!(settings.cursor);
        assert_eq!(settings.cv_path(), PathBuf::from("assets").join(CV_ASSET));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<Settings>("colour = \"red\"").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::default().with_overrides(Overrides {
            theme: Some(ThemeMode::Dark),
            user_agent: Some("Mozilla/5.0 (iPhone)".into()),
            no_cursor: true,
        });
        assert_eq!(settings.default_theme, ThemeMode::Dark);
        assert_eq!(settings.user_agent(), "Mozilla/5.0 (iPhone)");
        assert!(!settings.cursor);
    }

    #[test]
    fn test_default_user_agent_is_desktop() {
        assert!(!crate::core::cursor::is_touch_device(&Settings::default().user_agent()));
    }
}
