//! Light/dark theme preference.
//!
//! The preference is process-wide and lives for the whole session. It is read
//! once at start-up from a small TOML file, falling back to the system
//! preference, and written back on every toggle.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ThemeError;

const THEME_FILE_NAME: &str = "theme.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Tooltip for the switch, naming the mode a toggle would select.
    pub fn switch_hint(self) -> String {
        format!("Switch to {} mode", self.toggled().name())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme `{other}` (expected `light` or `dark`)")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedTheme {
    theme: ThemeMode,
}

/// Default location of the persisted preference.
pub fn default_theme_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join(THEME_FILE_NAME))
}

#[derive(Debug, Clone)]
pub struct ThemeStore {
    mode: ThemeMode,
    path: Option<PathBuf>,
}

impl ThemeStore {
    /// Read the persisted preference at `path`, or fall back to `fallback`
    /// when nothing usable is stored. A `None` path keeps the preference in
    /// memory only.
    pub fn init(path: Option<PathBuf>, fallback: ThemeMode) -> Self {
        let mode = match path.as_deref().map(load) {
            Some(Ok(Some(mode))) => {
                debug!(%mode, "loaded persisted theme");
                mode
            }
            Some(Ok(None)) | None => fallback,
            Some(Err(error)) => {
                warn!(%error, "ignoring unreadable theme preference");
                fallback
            }
        };
        info!(%mode, "theme initialised");
        Self { mode, path }
    }

    pub fn in_memory(mode: ThemeMode) -> Self {
        Self { mode, path: None }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Flip the theme and persist it. The in-memory value changes even when
    /// writing fails.
    pub fn toggle(&mut self) -> Result<ThemeMode, ThemeError> {
        self.set(self.mode.toggled())
    }

    pub fn set(&mut self, mode: ThemeMode) -> Result<ThemeMode, ThemeError> {
        self.mode = mode;
        if let Some(path) = &self.path {
            store(path, mode)?;
            debug!(%mode, path = %path.display(), "persisted theme");
        }
        Ok(mode)
    }
}

fn load(path: &Path) -> Result<Option<ThemeMode>, ThemeError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ThemeError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let persisted: PersistedTheme = toml::from_str(&raw)?;
    Ok(Some(persisted.theme))
}

fn store(path: &Path, mode: ThemeMode) -> Result<(), ThemeError> {
    let io_error = |source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let raw = toml::to_string(&PersistedTheme { theme: mode })?;
    fs::write(path, raw).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut store = ThemeStore::in_memory(ThemeMode::Light);
        assert_eq!(store.toggle().unwrap(), ThemeMode::Dark);
        assert_eq!(store.toggle().unwrap(), ThemeMode::Light);
    }

    #[test]
    fn test_switch_hint() {
        assert_eq!(ThemeMode::Dark.switch_hint(), "Switch to light mode");
        assert_eq!(ThemeMode::Light.switch_hint(), "Switch to dark mode");
    }

    #[test]
    fn test_parse() {
        assert_eq!(" Dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
