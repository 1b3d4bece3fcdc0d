//! Integration tests for settings loading.

mod common;

use std::path::{Path, PathBuf};

use common::*;
use folio::config::{Overrides, Settings};

#[test]
fn test_defaults_without_file() -> anyhow::Result<()> {
    let settings = Settings::load_or_default(None)?;
    assert_eq!(settings, Settings::default());
    assert!(settings.cursor);
    assert_eq!(settings.cv_path(), Path::new("assets").join("pratik-tamanag-cv.pdf"));
    Ok(())
}

#[test]
fn test_file_values_are_read() -> anyhow::Result<()> {
    let file = write_config(
        r#"
default_theme = "dark"
cursor = false
assets_dir = "/srv/folio"
log_filter = "folio=trace"
"#,
    );

    let settings = Settings::load(file.path())?;

    assert_eq!(settings.default_theme, ThemeMode::Dark);
    assert!(!settings.cursor);
    assert_eq!(settings.portrait_path(), PathBuf::from("/srv/folio/portrait.jpg"));
    assert_eq!(settings.log_filter.as_deref(), Some("folio=trace"));
    Ok(())
}

#[test]
fn test_unknown_key_is_rejected() {
    let file = write_config("colour = \"blue\"\n");
    assert!(Settings::load(file.path()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(Settings::load(Path::new("/nonexistent/folio.toml")).is_err());
}

#[test]
fn test_overrides_win() -> anyhow::Result<()> {
    let file = write_config("default_theme = \"dark\"\nuser_agent = \"Desktop\"\n");
    let settings = Settings::load(file.path())?.with_overrides(Overrides {
        theme: Some(ThemeMode::Light),
        user_agent: None,
        no_cursor: true,
    });

    assert_eq!(settings.default_theme, ThemeMode::Light);
    assert_eq!(settings.user_agent(), "Desktop");
    assert!(!settings.cursor);
    Ok(())
}
