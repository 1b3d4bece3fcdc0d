//! Integration tests for theme persistence.

mod common;

use common::*;

#[test]
fn test_missing_file_uses_fallback() {
    let (_dir, path) = temp_theme_path();
    let store = ThemeStore::init(Some(path.clone()), ThemeMode::Dark);
    assert_eq!(store.mode(), ThemeMode::Dark);
    assert!(!path.exists());
}

#[test]
fn test_toggle_persists_across_sessions() -> anyhow::Result<()> {
    let (_dir, path) = temp_theme_path();

    let mut store = ThemeStore::init(Some(path.clone()), ThemeMode::Light);
    assert_eq!(store.toggle()?, ThemeMode::Dark);
    assert!(path.exists());

    let reopened = ThemeStore::init(Some(path.clone()), ThemeMode::Light);
    assert_eq!(reopened.mode(), ThemeMode::Dark);
    Ok(())
}

#[test]
fn test_double_toggle_restores_mode() -> anyhow::Result<()> {
    let (_dir, path) = temp_theme_path();
    let mut store = ThemeStore::init(Some(path), ThemeMode::Dark);
    store.toggle()?;
    store.toggle()?;
    assert_eq!(store.mode(), ThemeMode::Dark);
    Ok(())
}

#[test]
fn test_corrupt_preference_falls_back() -> anyhow::Result<()> {
    let (_dir, path) = temp_theme_path();
    std::fs::create_dir_all(path.parent().unwrap())?;
    std::fs::write(&path, "theme = \"sepia\"")?;

    let store = ThemeStore::init(Some(path), ThemeMode::Light);
    assert_eq!(store.mode(), ThemeMode::Light);
    Ok(())
}
