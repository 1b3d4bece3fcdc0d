use std::io::Write;
use std::path::PathBuf;

use folio::core::reveal::DEFAULT_THRESHOLD;
use folio::{ContactForm, Field, PageLayout, RevealObserver, SectionId};
use tempfile::{NamedTempFile, TempDir};

/// Section heights used by the page tests, top to bottom.
pub const TEST_SECTIONS: [(SectionId, f32); 5] = [
    (SectionId::Home, 800.0),
    (SectionId::About, 600.0),
    (SectionId::Skills, 1000.0),
    (SectionId::Projects, 1200.0),
    (SectionId::Contact, 800.0),
];

pub fn test_layout() -> PageLayout {
    PageLayout::stacked(&TEST_SECTIONS).with_header_height(72.0)
}

/// Observer watching every section except the hero, as the page does.
pub fn test_observer() -> RevealObserver {
    let mut observer = RevealObserver::new();
    for section in [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ] {
        observer.observe(section, DEFAULT_THRESHOLD);
    }
    observer
}

/// A form with every field filled in.
pub fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Grace Hopper");
    form.set_field(Field::Email, "grace@example.com");
    form.set_field(Field::Subject, "Design review");
    form.set_field(Field::Message, "Could you look at our onboarding flow?");
    form
}

/// Path to a not-yet-existing theme file inside a fresh temp directory.
/// Keep the directory alive for as long as the path is used.
pub fn temp_theme_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("prefs").join("theme.toml");
    (dir, path)
}

/// Write `contents` to a temporary `.toml` file.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config file");
    file
}
