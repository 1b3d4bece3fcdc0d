mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from folio for tests
pub use folio::core::contact::{SUBMIT_DELAY, deliver};
pub use folio::core::reveal::DEFAULT_THRESHOLD;
pub use folio::{
    CategoryFilter, ContactForm, CursorTracker, ElementRole, Field, FolioError, NavState,
    PageLayout, ProjectCatalog, RevealObserver, SectionId, SubmissionError, ThemeMode,
    ThemeStore, ValidationError, Viewport,
};
