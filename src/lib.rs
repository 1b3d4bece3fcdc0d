pub mod config;
pub mod core;
pub mod error;
pub mod logging;

pub use core::catalog::{Category, CategoryFilter, Project, ProjectCatalog};
pub use core::contact::{ContactForm, Field, Notification, Submission};
pub use core::cursor::{CursorTracker, ElementRole, PointerState};
pub use core::layout::{PageLayout, SectionExtent, Viewport};
pub use core::nav::{Anchor, NavState};
pub use core::reveal::{ObservableReveal, RevealObserver, SectionId};
pub use core::theme::{ThemeMode, ThemeStore};
pub use error::{FolioError, SubmissionError, ThemeError, ValidationError};

#[cfg(feature = "gui")]
pub mod gui;
