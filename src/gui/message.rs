use std::path::PathBuf;
use std::time::Instant;

use iced::{Point, Size, window};

use crate::gui::sections::{
    PageEvent, SectionMessage, contact::ContactMessage, header::HeaderMessage,
    projects::ProjectsMessage,
};

#[derive(Debug, Clone)]
pub enum Message {
    Header(SectionMessage<HeaderMessage>),
    Projects(SectionMessage<ProjectsMessage>),
    Contact(SectionMessage<ContactMessage>),
    /// Events raised by sections without local state.
    Page(PageEvent),
    Scrolled { offset: f32, height: f32 },
    WindowResized(Size),
    PointerMoved(Point),
    Frame(Instant),
    ToggleTheme,
    ToastExpired(u64),
    CvSaved(Result<Option<PathBuf>, String>),
    CloseRequested(window::Id),
}

impl From<PageEvent> for Message {
    fn from(event: PageEvent) -> Self {
        Message::Page(event)
    }
}
