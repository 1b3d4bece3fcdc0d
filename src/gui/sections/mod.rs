pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;

use std::convert::Infallible;

use iced::{Element, Task};

use crate::{
    core::{contact::Notification, cursor::ElementRole, reveal::SectionId},
    gui::AppState,
};

/// Requests a section makes of the page around it.
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// Smooth-scroll to a section anchor.
    ScrollTo(SectionId),
    /// Pointer entered an element with this role.
    HoverEnter(ElementRole),
    /// Pointer left an element with this role.
    HoverExit(ElementRole),
    /// Hand an outbound link to the user.
    OpenLink(&'static str),
    DownloadCv,
    Notify(Notification),
}

#[derive(Debug, Clone)]
pub enum SectionMessage<M> {
    Local(M),
    Page(PageEvent),
}

impl<M> From<PageEvent> for SectionMessage<M> {
    fn from(event: PageEvent) -> Self {
        SectionMessage::Page(event)
    }
}

/// One region of the page.
pub trait Section: Sized {
    type Message: std::fmt::Debug + Clone;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Self::Message>>;

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<SectionMessage<Self::Message>>;
}

/// Lift the messages of a section without local messages into the page.
pub fn lift_static<Message>(message: SectionMessage<Infallible>) -> Message
where
    Message: From<PageEvent>,
{
    match message {
        SectionMessage::Page(event) => Message::from(event),
        SectionMessage::Local(never) => match never {},
    }
}
