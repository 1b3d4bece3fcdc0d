use iced::{
    Alignment::Center,
    Color, Element, Length, Shadow, Task, Theme, Vector,
    widget::{button, column, container, container::Style, row, text},
};

use crate::{
    core::{
        content::OWNER_NAME,
        cursor::ElementRole,
        nav::{Anchor, NAV_ITEMS},
        reveal::SectionId,
    },
    gui::{
        AppState,
        sections::{PageEvent, Section, SectionMessage},
        state::HEADER_HEIGHT,
        widgets::{accent, fade, hoverable},
    },
};

/// Fixed bar at the top of the window.
#[derive(Debug, Clone, Default)]
pub struct Header;

#[derive(Debug, Clone)]
pub enum HeaderMessage {
    ToggleMenu,
    CloseMenu,
    Navigate(Anchor),
}

impl Section for Header {
    type Message = HeaderMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<HeaderMessage>> {
        let logo = hoverable(
            button(row![text(OWNER_NAME).size(24), accent(".", 1.0).size(24)])
                .style(button::text)
                .on_press(SectionMessage::Local(HeaderMessage::Navigate(NAV_ITEMS[0]))),
            ElementRole::Link,
        );

        let trailing: Element<'_, _> = if state.is_compact() {
            hoverable(
                button(text(if state.nav.is_mobile_menu_open() { "✕" } else { "☰" }).size(20))
                    .style(button::text)
                    .on_press(SectionMessage::Local(HeaderMessage::ToggleMenu)),
                ElementRole::Button,
            )
        } else {
            let current = current_section(state);
            row(NAV_ITEMS
                .iter()
                .map(|anchor| nav_entry(*anchor, current == Some(anchor.section))))
            .spacing(4)
            .into()
        };

        let scrolled = state.nav.is_scrolled();
        let bar = container(
            row![logo, container(trailing).align_right(Length::Fill)]
                .align_y(Center)
                .padding([0, 24]),
        )
        .width(Length::Fill)
        .center_y(HEADER_HEIGHT)
        .style(move |theme: &Theme| {
            if scrolled {
                Style {
                    shadow: Shadow {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                        offset: Vector::new(0.0, 1.0),
                        blur_radius: 4.0,
                    },
                    ..Style::default().background(fade(theme.palette().background, 0.8))
                }
            } else {
                Style::default()
            }
        });

        if state.is_compact() && state.nav.is_mobile_menu_open() {
            column![bar, mobile_menu()].into()
        } else {
            bar.into()
        }
    }

    fn update(
        &mut self,
        message: HeaderMessage,
        state: &mut AppState,
    ) -> Task<SectionMessage<HeaderMessage>> {
        match message {
            HeaderMessage::ToggleMenu => {
                state.nav.toggle_menu();
                Task::none()
            }
            HeaderMessage::CloseMenu => {
                state.nav.close_menu();
                Task::none()
            }
            HeaderMessage::Navigate(anchor) => {
                let target = state.nav.select(anchor);
                Task::done(PageEvent::ScrollTo(target.section).into())
            }
        }
    }
}

fn nav_entry<'a>(anchor: Anchor, active: bool) -> Element<'a, SectionMessage<HeaderMessage>> {
    let label = text(anchor.label).size(14).style(move |theme: &Theme| text::Style {
        color: Some(if active {
            theme.palette().primary
        } else {
            theme.palette().text
        }),
    });
    hoverable(
        button(label)
            .style(button::text)
            .on_press(SectionMessage::Local(HeaderMessage::Navigate(anchor))),
        ElementRole::Link,
    )
}

fn mobile_menu<'a>() -> Element<'a, SectionMessage<HeaderMessage>> {
    let entries = column(NAV_ITEMS.iter().map(|anchor| nav_entry(*anchor, false))).spacing(16);
    let close = hoverable(
        button(text("Close"))
            .style(button::text)
            .on_press(SectionMessage::Local(HeaderMessage::CloseMenu)),
        ElementRole::Button,
    );
    container(column![close, entries].spacing(32).padding(24))
        .width(256)
        .style(|theme: &Theme| {
            Style::default().background(theme.palette().background)
        })
        .into()
}

/// Section the header highlights for the current viewport.
pub fn current_section(state: &AppState) -> Option<SectionId> {
    state.layout.section_at(&state.viewport)
}
