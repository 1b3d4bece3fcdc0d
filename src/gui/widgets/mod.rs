use iced::{
    Alignment::Center,
    Color, Element, Length, Padding, Theme, border,
    mouse,
    widget::{button, column, container, container::Style, mouse_area, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{
        content::SOCIAL_LINKS,
        contact::{Notification, NotificationKind},
        cursor::ElementRole,
        reveal::ENTRANCE_RISE,
    },
    gui::{
        sections::{PageEvent, SectionMessage},
        state::Toast,
    },
};

/// `color` with its alpha scaled by `progress`.
pub fn fade(color: Color, progress: f32) -> Color {
    Color {
        a: color.a * progress.clamp(0.0, 1.0),
        ..color
    }
}

/// Shift `content` down while it has not finished entering. The total
/// height stays the same so neighbours do not move.
pub fn reveal<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    progress: f32,
) -> Element<'a, Message> {
    let offset = ENTRANCE_RISE * (1.0 - progress.clamp(0.0, 1.0));
    container(content)
        .padding(Padding {
            top: offset,
            bottom: ENTRANCE_RISE - offset,
            ..Padding::ZERO
        })
        .into()
}

/// Section title with the accent bar underneath.
pub fn heading<'a, Message: 'a>(label: &'a str, progress: f32) -> Element<'a, Message> {
    let bar = container(text(""))
        .width(64)
        .height(4)
        .style(move |theme: &Theme| {
            Style::default().background(fade(theme.palette().primary, progress))
        });
    column![
        text(label)
            .size(36)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, progress)),
            }),
        bar,
    ]
    .spacing(16)
    .align_x(Center)
    .width(Length::Fill)
    .into()
}

/// Secondary copy, dimmed relative to the theme's text colour.
pub fn body<'a>(content: impl text::IntoFragment<'a>, progress: f32) -> text::Text<'a> {
    text(content).style(move |theme: &Theme| text::Style {
        color: Some(fade(theme.palette().text, 0.7 * progress)),
    })
}

/// Text in the accent colour.
pub fn accent<'a>(content: impl text::IntoFragment<'a>, progress: f32) -> text::Text<'a> {
    text(content).style(move |theme: &Theme| text::Style {
        color: Some(fade(theme.palette().primary, progress)),
    })
}

/// Thin horizontal separator.
pub fn divider<'a, Message: 'a>() -> Element<'a, Message> {
    container(text(""))
        .width(Length::Fill)
        .height(1)
        .style(|theme: &Theme| Style::default().background(fade(theme.palette().text, 0.15)))
        .into()
}

pub fn card_style(theme: &Theme) -> Style {
    bordered_box(theme)
        .border(border::rounded(12).width(1))
        .background(theme.palette().background)
}

pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content).padding(24).style(card_style).into()
}

/// Report the pointer entering and leaving `content` with the given role.
pub fn hoverable<'a, M: Clone + 'a>(
    content: impl Into<Element<'a, SectionMessage<M>>>,
    role: ElementRole,
) -> Element<'a, SectionMessage<M>> {
    let area = mouse_area(content)
        .on_enter(PageEvent::HoverEnter(role).into())
        .on_exit(PageEvent::HoverExit(role).into());
    if role.is_interactive() {
        area.interaction(mouse::Interaction::Pointer).into()
    } else {
        area.into()
    }
}

/// Button that scrolls the page to another section.
pub fn nav_button<'a, M: Clone + 'a>(
    label: &'a str,
    target: crate::core::reveal::SectionId,
    style: impl Fn(&Theme, button::Status) -> button::Style + 'a,
) -> Element<'a, SectionMessage<M>> {
    hoverable(
        button(text(label))
            .padding([10, 20])
            .style(style)
            .on_press(PageEvent::ScrollTo(target).into()),
        ElementRole::Button,
    )
}

/// Button for an outbound link.
pub fn link_button<'a, M: Clone + 'a>(
    label: &'a str,
    url: &'static str,
) -> Element<'a, SectionMessage<M>> {
    hoverable(
        button(text(label))
            .style(button::text)
            .on_press(PageEvent::OpenLink(url).into()),
        ElementRole::Link,
    )
}

pub fn social_links<'a, M: Clone + 'a>() -> Element<'a, SectionMessage<M>> {
    row(SOCIAL_LINKS
        .into_iter()
        .map(|link| link_button(link.name, link.url)))
    .spacing(8)
    .into()
}

pub fn toasts<'a, Message: 'a>(toasts: &'a [Toast]) -> Element<'a, Message> {
    column(toasts.iter().map(|toast| toast_card(&toast.notification)))
        .spacing(12)
        .width(360)
        .into()
}

fn toast_card<'a, Message: 'a>(notification: &'a Notification) -> Element<'a, Message> {
    let kind = notification.kind;
    container(column![
        text(&notification.title).size(16),
        text(&notification.description).size(14),
    ]
    .spacing(4))
    .padding(16)
    .width(Length::Fill)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let pair = match kind {
            NotificationKind::Success => palette.success.base,
            NotificationKind::Error => palette.danger.base,
        };
        Style::default()
            .background(pair.color)
            .color(pair.text)
            .border(border::rounded(10))
    })
    .into()
}
