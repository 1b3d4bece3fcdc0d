use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task, Theme,
    widget::{button, column, container, image, row, text},
};

use crate::{
    core::{content::HERO, cursor::ElementRole},
    gui::{
        AppState,
        sections::{PageEvent, Section, SectionMessage},
        widgets::{accent, body, fade, hoverable, nav_button, reveal, social_links},
    },
};

/// Landing banner. Animates on mount rather than on scroll.
#[derive(Debug, Clone, Default)]
pub struct Hero;

impl Section for Hero {
    type Message = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Infallible>> {
        let p = |index| state.hero_progress(index);

        let name_progress = p(1);
        let intro = column![
            reveal(accent(HERO.greeting, p(0)).size(20), p(0)),
            reveal(
                text(HERO.name).size(56).style(move |theme: &Theme| text::Style {
                    color: Some(fade(theme.palette().text, name_progress)),
                }),
                name_progress,
            ),
            reveal(body(HERO.role, p(2)).size(28), p(2)),
            reveal(body(HERO.pitch, p(3)).size(18), p(3)),
            reveal(
                row![
                    nav_button(HERO.primary_cta.0, HERO.primary_cta.1, button::primary),
                    nav_button(HERO.secondary_cta.0, HERO.secondary_cta.1, button::secondary),
                ]
                .spacing(16),
                p(4),
            ),
            reveal(social_links(), p(5)),
        ]
        .spacing(8)
        .width(Length::FillPortion(3));

        let portrait = column![
            container(image(state.portrait_path.as_path()))
                .width(320)
                .height(320),
            reveal(
                hoverable(
                    button(text("Download CV"))
                        .style(button::secondary)
                        .on_press(PageEvent::DownloadCv.into()),
                    ElementRole::Button,
                ),
                p(6),
            ),
        ]
        .spacing(16)
        .align_x(Center)
        .width(Length::FillPortion(2));

        let scroll_hint = reveal(
            hoverable(
                button(text("⌄").size(28))
                    .style(button::text)
                    .on_press(PageEvent::ScrollTo(HERO.scroll_hint).into()),
                ElementRole::Button,
            ),
            p(6),
        );

        let banner = if state.is_compact() {
            Element::from(column![portrait, intro].spacing(32).align_x(Center))
        } else {
            row![intro, portrait].spacing(64).align_y(Center).into()
        };

        column![
            container(banner).center_y(Length::Fill).padding([0, 48]),
            container(scroll_hint).center_x(Length::Fill),
        ]
        .padding([96, 0])
        .into()
    }

    fn update(
        &mut self,
        message: Infallible,
        _state: &mut AppState,
    ) -> Task<SectionMessage<Infallible>> {
        match message {}
    }
}
