use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{column, container, image, row, text},
};

use crate::{
    core::{content::ABOUT, reveal::SectionId},
    gui::{
        AppState,
        sections::{Section, SectionMessage},
        widgets::{accent, body, card, divider, heading, reveal},
    },
};

#[derive(Debug, Clone, Default)]
pub struct About;

impl Section for About {
    type Message = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Infallible>> {
        let p = |index| state.reveal.child_progress(SectionId::About, index, state.now);
        let progress = p(1);

        let facts = column(ABOUT.facts.chunks(2).map(|pair| {
            row(pair.iter().map(|(label, value)| {
                column![accent(*label, progress).size(12), body(*value, progress)]
                    .width(Length::Fill)
                    .into()
            }))
            .spacing(16)
            .into()
        }))
        .spacing(12);

        let stats = row(ABOUT.stats.iter().map(|(figure, label)| {
            column![
                accent(*figure, progress).size(32),
                body(*label, progress).size(14),
            ]
            .into()
        }))
        .spacing(32);

        let details = column![
            text(ABOUT.title).size(26),
            body(ABOUT.paragraphs[0], progress),
            body(ABOUT.paragraphs[1], progress),
            facts,
            divider(),
            stats,
        ]
        .spacing(20)
        .width(Length::FillPortion(2));

        let portrait = container(image(state.portrait_path.as_path()))
            .width(Length::FillPortion(1))
            .height(400);

        let content = if state.is_compact() {
            Element::from(column![portrait, details].spacing(32))
        } else {
            row![portrait, details].spacing(48).into()
        };

        column![
            reveal(heading(ABOUT.heading, p(0)), p(0)),
            reveal(card(content), progress),
        ]
        .spacing(48)
        .padding([96, 48])
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
