use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, row, text},
};
use time::OffsetDateTime;

use crate::{
    core::{
        content::{FOOTER_LINKS, OWNER_SHORT_NAME, TAGLINE, copyright},
        cursor::ElementRole,
        nav::NAV_ITEMS,
    },
    gui::{
        AppState,
        sections::{Section, SectionMessage},
        widgets::{accent, body, divider, hoverable, nav_button, social_links},
    },
};

#[derive(Debug, Clone)]
pub struct Footer {
    brand: &'static str,
    blurb: &'static str,
    copyright: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self::new(current_year())
    }
}

impl Footer {
    pub fn new(year: i32) -> Self {
        Self {
            brand: OWNER_SHORT_NAME,
            blurb: TAGLINE,
            copyright: copyright(year),
        }
    }
}

/// Local calendar year, or the UTC one when the local offset is unknown.
pub fn current_year() -> i32 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .year()
}

impl Section for Footer {
    type Message = Infallible;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, SectionMessage<Infallible>> {
        let brand = column![
            row![text(self.brand).size(22), accent(".", 1.0).size(22)],
            body(self.blurb, 1.0).size(14),
        ]
        .spacing(8)
        .width(Length::Fill);

        let links = row(NAV_ITEMS
            .into_iter()
            .map(|anchor| nav_button(anchor.label, anchor.section, button::text)))
        .spacing(4)
        .wrap();

        let legal = row(FOOTER_LINKS.into_iter().map(|label| {
            hoverable(body(label, 1.0).size(12), ElementRole::Text)
        }))
        .spacing(16);

        column![
            row![brand, social_links()].align_y(Center),
            links,
            divider(),
            row![
                body(self.copyright.as_str(), 1.0).size(12).width(Length::Fill),
                legal,
            ],
        ]
        .spacing(24)
        .padding([48, 48])
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
