use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{column, progress_bar, row, text},
};

use crate::{
    core::{
        content::{DESIGN_SKILLS, SERVICES, SKILLS_INTRO, Service, Skill, TOOL_SKILLS},
        cursor::ElementRole,
        reveal::SectionId,
    },
    gui::{
        AppState,
        sections::{Section, SectionMessage},
        widgets::{body, card, heading, hoverable, reveal},
    },
};

const SERVICE_COLUMNS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct Skills;

impl Section for Skills {
    type Message = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Infallible>> {
        let p = |index| state.reveal.child_progress(SectionId::Skills, index, state.now);

        let intro = column![
            heading("Skills & Services", p(0)),
            body(SKILLS_INTRO, p(0)).center().width(Length::Fill),
        ]
        .spacing(24);

        let bars_progress = p(1);
        let expertise = row![
            card(skill_list("Design Expertise", &DESIGN_SKILLS, bars_progress)),
            card(skill_list("Tools & Software", &TOOL_SKILLS, bars_progress)),
        ]
        .spacing(32);

        let columns = if state.is_compact() { 1 } else { SERVICE_COLUMNS };
        let services_progress = p(2);
        let all_services: &'static [Service] = &SERVICES;
        let services = column(all_services.chunks(columns).map(|chunk| {
            row(chunk
                .iter()
                .map(|service| service_card(service, services_progress)))
            .spacing(24)
            .into()
        }))
        .spacing(24);

        column![
            reveal(intro, p(0)),
            reveal(
                column![text("Design Skills").size(26), expertise]
                    .spacing(32)
                    .align_x(Center),
                bars_progress,
            ),
            reveal(
                column![text("Services I Offer").size(26), services]
                    .spacing(32)
                    .align_x(Center),
                services_progress,
            ),
        ]
        .spacing(64)
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

/// Skill bars fill up as the group enters.
fn skill_list<'a>(
    title: &'a str,
    skills: &'static [Skill],
    progress: f32,
) -> Element<'a, SectionMessage<Infallible>> {
    let rows = skills.iter().map(|skill| {
        column![
            row![
                text(skill.name).width(Length::Fill),
                text(format!("{}%", skill.value)).size(14),
            ],
            progress_bar(0.0..=100.0, f32::from(skill.value) * progress).girth(8),
        ]
        .spacing(8)
        .into()
    });
    column![text(title).size(20), column(rows).spacing(24)]
        .spacing(24)
        .width(Length::Fill)
        .into()
}

fn service_card(
    service: &'static Service,
    progress: f32,
) -> Element<'static, SectionMessage<Infallible>> {
    hoverable(
        card(
            column![
                text(service.title).size(18),
                body(service.description, progress).size(14).center(),
            ]
            .spacing(8)
            .align_x(Center),
        ),
        ElementRole::Surface,
    )
}
