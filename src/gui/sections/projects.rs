use iced::{
    Element, Length, Task, Theme,
    widget::{button, column, container, container::Style, row, text},
};
use tracing::debug;

use crate::{
    core::{
        catalog::{CategoryFilter, MORE_WORK_URL, Project, ProjectCatalog},
        content::PROJECTS_INTRO,
        cursor::ElementRole,
        reveal::SectionId,
    },
    gui::{
        AppState,
        sections::{PageEvent, Section, SectionMessage},
        widgets::{body, card, fade, heading, hoverable, reveal},
    },
};

const GRID_COLUMNS: usize = 3;

/// Filterable gallery.
#[derive(Debug, Clone, Default)]
pub struct Projects {
    catalog: ProjectCatalog,
    selected: CategoryFilter,
}

#[derive(Debug, Clone)]
pub enum ProjectsMessage {
    SelectCategory(CategoryFilter),
}

impl Projects {
    pub fn new(catalog: ProjectCatalog) -> Self {
        Self {
            catalog,
            selected: CategoryFilter::All,
        }
    }

    /// Projects shown under the selected tab.
    pub fn visible(&self) -> Vec<&'static Project> {
        self.catalog.filter_by(&self.selected)
    }
}

impl Section for Projects {
    type Message = ProjectsMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<ProjectsMessage>> {
        let p = |index| state.reveal.child_progress(SectionId::Projects, index, state.now);

        let intro = column![
            heading("My Projects", p(0)),
            body(PROJECTS_INTRO, p(0)).center().width(Length::Fill),
        ]
        .spacing(24);

        let tabs = row(self.catalog.tabs().into_iter().map(|(filter, label)| {
            let active = filter == self.selected;
            tab(filter, label, active)
        }))
        .spacing(8);

        let columns = if state.is_compact() { 1 } else { GRID_COLUMNS };
        let projects = self.visible();
        let grid: Element<'a, _> = if projects.is_empty() {
            body("No projects in this category yet.", 1.0).into()
        } else {
            column(projects.chunks(columns).map(|chunk| {
                row(chunk.iter().copied().map(project_card))
                    .spacing(24)
                    .into()
            }))
            .spacing(24)
            .into()
        };

        let more = hoverable(
            button(text("View More on Dribbble"))
                .padding([10, 20])
                .style(button::secondary)
                .on_press(PageEvent::OpenLink(MORE_WORK_URL).into()),
            ElementRole::Link,
        );

        column![
            reveal(intro, p(0)),
            reveal(container(tabs).center_x(Length::Fill), p(1)),
            reveal(grid, p(2)),
            reveal(container(more).center_x(Length::Fill), p(3)),
        ]
        .spacing(48)
        .padding([96, 48])
        .into()
    }

    fn update(
        &mut self,
        message: ProjectsMessage,
        _state: &mut AppState,
    ) -> Task<SectionMessage<ProjectsMessage>> {
        match message {
            ProjectsMessage::SelectCategory(filter) => {
                debug!(category = filter.key(), "project tab selected");
                self.selected = filter;
                Task::none()
            }
        }
    }
}

fn tab<'a>(
    filter: CategoryFilter,
    label: &'a str,
    active: bool,
) -> Element<'a, SectionMessage<ProjectsMessage>> {
    let style = if active {
        button::primary
    } else {
        button::text
    };
    hoverable(
        button(text(label))
            .padding([8, 16])
            .style(style)
            .on_press(SectionMessage::Local(ProjectsMessage::SelectCategory(filter))),
        ElementRole::Tab,
    )
}

fn project_card(project: &'static Project) -> Element<'static, SectionMessage<ProjectsMessage>> {
    let cover = hoverable(
        container(text(project.category.key().to_uppercase()).size(12))
            .center_x(Length::Fill)
            .center_y(160)
            .style(|theme: &Theme| {
                Style::default().background(fade(theme.palette().primary, 0.12))
            }),
        ElementRole::Image,
    );

    let tags = row(project
        .tags
        .iter()
        .map(|tag| {
            container(text(*tag).size(12))
                .padding([2, 8])
                .style(|theme: &Theme| {
                    Style::default()
                        .background(fade(theme.palette().primary, 0.1))
                        .color(theme.palette().primary)
                        .border(iced::border::rounded(8))
                })
                .into()
        }))
    .spacing(6)
    .wrap();

    let details = hoverable(
        button(text("View Details").size(14))
            .style(button::text)
            .on_press(PageEvent::OpenLink(project.link).into()),
        ElementRole::Link,
    );

    hoverable(
        card(
            column![
                cover,
                text(project.title).size(18),
                body(project.description, 1.0).size(14),
                tags,
                details,
            ]
            .spacing(12),
        ),
        ElementRole::Surface,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Category;

    #[test]
    fn test_visible_follows_selected_tab() {
        let mut projects = Projects::new(ProjectCatalog::builtin());
        assert_eq!(projects.visible().len(), 6);

        projects.selected = CategoryFilter::Only(Category::Mobile);
        let titles: Vec<_> = projects.visible().iter().map(|p| p.title).collect();
        assert_eq!(titles, ["Finance App Redesign", "Travel Companion App"]);
    }
}
