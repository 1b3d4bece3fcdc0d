use std::path::PathBuf;
use std::time::{Duration, Instant};

use iced::{
    Element, Length, Size, Subscription, Task, Theme, clipboard, mouse,
    widget::{
        canvas, column, container, mouse_area, operation::scroll_to, scrollable, stack, text,
        toggler, tooltip, Id,
    },
    window,
};
use rfd::AsyncFileDialog;
use tracing::{debug, info, warn};

use crate::{
    config::Settings,
    core::{
        catalog::ProjectCatalog,
        contact::Notification,
        content::CV_ASSET,
        cursor::ElementRole,
        layout::Viewport,
        reveal::SectionId,
        theme::ThemeMode,
    },
    gui::{
        AppState, Message,
        cursor::CursorOverlay,
        sections::{
            PageEvent, Section, SectionMessage, about::About, contact::Contact, footer::Footer,
            header::Header, hero::Hero, lift_static, projects::Projects, skills::Skills,
        },
        state::FOOTER_HEIGHT,
        widgets::toasts,
    },
};

/// Initial window size; the viewport is derived from it until the first resize.
const WINDOW_SIZE: Size = Size::new(1280.0, 800.0);

/// How long a toast stays up.
const TOAST_DURATION: Duration = Duration::from_secs(4);

fn page_id() -> Id {
    Id::new("page")
}

pub struct FolioApp {
    state: AppState,
    header: Header,
    hero: Hero,
    about: About,
    skills: Skills,
    projects: Projects,
    contact: Contact,
    footer: Footer,
}

impl FolioApp {
    pub fn boot(settings: Settings) -> (Self, Task<Message>) {
        let mut state = AppState::new(&settings);
        state.window_width = WINDOW_SIZE.width;
        state.set_viewport(Viewport::new(0.0, WINDOW_SIZE.height));
        info!(
            theme = %state.theme.mode(),
            cursor = state.cursor.is_enabled(),
            "portfolio started"
        );

        let app = Self {
            state,
            header: Header,
            hero: Hero,
            about: About,
            skills: Skills,
            projects: Projects::new(ProjectCatalog::builtin()),
            contact: Contact::default(),
            footer: Footer::default(),
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("{} | Portfolio", crate::core::content::OWNER_NAME)
    }

    pub fn theme(&self) -> Theme {
        match self.state.theme.mode() {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(SectionMessage::Local(message)) => self
                .header
                .update(message, &mut self.state)
                .map(Message::Header),
            Message::Projects(SectionMessage::Local(message)) => self
                .projects
                .update(message, &mut self.state)
                .map(Message::Projects),
            Message::Contact(SectionMessage::Local(message)) => self
                .contact
                .update(message, &mut self.state)
                .map(Message::Contact),
            Message::Header(SectionMessage::Page(event))
            | Message::Projects(SectionMessage::Page(event))
            | Message::Contact(SectionMessage::Page(event))
            | Message::Page(event) => self.on_page_event(event),
            Message::Scrolled { offset, height } => {
                self.state.now = Instant::now();
                let revealed = self.state.on_scrolled(Viewport::new(offset, height));
                if !revealed.is_empty() {
                    debug!(?revealed, offset, "sections revealed");
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.state.window_width = size.width;
                if !self.state.is_compact() {
                    self.state.nav.close_menu();
                }
                let offset = self.state.viewport.offset;
                self.state.set_viewport(Viewport::new(offset, size.height));
                Task::none()
            }
            Message::PointerMoved(point) => {
                self.state.cursor.on_pointer_move(point.x, point.y);
                Task::none()
            }
            Message::Frame(now) => self.on_frame(now),
            Message::ToggleTheme => {
                match self.state.theme.toggle() {
                    Ok(mode) => debug!(%mode, "theme toggled"),
                    Err(error) => warn!(%error, "theme preference not saved"),
                }
                Task::none()
            }
            Message::ToastExpired(id) => {
                self.state.dismiss_toast(id);
                Task::none()
            }
            Message::CvSaved(Ok(Some(path))) => {
                info!(path = %path.display(), "CV saved");
                self.notify(Notification::success(
                    "CV downloaded",
                    format!("Saved to {}", path.display()),
                ))
            }
            Message::CvSaved(Ok(None)) => Task::none(),
            Message::CvSaved(Err(error)) => {
                warn!(%error, "CV download failed");
                self.notify(Notification::error("Download failed", error))
            }
            Message::CloseRequested(id) => {
                self.state.reveal.detach_all();
                info!("window closed");
                window::close(id)
            }
        }
    }

    fn on_page_event(&mut self, event: PageEvent) -> Task<Message> {
        match event {
            PageEvent::ScrollTo(section) => {
                self.scroll_to(section);
                Task::none()
            }
            PageEvent::HoverEnter(role) => {
                self.state.cursor.on_hover_enter(role);
                Task::none()
            }
            PageEvent::HoverExit(role) => {
                self.state.cursor.on_hover_exit(role);
                Task::none()
            }
            PageEvent::OpenLink(url) => {
                debug!(url, "link copied");
                Task::batch([
                    clipboard::write(url.to_string()),
                    self.notify(Notification::success("Link copied", url)),
                ])
            }
            PageEvent::DownloadCv => {
                Task::perform(save_cv(self.state.cv_path.clone()), Message::CvSaved)
            }
            PageEvent::Notify(notification) => self.notify(notification),
        }
    }

    fn scroll_to(&mut self, section: SectionId) {
        let Some(target) = self
            .state
            .layout
            .anchor_offset(section, self.state.viewport.height)
        else {
            warn!(%section, "no such anchor");
            return;
        };
        self.state.now = Instant::now();
        debug!(%section, target, "smooth scroll");
        self.state.start_scroll(target);
    }

    fn on_frame(&mut self, now: Instant) -> Task<Message> {
        let elapsed = self
            .state
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.state.now = now;
        self.state.last_frame = Some(now);
        self.state.cursor.tick(elapsed);

        let task = match self.state.step_scroll(now) {
            Some(y) => scroll_to(page_id(), scrollable::AbsoluteOffset { x: 0.0, y }),
            None => Task::none(),
        };

        // Frames stop when idle; the next burst starts from zero elapsed.
        if !self.state.is_animating() {
            self.state.last_frame = None;
        }
        task
    }

    fn notify(&mut self, notification: Notification) -> Task<Message> {
        let id = self.state.push_toast(notification);
        Task::perform(tokio::time::sleep(TOAST_DURATION), move |_| {
            Message::ToastExpired(id)
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let state = &self.state;

        let sections = column![
            band(state, SectionId::Home, self.hero.view(state).map(lift_static)),
            band(state, SectionId::About, self.about.view(state).map(lift_static)),
            band(state, SectionId::Skills, self.skills.view(state).map(lift_static)),
            band(
                state,
                SectionId::Projects,
                self.projects.view(state).map(Message::Projects)
            ),
            band(
                state,
                SectionId::Contact,
                self.contact.view(state).map(Message::Contact)
            ),
            container(self.footer.view(state).map(lift_static))
                .width(Length::Fill)
                .height(FOOTER_HEIGHT),
        ];

        let page = scrollable(sections)
            .id(page_id())
            .on_scroll(|viewport| Message::Scrolled {
                offset: viewport.absolute_offset().y,
                height: viewport.bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill);

        let header = self.header.view(state).map(Message::Header);

        let toast_layer = container(toasts(&state.toasts))
            .align_right(Length::Fill)
            .align_bottom(Length::Fill)
            .padding(24);

        let mut layers = stack![page, header, theme_switch(state.theme.mode()), toast_layer];
        if state.shows_custom_cursor() {
            layers = layers.push(
                canvas(CursorOverlay::new(&state.cursor))
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        let root = mouse_area(layers).on_move(Message::PointerMoved);
        if state.shows_custom_cursor() {
            root.interaction(mouse::Interaction::Hidden).into()
        } else {
            root.into()
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let frames = if self.state.is_animating() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };
        Subscription::batch([
            frames,
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
            window::close_requests().map(Message::CloseRequested),
        ])
    }
}

/// Give a section the height the page layout reserves for it.
fn band<'a>(
    state: &AppState,
    section: SectionId,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let height = state
        .layout
        .extent(section)
        .map_or(Length::Shrink, |extent| Length::Fixed(extent.height));
    container(content)
        .center_x(Length::Fill)
        .center_y(height)
        .clip(true)
        .into()
}

/// Floating light/dark switch.
fn theme_switch<'a>(mode: ThemeMode) -> Element<'a, Message> {
    let switch = tooltip(
        toggler(mode.is_dark())
            .label("Dark mode")
            .on_toggle(|_| Message::ToggleTheme),
        text(mode.switch_hint()).size(12),
        tooltip::Position::Top,
    )
    .gap(8);
    let switch = mouse_area(switch)
        .on_enter(PageEvent::HoverEnter(ElementRole::Toggle).into())
        .on_exit(PageEvent::HoverExit(ElementRole::Toggle).into());
    container(switch)
        .align_left(Length::Fill)
        .align_bottom(Length::Fill)
        .padding(24)
        .into()
}

/// Ask where to save the CV and copy it there. `Ok(None)` when cancelled.
async fn save_cv(source: PathBuf) -> Result<Option<PathBuf>, String> {
    let Some(handle) = AsyncFileDialog::new()
        .set_title("Save CV")
        .set_file_name(CV_ASSET)
        .add_filter("PDF", &["pdf"])
        .save_file()
        .await
    else {
        return Ok(None);
    };
    let target = handle.path().to_path_buf();
    tokio::fs::copy(&source, &target)
        .await
        .map_err(|error| format!("{}: {error}", source.display()))?;
    Ok(Some(target))
}

pub fn run(settings: Settings) -> iced::Result {
    iced::application(
        move || FolioApp::boot(settings.clone()),
        FolioApp::update,
        FolioApp::view,
    )
    .title(FolioApp::title)
    .theme(FolioApp::theme)
    .subscription(FolioApp::subscription)
    .window(window::Settings {
        size: WINDOW_SIZE,
        exit_on_close_request: false,
        ..window::Settings::default()
    })
    .run()
}
