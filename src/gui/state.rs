use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::{
    config::Settings,
    core::{
        contact::Notification,
        content::HERO_DELAYS_MS,
        cursor::CursorTracker,
        layout::{PageLayout, Viewport},
        nav::{NavState, SmoothScroll},
        reveal::{DEFAULT_THRESHOLD, ENTRANCE_DURATION, RevealObserver, SectionId},
        theme::ThemeStore,
    },
};

/// Height of the fixed header bar.
pub const HEADER_HEIGHT: f32 = 72.0;

/// Height reserved for each section, in page order.
pub const SECTION_HEIGHTS: [(SectionId, f32); 5] = [
    (SectionId::Home, 820.0),
    (SectionId::About, 760.0),
    (SectionId::Skills, 1320.0),
    (SectionId::Projects, 1480.0),
    (SectionId::Contact, 960.0),
];

pub const FOOTER_HEIGHT: f32 = 240.0;

/// Below this window width the header collapses into the mobile menu.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Reported offsets this close to the last animated one belong to the animation.
const SCROLL_TOLERANCE: f32 = 1.0;

/// Upper bound on staggered children in any observed section.
const MAX_REVEAL_CHILDREN: usize = 12;

/// Sections with a scroll-triggered entrance. The hero animates on mount.
pub const OBSERVED_SECTIONS: [SectionId; 4] = [
    SectionId::About,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Contact,
];

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Page-wide state shared by every section view.
#[derive(Debug)]
pub struct AppState {
    pub theme: ThemeStore,
    pub cursor: CursorTracker,
    pub nav: NavState,
    pub reveal: RevealObserver,
    pub layout: PageLayout,
    pub viewport: Viewport,
    pub window_width: f32,
    pub scroll: Option<SmoothScroll>,
    /// Offset most recently requested by `scroll`.
    scroll_issued: Option<f32>,
    pub toasts: Vec<Toast>,
    pub cv_path: PathBuf,
    pub portrait_path: PathBuf,
    pub mounted_at: Instant,
    pub now: Instant,
    pub last_frame: Option<Instant>,
    next_toast_id: u64,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let now = Instant::now();
        let theme = ThemeStore::init(settings.theme_path(), settings.default_theme);
        let cursor = if settings.cursor {
            CursorTracker::for_user_agent(&settings.user_agent())
        } else {
            CursorTracker::new(false)
        };

        let mut reveal = RevealObserver::new();
        for section in OBSERVED_SECTIONS {
            reveal.observe(section, DEFAULT_THRESHOLD);
        }

        Self {
            theme,
            cursor,
            nav: NavState::new(),
            reveal,
            layout: PageLayout::stacked(&SECTION_HEIGHTS)
                .with_header_height(HEADER_HEIGHT)
                .with_footer_height(FOOTER_HEIGHT),
            viewport: Viewport::new(0.0, 0.0),
            window_width: 0.0,
            scroll: None,
            scroll_issued: None,
            toasts: Vec::new(),
            cv_path: settings.cv_path(),
            portrait_path: settings.portrait_path(),
            mounted_at: now,
            now,
            last_frame: None,
            next_toast_id: 0,
        }
    }

    /// Record a new viewport and let the reveal observer react to it.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Vec<SectionId> {
        self.viewport = viewport;
        self.nav.on_scroll(viewport.offset);
        self.reveal.on_viewport(&self.layout, &viewport, self.now)
    }

    /// A scroll offset reported by the page. Offsets the running smooth
    /// scroll did not request mean the user took over, which cancels it.
    pub fn on_scrolled(&mut self, viewport: Viewport) -> Vec<SectionId> {
        if self.scroll.is_some() {
            let driven = self
                .scroll_issued
                .is_some_and(|issued| (issued - viewport.offset).abs() <= SCROLL_TOLERANCE);
            if !driven {
                debug!(offset = viewport.offset, "smooth scroll interrupted");
                self.scroll = None;
                self.scroll_issued = None;
            }
        }
        self.set_viewport(viewport)
    }

    /// Begin an eased scroll from the current offset to `target`.
    pub fn start_scroll(&mut self, target: f32) {
        self.scroll = Some(SmoothScroll::new(self.viewport.offset, target, self.now));
        self.scroll_issued = None;
    }

    /// Offset the running smooth scroll wants at `now`, if any.
    pub fn step_scroll(&mut self, now: Instant) -> Option<f32> {
        let scroll = self.scroll?;
        let offset = scroll.offset_at(now);
        if scroll.is_finished(now) {
            self.scroll = None;
        }
        self.scroll_issued = Some(offset);
        Some(offset)
    }

    /// Whether the cursor overlay replaces the system cursor. Compact windows
    /// keep the system cursor.
    pub fn shows_custom_cursor(&self) -> bool {
        self.cursor.is_enabled() && !self.is_compact()
    }

    pub fn push_toast(&mut self, notification: Notification) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn is_compact(&self) -> bool {
        self.window_width < MOBILE_BREAKPOINT
    }

    /// Entrance progress of the `index`-th hero child, timed from mount.
    pub fn hero_progress(&self, index: usize) -> f32 {
        let delay = HERO_DELAYS_MS
            .get(index)
            .or(HERO_DELAYS_MS.last())
            .copied()
            .unwrap_or(0);
        let start = self.mounted_at + Duration::from_millis(delay);
        let elapsed = self.now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether anything on the page still needs animation frames.
    pub fn is_animating(&self) -> bool {
        self.scroll.is_some()
            || (self.shows_custom_cursor() && self.cursor.is_animating())
            || self.hero_progress(HERO_DELAYS_MS.len() - 1) < 1.0
            || self.reveal.is_animating(MAX_REVEAL_CHILDREN, self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::TempDir::new().unwrap();
        let settings = Settings {
            theme_file: Some(dir.path().join("theme.toml")),
            user_agent: Some("Desktop".into()),
            ..Settings::default()
        };
        (dir, AppState::new(&settings))
    }

    #[test]
    fn test_viewport_drives_nav_and_reveal() {
        let (_dir, mut state) = state();
        assert!(state.set_viewport(Viewport::new(0.0, 800.0)).is_empty());
        assert!(!state.nav.is_scrolled());

        let revealed = state.set_viewport(Viewport::new(400.0, 800.0));
        assert_eq!(revealed, vec![SectionId::About]);
        assert!(state.nav.is_scrolled());
    }

    #[test]
    fn test_user_scroll_cancels_smooth_scroll() {
        let (_dir, mut state) = state();
        state.set_viewport(Viewport::new(0.0, 800.0));
        state.start_scroll(1500.0);

        let issued = state
            .step_scroll(state.now + Duration::from_millis(100))
            .unwrap();
        state.on_scrolled(Viewport::new(issued, 800.0));
        assert!(state.scroll.is_some());

        state.on_scrolled(Viewport::new(issued + 120.0, 800.0));
        assert!(state.scroll.is_none());
        assert_eq!(state.step_scroll(state.now + Duration::from_millis(200)), None);
    }

    #[test]
    fn test_scroll_before_first_frame_cancels() {
        let (_dir, mut state) = state();
        state.set_viewport(Viewport::new(0.0, 800.0));
        state.start_scroll(1500.0);
        state.on_scrolled(Viewport::new(40.0, 800.0));
        assert!(state.scroll.is_none());
    }

    #[test]
    fn test_smooth_scroll_finishes_on_target() {
        let (_dir, mut state) = state();
        state.set_viewport(Viewport::new(0.0, 800.0));
        state.start_scroll(1500.0);
        let end = state.now + Duration::from_secs(1);
        assert_eq!(state.step_scroll(end), Some(1500.0));
        assert!(state.scroll.is_none());
    }

    #[test]
    fn test_custom_cursor_only_on_wide_windows() {
        let (_dir, mut state) = state();
        state.window_width = 1280.0;
        assert!(state.shows_custom_cursor());

        state.window_width = 600.0;
        assert!(!state.shows_custom_cursor());
    }

    #[test]
    fn test_toasts_dismiss_by_id() {
        let (_dir, mut state) = state();
        let first = state.push_toast(Notification::message_sent());
        let second = state.push_toast(Notification::error("Oops", "try again"));
        state.dismiss_toast(first);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, second);
    }

    #[test]
    fn test_hero_children_enter_in_order() {
        let (_dir, mut state) = state();
        state.now = state.mounted_at + Duration::from_millis(300);
        assert!((state.hero_progress(0) - 0.6).abs() < 1e-4);
        assert_eq!(state.hero_progress(3), 0.0);
        assert!(state.is_animating());
    }
}
