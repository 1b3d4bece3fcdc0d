use std::time::{Duration, Instant};

use crate::core::reveal::SectionId;

/// Offset past which the header switches to its solid style.
pub const SCROLLED_THRESHOLD: f32 = 20.0;

/// Length of a smooth scroll to an anchor.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// A navigation entry and the section it scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub label: &'static str,
    pub section: SectionId,
}

impl Anchor {
    pub const fn new(label: &'static str, section: SectionId) -> Self {
        Self { label, section }
    }

    /// `#home`, `#about`, ...
    pub fn href(&self) -> String {
        self.section.to_string()
    }
}

pub const NAV_ITEMS: [Anchor; 5] = [
    Anchor::new("Home", SectionId::Home),
    Anchor::new("About", SectionId::About),
    Anchor::new("Skills", SectionId::Skills),
    Anchor::new("Projects", SectionId::Projects),
    Anchor::new("Contact", SectionId::Contact),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    is_scrolled: bool,
    is_mobile_menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.is_mobile_menu_open
    }

    /// Recompute the header style from the current scroll offset.
    pub fn on_scroll(&mut self, offset: f32) {
        self.is_scrolled = offset > SCROLLED_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.is_mobile_menu_open = false;
    }

    /// Activate a navigation entry: the menu closes and the caller scrolls
    /// to the returned anchor.
    pub fn select(&mut self, anchor: Anchor) -> Anchor {
        self.close_menu();
        anchor
    }
}

/// Eased scroll from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self::with_duration(from, to, started, SMOOTH_SCROLL_DURATION)
    }

    pub fn with_duration(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`, easing out of the motion.
    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut nav = NavState::new();
        nav.on_scroll(20.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(20.5);
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_select_closes_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.is_mobile_menu_open());
        let target = nav.select(NAV_ITEMS[3]);
        assert_eq!(target.section, SectionId::Projects);
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn test_nav_hrefs() {
        let hrefs: Vec<String> = NAV_ITEMS.iter().map(Anchor::href).collect();
        assert_eq!(hrefs, ["#home", "#about", "#skills", "#projects", "#contact"]);
    }

    #[test]
    fn test_smooth_scroll_endpoints() {
        let t0 = Instant::now();
        let scroll = SmoothScroll::new(100.0, 900.0, t0);
        assert_eq!(scroll.offset_at(t0), 100.0);
        let mid = scroll.offset_at(t0 + SMOOTH_SCROLL_DURATION / 2);
        assert!(mid > 500.0 && mid < 900.0);
        assert_eq!(scroll.offset_at(t0 + SMOOTH_SCROLL_DURATION), 900.0);
        assert!(scroll.is_finished(t0 + SMOOTH_SCROLL_DURATION));
    }
}
