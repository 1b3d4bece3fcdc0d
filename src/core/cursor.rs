//! Custom cursor overlay state.
//!
//! The pointer position is overwritten on every move. Interactivity comes from
//! the semantic roles of the elements under the pointer, which the view
//! reports as enter/exit pairs. Nested and adjacent elements can report in any
//! order, so every entered role is kept until its matching exit. Two springs
//! (a ring and a dot) chase the pointer at different speeds.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::debug;

static TOUCH_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("touch agent pattern is valid")
});

/// Largest integration step; longer frames are split into sub-steps.
const MAX_STEP: f32 = 1.0 / 480.0;

/// Ring radius in logical pixels, before hover scaling.
pub const RING_RADIUS: f32 = 16.0;
/// Dot radius in logical pixels.
pub const DOT_RADIUS: f32 = 4.0;
/// Ring scale while over an interactive element.
pub const RING_HOVER_SCALE: f32 = 1.5;

/// Whether `user_agent` looks like a touch or mobile device.
pub fn is_touch_device(user_agent: &str) -> bool {
    TOUCH_AGENT.is_match(user_agent)
}

/// Semantic role of an element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Button,
    Link,
    Tab,
    Toggle,
    Input,
    Text,
    Image,
    Surface,
}

impl ElementRole {
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            ElementRole::Button
                | ElementRole::Link
                | ElementRole::Tab
                | ElementRole::Toggle
                | ElementRole::Input
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub is_over_interactive: bool,
}

/// Mass-spring-damper parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringConfig {
    pub const RING: SpringConfig = SpringConfig {
        mass: 0.1,
        stiffness: 800.0,
        damping: 30.0,
    };

    pub const DOT: SpringConfig = SpringConfig {
        mass: 0.05,
        stiffness: 1000.0,
        damping: 20.0,
    };
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn step(&mut self, target: f32, dt: f32) {
        let SpringConfig {
            mass,
            stiffness,
            damping,
        } = self.config;
        let force = -stiffness * (self.value - target) - damping * self.velocity;
        self.velocity += force / mass * dt;
        self.value += self.velocity * dt;
    }

    pub fn is_settled(&self, target: f32) -> bool {
        (self.value - target).abs() < 0.01 && self.velocity.abs() < 0.01
    }
}

/// A spring per axis plus a scale spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower {
    pub x: Spring,
    pub y: Spring,
    pub scale: Spring,
}

impl Follower {
    fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(config, 0.0),
            y: Spring::new(config, 0.0),
            scale: Spring::new(config, 1.0),
        }
    }

    fn step(&mut self, x: f32, y: f32, scale: f32, dt: f32) {
        self.x.step(x, dt);
        self.y.step(y, dt);
        self.scale.step(scale, dt);
    }

    fn is_settled(&self, x: f32, y: f32, scale: f32) -> bool {
        self.x.is_settled(x) && self.y.is_settled(y) && self.scale.is_settled(scale)
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }
}

#[derive(Debug, Clone)]
pub struct CursorTracker {
    enabled: bool,
    pointer: PointerState,
    /// Roles the pointer is inside, in enter order.
    hovered: Vec<ElementRole>,
    ring: Follower,
    dot: Follower,
}

impl CursorTracker {
    /// Build a tracker for the given environment. Touch devices get a
    /// permanently disabled tracker; this is decided once, here.
    pub fn for_user_agent(user_agent: &str) -> Self {
        let enabled = !is_touch_device(user_agent);
        debug!(enabled, "cursor tracker initialised");
        Self::new(enabled)
    }

    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pointer: PointerState::default(),
            hovered: Vec::new(),
            ring: Follower::new(SpringConfig::RING),
            dot: Follower::new(SpringConfig::DOT),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Most recently entered role still under the pointer.
    pub fn hovered(&self) -> Option<ElementRole> {
        self.hovered.last().copied()
    }

    pub fn ring(&self) -> &Follower {
        &self.ring
    }

    pub fn dot(&self) -> &Follower {
        &self.dot
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        self.pointer.x = x;
        self.pointer.y = y;
    }

    /// The pointer entered an element with `role`.
    pub fn on_hover_enter(&mut self, role: ElementRole) {
        if !self.enabled {
            return;
        }
        self.hovered.push(role);
        self.refresh_interactive();
    }

    /// The pointer left an element with `role`. An exit without a matching
    /// enter is ignored.
    pub fn on_hover_exit(&mut self, role: ElementRole) {
        if !self.enabled {
            return;
        }
        if let Some(index) = self.hovered.iter().rposition(|entered| *entered == role) {
            self.hovered.remove(index);
        }
        self.refresh_interactive();
    }

    fn refresh_interactive(&mut self) {
        self.pointer.is_over_interactive =
            self.hovered.iter().copied().any(ElementRole::is_interactive);
    }

    fn ring_target_scale(&self) -> f32 {
        if self.pointer.is_over_interactive {
            RING_HOVER_SCALE
        } else {
            1.0
        }
    }

    /// Advance both springs by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.enabled {
            return;
        }
        let PointerState { x, y, .. } = self.pointer;
        let scale = self.ring_target_scale();
        let mut remaining = elapsed.as_secs_f32().min(0.25);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP);
            self.ring.step(x, y, scale, dt);
            self.dot.step(x, y, 1.0, dt);
            remaining -= dt;
        }
    }

    /// Whether the overlay still needs animation frames.
    pub fn is_animating(&self) -> bool {
        let PointerState { x, y, .. } = self.pointer;
        self.enabled
            && !(self.ring.is_settled(x, y, self.ring_target_scale())
                && self.dot.is_settled(x, y, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles() {
        assert!(ElementRole::Link.is_interactive());
        assert!(ElementRole::Tab.is_interactive());
        assert!(!ElementRole::Image.is_interactive());
        assert!(!ElementRole::Surface.is_interactive());
    }

    #[test]
    fn test_late_exit_of_neighbour_keeps_link_hovered() {
        let mut tracker = CursorTracker::new(true);
        tracker.on_hover_enter(ElementRole::Link);
        // Moving left: the new entry reports before the old one leaves.
        tracker.on_hover_enter(ElementRole::Link);
        tracker.on_hover_exit(ElementRole::Link);
        assert!(tracker.pointer().is_over_interactive);

        tracker.on_hover_exit(ElementRole::Link);
        assert!(!tracker.pointer().is_over_interactive);
        assert_eq!(tracker.hovered(), None);
    }

    #[test]
    fn test_outer_surface_does_not_mask_inner_link() {
        let mut tracker = CursorTracker::new(true);
        tracker.on_hover_enter(ElementRole::Link);
        tracker.on_hover_enter(ElementRole::Surface);
        assert!(tracker.pointer().is_over_interactive);

        tracker.on_hover_exit(ElementRole::Link);
        assert!(!tracker.pointer().is_over_interactive);
        assert_eq!(tracker.hovered(), Some(ElementRole::Surface));
    }

    #[test]
    fn test_unmatched_exit_is_ignored() {
        let mut tracker = CursorTracker::new(true);
        tracker.on_hover_enter(ElementRole::Button);
        tracker.on_hover_exit(ElementRole::Tab);
        assert!(tracker.pointer().is_over_interactive);
    }

    #[test]
    fn test_spring_converges() {
        let mut spring = Spring::new(SpringConfig::RING, 0.0);
        for _ in 0..480 {
            spring.step(100.0, MAX_STEP);
        }
        assert!(spring.is_settled(100.0));
    }

    #[test]
    fn test_dot_leads_ring() {
        let mut tracker = CursorTracker::new(true);
        tracker.on_pointer_move(200.0, 0.0);
        tracker.tick(Duration::from_millis(16));
        let (dot_x, _) = tracker.dot().position();
        let (ring_x, _) = tracker.ring().position();
        assert!(dot_x > ring_x);
        assert!(tracker.is_animating());
    }
}
