//! Canvas layer drawing the custom cursor.

use iced::{
    Point, Rectangle, Renderer, Theme,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
};
use iced_core::mouse;

use crate::core::cursor::{CursorTracker, DOT_RADIUS, RING_RADIUS};

/// Ring and dot overlay. Never captures events, so the page underneath
/// stays interactive.
pub struct CursorOverlay<'a> {
    tracker: &'a CursorTracker,
}

impl<'a> CursorOverlay<'a> {
    pub fn new(tracker: &'a CursorTracker) -> Self {
        Self { tracker }
    }
}

impl<Message> canvas::Program<Message> for CursorOverlay<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        if !self.tracker.is_enabled() {
            return Vec::new();
        }
        let mut frame = Frame::new(renderer, bounds.size());
        let color = theme.palette().primary;

        let ring = self.tracker.ring();
        let (x, y) = ring.position();
        let radius = RING_RADIUS * ring.scale.value().max(0.0);
        frame.stroke(
            &Path::circle(Point::new(x, y), radius),
            Stroke::default().with_width(2.0).with_color(color),
        );

        let (x, y) = self.tracker.dot().position();
        frame.fill(&Path::circle(Point::new(x, y), DOT_RADIUS), color);

        vec![frame.into_geometry()]
    }
}
