//! Vertical page geometry.
//!
//! Sections are stacked top to bottom with fixed heights, so every anchor has
//! a known scroll offset and every section a known extent to intersect with
//! the viewport.

use crate::core::reveal::SectionId;

/// Vertical span of one section in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub section: SectionId,
    pub top: f32,
    pub height: f32,
}

impl SectionExtent {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Fraction of this section that lies inside `viewport`, in `[0, 1]`.
    pub fn intersection_ratio(&self, viewport: &Viewport) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let visible_top = self.top.max(viewport.offset);
        let visible_bottom = self.bottom().min(viewport.bottom());
        let overlap = (visible_bottom - visible_top).max(0.0);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

/// Visible window of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(offset: f32, height: f32) -> Self {
        Self {
            offset: offset.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.offset + self.height
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    extents: Vec<SectionExtent>,
    header_height: f32,
    footer_height: f32,
}

impl PageLayout {
    /// Stack `sections` in order, the first one starting at the top of the page.
    pub fn stacked(sections: &[(SectionId, f32)]) -> Self {
        let mut top = 0.0;
        let extents = sections
            .iter()
            .map(|&(section, height)| {
                let extent = SectionExtent {
                    section,
                    top,
                    height,
                };
                top += height;
                extent
            })
            .collect();
        Self {
            extents,
            header_height: 0.0,
            footer_height: 0.0,
        }
    }

    /// Reserve room for a fixed header when scrolling to an anchor.
    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = height.max(0.0);
        self
    }

    /// Unobserved content below the last section.
    pub fn with_footer_height(mut self, height: f32) -> Self {
        self.footer_height = height.max(0.0);
        self
    }

    pub fn extents(&self) -> &[SectionExtent] {
        &self.extents
    }

    pub fn extent(&self, section: SectionId) -> Option<&SectionExtent> {
        self.extents.iter().find(|extent| extent.section == section)
    }

    pub fn total_height(&self) -> f32 {
        self.extents.last().map(SectionExtent::bottom).unwrap_or(0.0) + self.footer_height
    }

    /// Largest offset the page can be scrolled to for a viewport of `height`.
    pub fn max_offset(&self, viewport_height: f32) -> f32 {
        (self.total_height() - viewport_height).max(0.0)
    }

    /// Scroll offset that brings `section` to the top of a viewport of
    /// `viewport_height`, or `None` when the section is not on the page.
    pub fn anchor_offset(&self, section: SectionId, viewport_height: f32) -> Option<f32> {
        self.extent(section).map(|extent| {
            (extent.top - self.header_height).clamp(0.0, self.max_offset(viewport_height))
        })
    }

    /// Section whose extent contains the middle of the viewport.
    pub fn section_at(&self, viewport: &Viewport) -> Option<SectionId> {
        let probe = viewport.offset + viewport.height / 2.0;
        self.extents
            .iter()
            .find(|extent| probe >= extent.top && probe < extent.bottom())
            .map(|extent| extent.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::stacked(&[
            (SectionId::Home, 800.0),
            (SectionId::About, 600.0),
            (SectionId::Skills, 1000.0),
        ])
    }

    #[test]
    fn test_stacked_extents() {
        let layout = layout();
        let about = layout.extent(SectionId::About).unwrap();
        assert_eq!(about.top, 800.0);
        assert_eq!(about.bottom(), 1400.0);
        assert_eq!(layout.total_height(), 2400.0);
    }

    #[test]
    fn test_intersection_ratio() {
        let about = *layout().extent(SectionId::About).unwrap();
        assert_eq!(about.intersection_ratio(&Viewport::new(0.0, 800.0)), 0.0);
        assert_eq!(about.intersection_ratio(&Viewport::new(0.0, 920.0)), 0.2);
        assert_eq!(about.intersection_ratio(&Viewport::new(700.0, 2000.0)), 1.0);
    }

    #[test]
    fn test_anchor_offset_clamps_to_scroll_range() {
        let layout = layout().with_header_height(80.0);
        assert_eq!(layout.anchor_offset(SectionId::Home, 800.0), Some(0.0));
        assert_eq!(layout.anchor_offset(SectionId::About, 800.0), Some(720.0));
        assert_eq!(layout.anchor_offset(SectionId::Skills, 800.0), Some(1320.0));
        assert_eq!(layout.anchor_offset(SectionId::Skills, 1500.0), Some(900.0));
        assert_eq!(layout.anchor_offset(SectionId::Contact, 800.0), None);
    }

    #[test]
    fn test_footer_extends_scroll_range() {
        let layout = layout().with_footer_height(200.0);
        assert_eq!(layout.total_height(), 2600.0);
        assert_eq!(layout.max_offset(800.0), 1800.0);
        assert_eq!(layout.section_at(&Viewport::new(2200.0, 400.0)), None);
    }

    #[test]
    fn test_section_at() {
        let layout = layout();
        assert_eq!(layout.section_at(&Viewport::new(0.0, 800.0)), Some(SectionId::Home));
        assert_eq!(layout.section_at(&Viewport::new(600.0, 800.0)), Some(SectionId::About));
    }
}
