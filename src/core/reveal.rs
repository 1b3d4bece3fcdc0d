//! Scroll-triggered entrance animations.
//!
//! Each observed section owns an [`ObservableReveal`], a one-way latch that
//! flips to visible the first time enough of the section enters the viewport.
//! A single [`RevealObserver`] evaluates all latches against the viewport.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::core::layout::{PageLayout, Viewport};

/// Fraction of a section that must be on screen before it reveals.
pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Duration of one child's entrance transition.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(500);

/// Offset a revealed child travels upward while fading in.
pub const ENTRANCE_RISE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Stable in-page anchor id, without the leading `#`.
    pub fn anchor_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        SectionId::ALL
            .into_iter()
            .find(|section| section.anchor_id() == id)
    }

    /// Delay between consecutive children entering.
    pub fn stagger_step(self) -> Duration {
        match self {
            SectionId::About => Duration::from_millis(200),
            _ => Duration::from_millis(100),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.anchor_id())
    }
}

/// One-way visibility latch for a single section.
#[derive(Debug, Clone)]
pub struct ObservableReveal {
    threshold: f32,
    stagger: Duration,
    observing: bool,
    revealed_at: Option<Instant>,
}

impl ObservableReveal {
    pub fn new(threshold: f32, stagger: Duration) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            stagger,
            observing: true,
            revealed_at: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.revealed_at.is_some()
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn revealed_at(&self) -> Option<Instant> {
        self.revealed_at
    }

    /// Feed an intersection ratio. Returns `true` only on the call that
    /// latches the section visible; observation stops afterwards.
    pub fn observe(&mut self, ratio: f32, now: Instant) -> bool {
        if !self.observing || ratio <= 0.0 || ratio < self.threshold {
            return false;
        }
        self.observing = false;
        self.revealed_at = Some(now);
        true
    }

    /// Stop observing without revealing.
    pub fn detach(&mut self) {
        self.observing = false;
    }

    pub fn stagger_delay(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }

    /// Entrance progress of the `index`-th child, from 0 (hidden) to 1 (settled).
    pub fn child_progress(&self, index: usize, now: Instant) -> f32 {
        let Some(revealed_at) = self.revealed_at else {
            return 0.0;
        };
        let start = revealed_at + self.stagger_delay(index);
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether any of the first `children` children is still animating.
    pub fn is_animating(&self, children: usize, now: Instant) -> bool {
        self.is_visible()
            && children > 0
            && self.child_progress(children - 1, now) < 1.0
    }
}

/// Shared observer driving every section's latch.
#[derive(Debug, Clone, Default)]
pub struct RevealObserver {
    latches: BTreeMap<SectionId, ObservableReveal>,
}

impl RevealObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `section`. Re-observing an existing latch keeps its state.
    pub fn observe(&mut self, section: SectionId, threshold: f32) -> &mut Self {
        self.latches
            .entry(section)
            .or_insert_with(|| ObservableReveal::new(threshold, section.stagger_step()));
        self
    }

    /// Evaluate every observing latch against `viewport`.
    ///
    /// Sections missing from `layout` are skipped. Returns the sections that
    /// became visible on this call.
    pub fn on_viewport(
        &mut self,
        layout: &PageLayout,
        viewport: &Viewport,
        now: Instant,
    ) -> Vec<SectionId> {
        let mut revealed = Vec::new();
        for (section, latch) in self.latches.iter_mut() {
            if !latch.is_observing() {
                continue;
            }
            let Some(extent) = layout.extent(*section) else {
                trace!(%section, "reveal target not laid out, skipping");
                continue;
            };
            let ratio = extent.intersection_ratio(viewport);
            if latch.observe(ratio, now) {
                debug!(%section, ratio, "section revealed");
                revealed.push(*section);
            }
        }
        revealed
    }

    pub fn latch(&self, section: SectionId) -> Option<&ObservableReveal> {
        self.latches.get(&section)
    }

    /// Visibility of `section`. Sections that are not observed count as visible.
    pub fn is_visible(&self, section: SectionId) -> bool {
        self.latches
            .get(&section)
            .map(ObservableReveal::is_visible)
            .unwrap_or(true)
    }

    pub fn child_progress(&self, section: SectionId, index: usize, now: Instant) -> f32 {
        self.latches
            .get(&section)
            .map(|latch| latch.child_progress(index, now))
            .unwrap_or(1.0)
    }

    /// Whether any latch is still waiting for its section.
    pub fn is_observing(&self) -> bool {
        self.latches.values().any(ObservableReveal::is_observing)
    }

    pub fn is_animating(&self, children: usize, now: Instant) -> bool {
        self.latches
            .values()
            .any(|latch| latch.is_animating(children, now))
    }

    pub fn detach(&mut self, section: SectionId) {
        if let Some(latch) = self.latches.get_mut(&section) {
            latch.detach();
        }
    }

    pub fn detach_all(&mut self) {
        for latch in self.latches.values_mut() {
            latch.detach();
        }
    }
}
