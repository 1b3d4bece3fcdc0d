//! Integration tests for scroll-triggered reveals.
//!
//! Tests cover:
//! - Latching once the visible share of a section reaches the threshold
//! - Staying visible after scrolling away
//! - Staggered child entrances
//! - Detaching on teardown

mod common;

use std::time::{Duration, Instant};

use common::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_section_below_fold_stays_hidden() {
    let layout = test_layout();
    let mut observer = test_observer();

    let revealed = observer.on_viewport(&layout, &Viewport::new(0.0, 800.0), Instant::now());

    assert!(revealed.is_empty());
    assert!(!observer.is_visible(SectionId::About));
    assert!(observer.is_observing());
}

#[test]
fn test_reveal_needs_threshold_share() {
    let layout = test_layout();
    let mut observer = test_observer();
    let now = Instant::now();

    // 100 of About's 600 pixels in view.
    observer.on_viewport(&layout, &Viewport::new(100.0, 800.0), now);
    assert!(!observer.is_visible(SectionId::About));

    // 200 of 600.
    let revealed = observer.on_viewport(&layout, &Viewport::new(200.0, 800.0), now);
    assert_eq!(revealed, vec![SectionId::About]);
    assert!(observer.is_visible(SectionId::About));
    assert!(!observer.is_visible(SectionId::Skills));
}

#[test]
fn test_revealed_section_stays_visible() {
    let layout = test_layout();
    let mut observer = test_observer();
    let now = Instant::now();

    observer.on_viewport(&layout, &Viewport::new(800.0, 800.0), now);
    assert!(observer.is_visible(SectionId::About));

    let revealed = observer.on_viewport(&layout, &Viewport::new(0.0, 800.0), now);
    assert!(revealed.is_empty());
    assert!(observer.is_visible(SectionId::About));
    let latch = observer.latch(SectionId::About).unwrap();
    assert!(!latch.is_observing());
    assert_eq!(latch.revealed_at(), Some(now));
}

#[test]
fn test_hero_is_not_observed() {
    let observer = test_observer();
    assert!(observer.latch(SectionId::Home).is_none());
    assert!(observer.is_visible(SectionId::Home));
    assert_eq!(observer.child_progress(SectionId::Home, 3, Instant::now()), 1.0);
}

#[test]
fn test_children_enter_staggered() {
    let layout = test_layout();
    let mut observer = test_observer();
    let t0 = Instant::now();
    observer.on_viewport(&layout, &Viewport::new(800.0, 800.0), t0);

    // About staggers by 200 ms.
    let at = |ms| t0 + Duration::from_millis(ms);
    assert!(approx(observer.child_progress(SectionId::About, 0, at(250)), 0.5));
    assert!(approx(observer.child_progress(SectionId::About, 1, at(250)), 0.1));
    assert!(approx(observer.child_progress(SectionId::About, 2, at(250)), 0.0));
    assert!(approx(observer.child_progress(SectionId::About, 2, at(900)), 1.0));

    assert!(observer.is_animating(3, at(600)));
    assert!(!observer.is_animating(3, at(1000)));
}

#[test]
fn test_hidden_section_children_stay_hidden() {
    let observer = test_observer();
    let later = Instant::now() + Duration::from_secs(10);
    assert_eq!(observer.child_progress(SectionId::Contact, 0, later), 0.0);
}

#[test]
fn test_detach_stops_observation() {
    let layout = test_layout();
    let mut observer = test_observer();
    observer.detach_all();

    let revealed = observer.on_viewport(&layout, &Viewport::new(800.0, 4000.0), Instant::now());

    assert!(revealed.is_empty());
    assert!(!observer.is_observing());
    assert!(!observer.is_visible(SectionId::About));
}

#[test]
fn test_missing_section_is_skipped() {
    let layout = PageLayout::stacked(&[(SectionId::Home, 800.0), (SectionId::About, 600.0)]);
    let mut observer = test_observer();

    let revealed = observer.on_viewport(&layout, &Viewport::new(0.0, 5000.0), Instant::now());

    assert_eq!(revealed, vec![SectionId::About]);
    assert!(!observer.is_visible(SectionId::Contact));
    assert!(observer.latch(SectionId::Contact).unwrap().is_observing());
}
