// Host-side tests for the sticky navigation state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scrollspy {
    include!("../src/core/scrollspy.rs");
}

use constants::*;
use scrollspy::*;

fn sections(tops: &[f64], height: f64) -> Vec<SectionBounds> {
    tops.iter()
        .map(|&top| SectionBounds {
            top,
            bottom: top + height,
        })
        .collect()
}

#[test]
fn scrolled_flag_flips_past_the_threshold() {
    let mut nav = NavState::default();
    let none: [SectionBounds; 0] = [];

    assert!(nav.update(NAV_SCROLLED_AFTER_PX, &none).is_empty());
    assert!(!nav.is_scrolled());

    let change = nav.update(NAV_SCROLLED_AFTER_PX + 1.0, &none);
    assert_eq!(change.scrolled, Some(true));
    assert!(nav.update(400.0, &none).is_empty());

    assert_eq!(nav.update(0.0, &none).scrolled, Some(false));
}

#[test]
fn active_section_spans_the_probe_line() {
    let mut nav = NavState::new(None);
    let layout = sections(&[-700.0, 50.0, 650.0], 600.0);

    assert_eq!(section_at_probe(&layout, NAV_PROBE_LINE_PX), Some(1));
    let change = nav.update(700.0, &layout);
    assert_eq!(change.active, Some(1));
    assert_eq!(nav.active(), Some(1));

    // Same section again reports no change.
    assert_eq!(nav.update(710.0, &layout).active, None);
}

#[test]
fn first_matching_section_wins_on_overlap() {
    let layout = vec![
        SectionBounds {
            top: 0.0,
            bottom: 200.0,
        },
        SectionBounds {
            top: 100.0,
            bottom: 300.0,
        },
    ];
    assert_eq!(section_at_probe(&layout, 100.0), Some(0));
}

#[test]
fn active_section_is_kept_in_gaps() {
    let mut nav = NavState::default();
    let gap = sections(&[-500.0, 400.0], 300.0);
    assert_eq!(section_at_probe(&gap, NAV_PROBE_LINE_PX), None);
    assert!(nav.update(0.0, &gap).is_empty());
    assert_eq!(nav.active(), Some(0));
}

#[test]
fn detached_nav_ignores_updates() {
    let mut nav = NavState::default();
    nav.detach();
    let layout = sections(&[-900.0, 0.0], 600.0);
    assert!(nav.update(900.0, &layout).is_empty());
    assert!(!nav.is_scrolled());
    assert_eq!(nav.active(), Some(0));
}
