// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_within_reasonable_bounds() {
    // Fractions
    assert!((0.0..=1.0).contains(&DEFAULT_REVEAL_THRESHOLD));
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING <= 1.0);
    assert!(SCALE_IN_FROM > 0.0 && SCALE_IN_FROM < 1.0);
    assert!(RISE_SCALE_FROM > 0.0 && RISE_SCALE_FROM < 1.0);

    // Durations
    assert!(DEFAULT_ENTRANCE_DURATION_MS > 0.0);
    assert!(METER_FILL_DURATION_MS > 0.0);
    assert!(MESH_DURATION_MIN_MS > 0.0);

    // Margins that shrink the viewport are negative
    assert!(STAGGER_ROOT_MARGIN_PX < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_opacities_stay_visible() {
    let last = PARTICLE_BASE_OPACITY - (PARTICLE_COUNT - 1) as f64 * PARTICLE_OPACITY_STEP;
    assert!(last > 0.0);
    assert!(PARTICLE_BASE_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Mesh keyframes pulse upwards
    assert!(MESH_OPACITY_HIGH > MESH_OPACITY_LOW);
    assert!(MESH_SCALE_PEAK > 1.0);

    // Glow is larger than a particle
    assert!(GLOW_HALF_SIZE_PX > PARTICLE_HALF_SIZE_PX);

    // Nav turns solid before the probe line reaches the first section
    assert!(NAV_SCROLLED_AFTER_PX < NAV_PROBE_LINE_PX);
}

#[test]
fn selectors_match_their_attributes() {
    for (selector, attr) in [
        (REVEAL_ITEM_SELECTOR, ATTR_REVEAL),
        (STAGGER_SELECTOR, ATTR_STAGGER),
        (METER_SELECTOR, ATTR_METER),
        (PARALLAX_SELECTOR, ATTR_PARALLAX),
    ] {
        assert_eq!(selector, format!("[{attr}]"));
    }
    assert!(!AMBIENT_CONTAINER_ID.starts_with('#'));
}
