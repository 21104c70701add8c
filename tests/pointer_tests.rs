// Host-side tests for the pointer glow, particle swarm and ambient mesh.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}
mod mesh {
    include!("../src/core/mesh.rs");
}

use constants::*;
use glam::DVec2;
use mesh::*;
use pointer::*;

#[test]
fn smoothing_trails_the_target_without_snapping() {
    let mut anim = AmbientAnimator::default();
    anim.set_target(DVec2::new(100.0, 50.0));
    anim.tick(0.0);
    let s = anim.pointer().smoothed;
    assert!((s.x - 10.0).abs() < 1e-9);
    assert!((s.y - 5.0).abs() < 1e-9);
}

#[test]
fn smoothed_position_converges_to_a_held_target() {
    let target = DVec2::new(640.0, -320.0);
    let mut anim = AmbientAnimator::default();
    anim.set_target(target);

    for frame in 0..30 {
        anim.tick(frame as f64 * 16.0);
    }
    let gap = (target - anim.pointer().smoothed).abs() / target.abs();
    // 0.9^30 of the gap is left after 30 frames.
    assert!(gap.x < 0.05 && gap.y < 0.05, "gap after 30 frames: {gap:?}");

    let needed = frames_to_settle(POINTER_SMOOTHING, 0.01);
    assert_eq!(needed, 44);
    for frame in 30..needed {
        anim.tick(frame as f64 * 16.0);
    }
    let gap = (target - anim.pointer().smoothed).abs() / target.abs();
    assert!(
        gap.x <= 0.01 && gap.y <= 0.01,
        "gap after {needed} frames: {gap:?}"
    );
    assert_eq!(anim.frames(), needed as u64);
}

#[test]
fn only_the_latest_pointer_sample_is_used() {
    let mut a = AmbientAnimator::default();
    a.set_target(DVec2::new(500.0, 500.0));
    a.set_target(DVec2::new(-20.0, 7.0));
    a.set_target(DVec2::new(200.0, 100.0));
    a.tick(0.0);

    let mut b = AmbientAnimator::default();
    b.set_target(DVec2::new(200.0, 100.0));
    b.tick(0.0);

    assert_eq!(a.pointer(), b.pointer());
}

#[test]
fn non_finite_pointer_samples_are_ignored() {
    let mut anim = AmbientAnimator::default();
    anim.set_target(DVec2::new(10.0, 10.0));
    anim.set_target(DVec2::new(f64::NAN, 3.0));
    assert_eq!(anim.pointer().target, DVec2::new(10.0, 10.0));
}

#[test]
fn particles_orbit_the_glow_with_index_phase() {
    let mut anim = AmbientAnimator::default();
    let frame = anim.tick(0.0).expect("mounted animator ticks");
    assert_eq!(frame.particles.len(), PARTICLE_COUNT);
    assert_eq!(frame.glow, DVec2::splat(-GLOW_HALF_SIZE_PX));

    for (i, pose) in frame.particles.iter().enumerate() {
        let expected = DVec2::new((i as f64).sin(), (i as f64).cos()) * PARTICLE_ORBIT_RADIUS_PX
            - DVec2::splat(PARTICLE_HALF_SIZE_PX);
        assert!((pose.translate - expected).length() < 1e-9, "particle {i}");
        let offset = anim.particles()[i].phase_offset;
        assert!((offset.length() - PARTICLE_ORBIT_RADIUS_PX).abs() < 1e-9);
    }

    // Phase advances with time.
    let later = anim.tick(1000.0).unwrap();
    assert_ne!(later.particles[0].translate, frame.particles[0].translate);
}

#[test]
fn particle_opacity_strictly_decreases_and_stays_positive() {
    let mut anim = AmbientAnimator::default();
    let frame = anim.tick(0.0).unwrap();
    assert!(
        (frame.particles[0].opacity - PARTICLE_BASE_OPACITY).abs() < 1e-12
    );
    for pair in frame.particles.windows(2) {
        assert!(pair[1].opacity < pair[0].opacity);
    }
    assert!(frame.particles[PARTICLE_COUNT - 1].opacity > 0.0);
}

#[test]
fn detached_animator_never_mutates_again() {
    let mut anim = AmbientAnimator::default();
    anim.set_target(DVec2::new(80.0, 80.0));
    anim.tick(0.0);
    anim.detach();

    let pointer = *anim.pointer();
    let particles = anim.particles().to_vec();
    let frames = anim.frames();

    anim.set_target(DVec2::new(-500.0, 900.0));
    for t in 1..100 {
        assert!(anim.tick(t as f64 * 16.0).is_none());
    }
    assert!(anim.is_detached());
    assert_eq!(*anim.pointer(), pointer);
    assert_eq!(anim.particles(), particles.as_slice());
    assert_eq!(anim.frames(), frames);
}

#[test]
fn smoothing_factor_is_clamped() {
    let cfg = AmbientConfig {
        smoothing: 0.0,
        ..AmbientConfig::default()
    };
    assert_eq!(cfg.smoothing_factor(), POINTER_SMOOTHING);
    let cfg = AmbientConfig {
        smoothing: 4.0,
        ..AmbientConfig::default()
    };
    assert_eq!(cfg.smoothing_factor(), 1.0);
    assert_eq!(frames_to_settle(1.0, 0.01), 1);
    assert_eq!(frames_to_settle(0.0, 0.01), 0);
}

#[test]
fn mesh_generation_is_deterministic_and_in_range() {
    let a = MeshField::generate(MESH_DOT_COUNT, 42);
    let b = MeshField::generate(MESH_DOT_COUNT, 42);
    assert_eq!(a.dots().len(), MESH_DOT_COUNT);
    assert_eq!(a.dots(), b.dots());

    for d in a.dots() {
        assert!((0.0..100.0).contains(&d.left_pct));
        assert!((0.0..100.0).contains(&d.top_pct));
        assert!(d.drift.x.abs() <= MESH_DRIFT_RANGE_PX);
        assert!(d.drift.y.abs() <= MESH_DRIFT_RANGE_PX);
        assert!(d.duration_ms >= MESH_DURATION_MIN_MS);
        assert!(d.duration_ms < MESH_DURATION_MIN_MS + MESH_DURATION_SPAN_MS);
        assert!((0.0..MESH_DELAY_MAX_MS).contains(&d.delay_ms));
    }

    let c = MeshField::generate(MESH_DOT_COUNT, 7);
    assert_ne!(a.dots(), c.dots());
}

#[test]
fn mesh_dot_ping_pongs_between_anchor_and_drift() {
    let dot = MeshDot {
        left_pct: 10.0,
        top_pct: 20.0,
        drift: DVec2::new(40.0, -20.0),
        duration_ms: 1000.0,
        delay_ms: 0.0,
    };

    let rest = dot.sample(0.0);
    assert_eq!(rest.offset, DVec2::ZERO);
    assert_eq!(rest.opacity, MESH_OPACITY_LOW);

    let half = dot.sample(500.0);
    assert_eq!(half.offset, DVec2::new(20.0, -10.0));
    assert!((half.opacity - MESH_OPACITY_HIGH).abs() < 1e-12);
    assert!((half.scale - MESH_SCALE_PEAK).abs() < 1e-12);

    let end = dot.sample(1000.0);
    assert_eq!(end.offset, dot.drift);

    // Second pass runs in reverse.
    let back = dot.sample(1250.0);
    assert!((back.offset - dot.drift * 0.75).length() < 1e-9);
    let home = dot.sample(2000.0);
    assert!(home.offset.length() < 1e-9);
}

#[test]
fn mesh_dot_waits_for_its_delay() {
    let dot = MeshDot {
        left_pct: 0.0,
        top_pct: 0.0,
        drift: DVec2::new(10.0, 10.0),
        duration_ms: 2000.0,
        delay_ms: 1500.0,
    };
    assert_eq!(dot.sample(1000.0).offset, DVec2::ZERO);
    assert!(dot.sample(2000.0).offset.x > 0.0);
    assert_eq!(
        MeshDot::transform_css(&dot.sample(0.0)),
        "translate(0.00px, 0.00px) scale(1.000)"
    );
}
