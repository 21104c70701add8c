// Host-side tests for scroll progress and parallax mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod style {
    include!("../src/core/style.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

const VIEWPORT: f64 = 800.0;
const HEIGHT: f64 = 400.0;

fn geom(top: f64) -> TrackGeometry {
    TrackGeometry {
        element_top: top,
        element_size: HEIGHT,
        viewport_size: VIEWPORT,
    }
}

#[test]
fn progress_is_zero_at_start_offset_and_one_at_end_offset() {
    let mut track = ScrollTrack::default();
    // "start end": element top at the viewport bottom.
    assert_eq!(track.update(geom(VIEWPORT)), 0.0);
    // "end start": element bottom at the viewport top.
    assert_eq!(track.update(geom(-HEIGHT)), 1.0);
    let mid = track.update(geom(200.0));
    assert!((mid - 0.5).abs() < 1e-12, "mid={mid}");
}

#[test]
fn progress_is_monotonic_and_clamped_while_scrolling_down() {
    let mut track = ScrollTrack::default();
    let mut prev = -1.0;
    // Scrolling down moves the element up the viewport.
    let mut top = 2000.0;
    while top > -2000.0 {
        let p = track.update(geom(top));
        assert!((0.0..=1.0).contains(&p), "p={p} top={top}");
        assert!(p >= prev, "not monotonic at top={top}");
        prev = p;
        top -= 37.0;
    }
    assert_eq!(track.update(geom(5000.0)), 0.0);
    assert_eq!(track.update(geom(-5000.0)), 1.0);
}

#[test]
fn custom_offsets_move_the_endpoints() {
    let start: ScrollOffset = "start end".parse().unwrap();
    let end: ScrollOffset = "start start".parse().unwrap();
    let mut track = ScrollTrack::new(start, end);
    assert_eq!(track.update(geom(VIEWPORT)), 0.0);
    assert_eq!(track.update(geom(0.0)), 1.0);
    assert!((track.update(geom(VIEWPORT / 2.0)) - 0.5).abs() < 1e-12);

    let centred = ScrollTrack::new(
        "center center".parse().unwrap(),
        "end start".parse().unwrap(),
    );
    let mut centred = centred;
    // Element centre at viewport centre: top = 400 - 200.
    assert_eq!(centred.update(geom(200.0)), 0.0);
}

#[test]
fn degenerate_range_is_a_step() {
    let same: ScrollOffset = "start start".parse().unwrap();
    let mut track = ScrollTrack::new(same, same);
    assert_eq!(track.update(geom(10.0)), 0.0);
    assert_eq!(track.update(geom(0.0)), 1.0);
    assert_eq!(track.update(geom(-10.0)), 1.0);
}

#[test]
fn lerp_maps_progress_onto_a_range() {
    let mut track = ScrollTrack::default();
    track.update(geom(200.0));
    assert!((track.lerp((50.0, -50.0)) - 0.0).abs() < 1e-9);
    assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    assert_eq!(progress_between(5.0, 0.0, 10.0), 0.5);
    assert_eq!(progress_between(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(progress_between(50.0, 0.0, 10.0), 1.0);
}

#[test]
fn offsets_parse_keywords_fractions_and_percentages() {
    let o: ScrollOffset = "end start".parse().unwrap();
    assert_eq!(o, ScrollOffset::EXIT);
    let o: ScrollOffset = " 0.25   75% ".parse().unwrap();
    assert_eq!(o.target.value(), 0.25);
    assert_eq!(o.container.value(), 0.75);
    assert!("start".parse::<ScrollOffset>().is_err());
    assert!("start end extra".parse::<ScrollOffset>().is_err());
    assert!("top bottom".parse::<ScrollOffset>().is_err());
}

#[test]
fn offsets_reject_lengths_and_times() {
    for raw in [
        "start 100px",
        "start 2ms",
        "10px end",
        "start inf",
        "start 50%px",
    ] {
        assert!(
            raw.parse::<ScrollOffset>().is_err(),
            "{raw:?} should not parse"
        );
    }
    assert_eq!(
        "100px".parse::<Edge>(),
        Err(style::ParseError::Offset("100px".into()))
    );
    assert_eq!("50%".parse::<Edge>().map(Edge::value), Ok(0.5));
}

#[test]
fn parallax_direction_sets_range_and_axis() {
    let up = ParallaxSpec::new(0.5, ParallaxDirection::Up);
    assert_eq!(up.output_range(), (50.0, -50.0));
    assert_eq!(up.translate_css(50.0), "translateY(50.00px)");
    assert_eq!(up.translate_css(-50.0), "translateY(-50.00px)");

    let down = ParallaxSpec::new(0.5, ParallaxDirection::Down);
    assert_eq!(down.output_range(), (-50.0, 50.0));

    let left = ParallaxSpec::new(1.0, ParallaxDirection::Left);
    assert!(left.is_horizontal());
    let (from, to) = left.output_range();
    assert_eq!(
        left.translate_css(lerp(from, to, 0.5)),
        "translateX(0.00px)"
    );
}

#[test]
fn parallax_offset_follows_clamped_track_progress() {
    let right = ParallaxSpec::new(0.2, ParallaxDirection::Right);
    let mut track = ScrollTrack::default();

    // Still below the viewport.
    track.update(geom(VIEWPORT + 500.0));
    assert_eq!(track.lerp(right.output_range()), -20.0);

    // Long gone above the viewport.
    track.update(geom(-5_000.0));
    assert_eq!(track.lerp(right.output_range()), 20.0);

    track.update(geom(200.0));
    assert_eq!(track.lerp(right.output_range()), 0.0);
}

#[test]
fn parallax_direction_parses_and_rejects_unknown() {
    assert_eq!(
        "down".parse::<ParallaxDirection>(),
        Ok(ParallaxDirection::Down)
    );
    assert_eq!(
        " right ".parse::<ParallaxDirection>(),
        Ok(ParallaxDirection::Right)
    );
    assert!(matches!(
        "sideways".parse::<ParallaxDirection>(),
        Err(style::ParseError::Keyword(_))
    ));
    let spec = ParallaxSpec::new(f64::NAN, ParallaxDirection::Up);
    assert_eq!(spec.speed, constants::DEFAULT_PARALLAX_SPEED);
}

#[test]
fn frame_gate_coalesces_requests() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(!gate.request());
    assert!(gate.is_pending());
    gate.complete();
    assert!(gate.request());
}

#[test]
fn detached_track_keeps_last_progress() {
    let mut track = ScrollTrack::default();
    let p = track.update(geom(200.0));
    track.detach();
    assert_eq!(track.update(geom(-HEIGHT)), p);
    assert_eq!(track.progress(), p);
}
