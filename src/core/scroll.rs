// Scroll progress tracking and parallax mapping.
//
// Progress is measured on the vertical axis: how far an element has travelled
// through the viewport between two configured edge alignments. Both the
// element and the viewport are described by their viewport-relative geometry,
// so the host only has to hand over a bounding rect and the window height.

use std::str::FromStr;

use super::constants::{DEFAULT_PARALLAX_SPEED, PARALLAX_DISTANCE_PER_SPEED_PX};
use super::style::{self, ParseError};

/// A point along an element or the viewport, as a fraction of its size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge(f64);

impl Edge {
    pub const START: Edge = Edge(0.0);
    pub const CENTER: Edge = Edge(0.5);
    pub const END: Edge = Edge(1.0);

    pub fn fraction(f: f64) -> Self {
        Edge(if f.is_finite() { f } else { 0.0 })
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Edge {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        match raw {
            "start" => Ok(Edge::START),
            "center" => Ok(Edge::CENTER),
            "end" => Ok(Edge::END),
            _ => {
                // Only bare fractions and percentages; lengths and times are rejected.
                let (digits, scale) = match raw.strip_suffix('%') {
                    Some(pct) => (pct, 100.0),
                    None => (raw, 1.0),
                };
                match digits.parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(Edge::fraction(v / scale)),
                    _ => Err(ParseError::Offset(s.to_string())),
                }
            }
        }
    }
}

/// Alignment of an element edge with a viewport edge, e.g. `"start end"`:
/// the element's top meets the viewport's bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    pub target: Edge,
    pub container: Edge,
}

impl ScrollOffset {
    /// Element top meets viewport bottom: the element is just entering.
    pub const ENTER: ScrollOffset = ScrollOffset {
        target: Edge::START,
        container: Edge::END,
    };
    /// Element bottom meets viewport top: the element has just left.
    pub const EXIT: ScrollOffset = ScrollOffset {
        target: Edge::END,
        container: Edge::START,
    };

    /// Scroll distance past the point where this alignment holds. Grows as the
    /// page scrolls down.
    #[inline]
    fn travel(&self, geom: &TrackGeometry) -> f64 {
        self.container.value() * geom.viewport_size
            - self.target.value() * geom.element_size
            - geom.element_top
    }
}

impl FromStr for ScrollOffset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(t), Some(c), None) => Ok(ScrollOffset {
                target: t.parse()?,
                container: c.parse()?,
            }),
            _ => Err(ParseError::Offset(s.to_string())),
        }
    }
}

/// Viewport-relative geometry sampled once per recomputation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    pub element_top: f64,
    pub element_size: f64,
    pub viewport_size: f64,
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Normalised position of `value` between `start` and `end`, clamped to
/// `[0, 1]`. A zero-length range behaves like a step at `end`.
pub fn progress_between(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span.abs() < f64::EPSILON {
        return if value >= end { 1.0 } else { 0.0 };
    }
    let p = (value - start) / span;
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct ScrollTrack {
    start: ScrollOffset,
    end: ScrollOffset,
    progress: f64,
    detached: bool,
}

impl ScrollTrack {
    pub fn new(start: ScrollOffset, end: ScrollOffset) -> Self {
        Self {
            start,
            end,
            progress: 0.0,
            detached: false,
        }
    }

    /// Recompute progress from fresh geometry. Once detached the last value is
    /// returned unchanged.
    pub fn update(&mut self, geom: TrackGeometry) -> f64 {
        if self.detached {
            return self.progress;
        }
        let start = self.start.travel(&geom);
        let end = self.end.travel(&geom);
        // start - end does not depend on the scroll position.
        self.progress = progress_between(start, 0.0, start - end);
        self.progress
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn lerp(&self, range: (f64, f64)) -> f64 {
        lerp(range.0, range.1, self.progress)
    }

    pub fn detach(&mut self) {
        self.detached = true;
    }

    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

impl Default for ScrollTrack {
    fn default() -> Self {
        Self::new(ScrollOffset::ENTER, ScrollOffset::EXIT)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParallaxDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for ParallaxDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ParseError::Keyword(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxSpec {
    pub speed: f64,
    pub direction: ParallaxDirection,
}

impl Default for ParallaxSpec {
    fn default() -> Self {
        Self {
            speed: DEFAULT_PARALLAX_SPEED,
            direction: ParallaxDirection::Up,
        }
    }
}

impl ParallaxSpec {
    pub fn new(speed: f64, direction: ParallaxDirection) -> Self {
        Self {
            speed: if speed.is_finite() {
                speed
            } else {
                DEFAULT_PARALLAX_SPEED
            },
            direction,
        }
    }

    /// Output range the progress is mapped onto, in pixels.
    pub fn output_range(&self) -> (f64, f64) {
        let d = self.speed * PARALLAX_DISTANCE_PER_SPEED_PX;
        match self.direction {
            ParallaxDirection::Up | ParallaxDirection::Left => (d, -d),
            ParallaxDirection::Down | ParallaxDirection::Right => (-d, d),
        }
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(
            self.direction,
            ParallaxDirection::Left | ParallaxDirection::Right
        )
    }

    /// Transform for an offset taken from `output_range`, on this layer's axis.
    pub fn translate_css(&self, offset_px: f64) -> String {
        if self.is_horizontal() {
            style::translate_x(offset_px)
        } else {
            style::translate_y(offset_px)
        }
    }
}

/// Coalesces bursts of scroll/resize events into one recomputation per
/// animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns true when the caller should schedule a frame; false when one is
    /// already queued.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Called from the scheduled frame before recomputing.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
