// Entrance presets for revealed elements.
//
// An entrance is a CSS transition from a preset's initial pose to the resting
// pose. The DOM layer writes `hidden_css` at mount and `shown_css` once the
// owning section is visible; the browser interpolates.

use std::str::FromStr;

use super::constants::*;
use super::style::{self, ParseError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn transform_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.3})",
            self.x, self.y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntrancePreset {
    Fade,
    #[default]
    FadeUp,
    FadeDown,
    SlideLeft,
    SlideRight,
    ScaleIn,
    Rise,
}

impl EntrancePreset {
    pub fn initial_pose(self) -> Pose {
        let hidden = Pose {
            opacity: 0.0,
            ..Pose::REST
        };
        match self {
            Self::Fade => hidden,
            Self::FadeUp => Pose {
                y: FADE_UP_OFFSET_PX,
                ..hidden
            },
            Self::FadeDown => Pose {
                y: FADE_DOWN_OFFSET_PX,
                ..hidden
            },
            Self::SlideLeft => Pose {
                x: -SLIDE_OFFSET_PX,
                ..hidden
            },
            Self::SlideRight => Pose {
                x: SLIDE_OFFSET_PX,
                ..hidden
            },
            Self::ScaleIn => Pose {
                scale: SCALE_IN_FROM,
                ..hidden
            },
            Self::Rise => Pose {
                y: RISE_OFFSET_PX,
                scale: RISE_SCALE_FROM,
                ..hidden
            },
        }
    }
}

impl FromStr for EntrancePreset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "fade-up" => Ok(Self::FadeUp),
            "fade" => Ok(Self::Fade),
            "fade-down" => Ok(Self::FadeDown),
            "slide-left" => Ok(Self::SlideLeft),
            "slide-right" => Ok(Self::SlideRight),
            "scale-in" => Ok(Self::ScaleIn),
            "rise" => Ok(Self::Rise),
            other => Err(ParseError::Keyword(other.to_string())),
        }
    }
}

/// A list of `(property, value)` pairs to apply to an element's inline style.
pub type StyleDecls = Vec<(&'static str, String)>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub preset: EntrancePreset,
    pub duration_ms: f64,
    pub delay_ms: f64,
}

impl Entrance {
    pub fn new(preset: EntrancePreset) -> Self {
        Self {
            preset,
            duration_ms: DEFAULT_ENTRANCE_DURATION_MS,
            delay_ms: 0.0,
        }
    }

    pub fn with_duration(mut self, ms: f64) -> Self {
        self.duration_ms = clamp_ms(ms, DEFAULT_ENTRANCE_DURATION_MS);
        self
    }

    pub fn with_delay(mut self, ms: f64) -> Self {
        self.delay_ms = clamp_ms(ms, 0.0);
        self
    }

    /// Initial pose, no transition so the element snaps there at mount.
    pub fn hidden_css(&self) -> StyleDecls {
        let pose = self.preset.initial_pose();
        vec![
            ("transition", "none".to_string()),
            ("opacity", style::opacity(pose.opacity)),
            ("transform", pose.transform_css()),
        ]
    }

    /// Resting pose with the transition that animates towards it.
    pub fn shown_css(&self) -> StyleDecls {
        vec![
            (
                "transition",
                format!(
                    "opacity {d} ease-out, transform {d} ease-out",
                    d = style::millis(self.duration_ms)
                ),
            ),
            ("transition-delay", style::millis(self.delay_ms)),
            ("opacity", style::opacity(Pose::REST.opacity)),
            ("transform", Pose::REST.transform_css()),
        ]
    }
}

#[inline]
fn clamp_ms(ms: f64, fallback: f64) -> f64 {
    if ms.is_finite() {
        ms.max(0.0)
    } else {
        fallback
    }
}
