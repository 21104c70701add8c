// Viewport visibility state machine.
//
// The platform observer reports raw intersection samples; this module decides
// what they mean. An observation moves `Unobserved → Pending → Visible`. With
// `trigger_once` the visible state is terminal, otherwise it may fall back to
// `Pending` whenever the element leaves the viewport again. `Detached` is
// entered on unmount and swallows every later sample.

use super::constants::DEFAULT_REVEAL_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Unobserved,
    Pending,
    Visible,
    Detached,
}

/// What the owner of an observation should do after feeding it a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    None,
    Entered,
    Exited,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    threshold: f64,
    pub trigger_once: bool,
    /// Margin applied to the viewport box; negative values shrink it.
    pub root_margin_px: f64,
}

impl ObserveOptions {
    pub fn new(threshold: f64, trigger_once: bool) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            trigger_once,
            root_margin_px: 0.0,
        }
    }

    pub fn with_root_margin(mut self, margin_px: f64) -> Self {
        self.root_margin_px = if margin_px.is_finite() {
            margin_px
        } else {
            0.0
        };
        self
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin_css(&self) -> String {
        format!("{}px", self.root_margin_px.round() as i64)
    }
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD, true)
    }
}

#[inline]
fn clamp_threshold(t: f64) -> f64 {
    if t.is_nan() {
        DEFAULT_REVEAL_THRESHOLD
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// One entry delivered by the platform observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Debug)]
pub struct ViewportObservation {
    options: ObserveOptions,
    phase: RevealPhase,
}

impl ViewportObservation {
    pub fn new(options: ObserveOptions) -> Self {
        Self {
            options,
            phase: RevealPhase::Unobserved,
        }
    }

    /// Mark the observation as registered with the platform.
    pub fn attach(&mut self) {
        if self.phase == RevealPhase::Unobserved {
            self.phase = RevealPhase::Pending;
        }
    }

    pub fn on_intersection(&mut self, sample: IntersectionSample) -> Transition {
        let crossed = sample.is_intersecting && sample.ratio >= self.options.threshold;
        match self.phase {
            RevealPhase::Unobserved | RevealPhase::Detached => Transition::None,
            RevealPhase::Pending if crossed => {
                self.phase = RevealPhase::Visible;
                Transition::Entered
            }
            RevealPhase::Pending => Transition::None,
            RevealPhase::Visible if self.options.trigger_once || crossed => Transition::None,
            RevealPhase::Visible => {
                self.phase = RevealPhase::Pending;
                Transition::Exited
            }
        }
    }

    /// True once a trigger-once observation has fired and the platform
    /// registration can be dropped.
    #[inline]
    pub fn should_unobserve(&self) -> bool {
        self.options.trigger_once && self.is_visible()
    }

    pub fn detach(&mut self) {
        self.phase = RevealPhase::Detached;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Visible
    }

    #[inline]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[inline]
    pub fn options(&self) -> &ObserveOptions {
        &self.options
    }
}
