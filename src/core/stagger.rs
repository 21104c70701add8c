// Ordered, delayed entrances for the children of a revealed container.

use smallvec::SmallVec;

use super::constants::{
    DEFAULT_INITIAL_DELAY_MS, DEFAULT_STAGGER_DELAY_MS, METER_INITIAL_DELAY_MS,
    METER_STAGGER_DELAY_MS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerTiming {
    pub stagger_delay_ms: f64,
    pub initial_delay_ms: f64,
}

impl Default for StaggerTiming {
    fn default() -> Self {
        Self {
            stagger_delay_ms: DEFAULT_STAGGER_DELAY_MS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
        }
    }
}

impl StaggerTiming {
    pub fn new(stagger_delay_ms: f64, initial_delay_ms: f64) -> Self {
        let non_negative = |v: f64, fallback: f64| {
            if v.is_finite() {
                v.max(0.0)
            } else {
                fallback
            }
        };
        Self {
            stagger_delay_ms: non_negative(stagger_delay_ms, DEFAULT_STAGGER_DELAY_MS),
            initial_delay_ms: non_negative(initial_delay_ms, DEFAULT_INITIAL_DELAY_MS),
        }
    }

    /// Timing used for skill meters filling in after their card appears.
    pub fn meter() -> Self {
        Self::new(METER_STAGGER_DELAY_MS, METER_INITIAL_DELAY_MS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerStep {
    pub index: usize,
    pub delay_ms: f64,
}

/// Per-child start delays in supply order. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct StaggerPlan {
    steps: SmallVec<[StaggerStep; 8]>,
}

impl StaggerPlan {
    pub fn new(child_count: usize, timing: StaggerTiming) -> Self {
        let steps = (0..child_count)
            .map(|index| StaggerStep {
                index,
                delay_ms: timing.initial_delay_ms + index as f64 * timing.stagger_delay_ms,
            })
            .collect();
        Self { steps }
    }

    #[inline]
    pub fn steps(&self) -> &[StaggerStep] {
        &self.steps
    }

    pub fn delay_for(&self, index: usize) -> Option<f64> {
        self.steps.get(index).map(|s| s.delay_ms)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Runs a plan once the parent container is first seen.
#[derive(Clone, Debug)]
pub struct StaggerSequencer {
    plan: StaggerPlan,
    visible_at_ms: Option<f64>,
    detached: bool,
}

impl StaggerSequencer {
    pub fn new(plan: StaggerPlan) -> Self {
        Self {
            plan,
            visible_at_ms: None,
            detached: false,
        }
    }

    /// Start the sequence. Only the first call counts; returns the steps to
    /// schedule, or an empty slice if already started or detached.
    pub fn on_parent_visible(&mut self, now_ms: f64) -> &[StaggerStep] {
        if self.detached || self.visible_at_ms.is_some() {
            return &[];
        }
        self.visible_at_ms = Some(now_ms);
        self.plan.steps()
    }

    /// Indices whose entrance has begun by `now_ms`, in ascending order.
    pub fn started_at(&self, now_ms: f64) -> impl Iterator<Item = usize> + '_ {
        let origin = if self.detached {
            None
        } else {
            self.visible_at_ms
        };
        self.plan
            .steps()
            .iter()
            .filter(move |s| origin.is_some_and(|t0| now_ms - t0 >= s.delay_ms))
            .map(|s| s.index)
    }

    /// Absolute start time of a child, once the sequence is running.
    pub fn start_time_of(&self, index: usize) -> Option<f64> {
        let t0 = self.visible_at_ms?;
        self.plan.delay_for(index).map(|d| t0 + d)
    }

    pub fn detach(&mut self) {
        self.detached = true;
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.visible_at_ms.is_some()
    }

    #[inline]
    pub fn plan(&self) -> &StaggerPlan {
        &self.plan
    }
}

/// Clamp a meter value to a percentage.
#[inline]
pub fn meter_level(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
