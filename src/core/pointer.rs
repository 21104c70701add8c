// Pointer glow smoothing and the trailing particle swarm.
//
// The animator is fed raw pointer positions whenever the host sees a move
// event and is ticked once per animation frame. Only the latest position is
// kept; intermediate samples between two frames are dropped.

use glam::DVec2;

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientConfig {
    pub smoothing: f64,
    pub orbit_radius_px: f64,
    pub phase_rate_per_ms: f64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            smoothing: POINTER_SMOOTHING,
            orbit_radius_px: PARTICLE_ORBIT_RADIUS_PX,
            phase_rate_per_ms: PARTICLE_PHASE_RATE_PER_MS,
        }
    }
}

impl AmbientConfig {
    /// Smoothing factor clamped to `(0, 1]`; zero would freeze the glow.
    pub fn smoothing_factor(&self) -> f64 {
        if self.smoothing.is_finite() && self.smoothing > 0.0 {
            self.smoothing.min(1.0)
        } else {
            POINTER_SMOOTHING
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub target: DVec2,
    pub smoothed: DVec2,
}

impl PointerState {
    #[inline]
    pub fn set_target(&mut self, target: DVec2) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// One exponential smoothing step towards the target.
    #[inline]
    pub fn step(&mut self, factor: f64) {
        self.smoothed += (self.target - self.smoothed) * factor;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub index: usize,
    pub phase_offset: DVec2,
    pub opacity: f64,
}

impl Particle {
    fn new(index: usize) -> Self {
        Self {
            index,
            phase_offset: DVec2::ZERO,
            opacity: particle_opacity(index),
        }
    }
}

/// Opacity for the particle at `index`; decreases with index.
#[inline]
pub fn particle_opacity(index: usize) -> f64 {
    (PARTICLE_BASE_OPACITY - index as f64 * PARTICLE_OPACITY_STEP).max(0.0)
}

/// Translation and opacity for one element, ready to be written to styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticlePose {
    pub translate: DVec2,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientFrame {
    pub glow: DVec2,
    pub particles: [ParticlePose; PARTICLE_COUNT],
}

pub struct AmbientAnimator {
    config: AmbientConfig,
    pointer: PointerState,
    particles: [Particle; PARTICLE_COUNT],
    frames: u64,
    detached: bool,
}

impl AmbientAnimator {
    pub fn new(config: AmbientConfig) -> Self {
        Self {
            config,
            pointer: PointerState::default(),
            particles: std::array::from_fn(Particle::new),
            frames: 0,
            detached: false,
        }
    }

    /// Record the latest raw pointer position, relative to the container.
    pub fn set_target(&mut self, target: DVec2) {
        if !self.detached {
            self.pointer.set_target(target);
        }
    }

    /// Advance one frame. Returns `None` once detached; nothing is mutated
    /// from then on.
    pub fn tick(&mut self, now_ms: f64) -> Option<AmbientFrame> {
        if self.detached {
            return None;
        }
        self.pointer.step(self.config.smoothing_factor());
        self.frames += 1;

        let phase = now_ms * self.config.phase_rate_per_ms;
        let radius = self.config.orbit_radius_px;
        for p in self.particles.iter_mut() {
            let angle = phase + p.index as f64;
            p.phase_offset = DVec2::new(angle.sin(), angle.cos()) * radius;
        }

        let center = self.pointer.smoothed;
        let particles = std::array::from_fn(|i| {
            let p = &self.particles[i];
            ParticlePose {
                translate: center + p.phase_offset - DVec2::splat(PARTICLE_HALF_SIZE_PX),
                opacity: p.opacity,
            }
        });
        Some(AmbientFrame {
            glow: center - DVec2::splat(GLOW_HALF_SIZE_PX),
            particles,
        })
    }

    pub fn detach(&mut self) {
        self.detached = true;
    }

    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    #[inline]
    pub fn config(&self) -> &AmbientConfig {
        &self.config
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for AmbientAnimator {
    fn default() -> Self {
        Self::new(AmbientConfig::default())
    }
}

/// Frames needed for smoothing to close all but `tolerance` of a gap.
pub fn frames_to_settle(factor: f64, tolerance: f64) -> u32 {
    if !(factor > 0.0 && factor <= 1.0) || !(tolerance > 0.0 && tolerance < 1.0) {
        return 0;
    }
    if factor >= 1.0 {
        return 1;
    }
    (tolerance.ln() / (1.0 - factor).ln()).ceil() as u32
}
