use glam::DVec2;
use rand::prelude::*;

use super::constants::*;

/// A background dot drifting back and forth between its anchor and an offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshDot {
    pub left_pct: f64,
    pub top_pct: f64,
    pub drift: DVec2,
    pub duration_ms: f64,
    pub delay_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotPose {
    pub offset: DVec2,
    pub opacity: f64,
    pub scale: f64,
}

impl MeshDot {
    /// Pose at `now_ms` (time since the mesh was mounted). Each cycle runs
    /// forward then in reverse; the dot rests at its anchor during the delay.
    pub fn sample(&self, now_ms: f64) -> DotPose {
        let local = now_ms - self.delay_ms;
        if local <= 0.0 || self.duration_ms <= 0.0 {
            return DotPose {
                offset: DVec2::ZERO,
                opacity: MESH_OPACITY_LOW,
                scale: 1.0,
            };
        }
        let cycle = local / self.duration_ms;
        let within = cycle.fract();
        // Odd cycles play backwards.
        let t = if (cycle.floor() as u64) % 2 == 0 {
            within
        } else {
            1.0 - within
        };
        // Opacity and scale keyframes peak halfway through each pass.
        let hump = 1.0 - (2.0 * t - 1.0).abs();
        DotPose {
            offset: self.drift * t,
            opacity: MESH_OPACITY_LOW + (MESH_OPACITY_HIGH - MESH_OPACITY_LOW) * hump,
            scale: 1.0 + (MESH_SCALE_PEAK - 1.0) * hump,
        }
    }

    pub fn transform_css(pose: &DotPose) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.3})",
            pose.offset.x, pose.offset.y, pose.scale
        )
    }
}

pub struct MeshField {
    dots: Vec<MeshDot>,
}

impl MeshField {
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let dots = (0..count)
            .map(|_| MeshDot {
                left_pct: rng.gen_range(0.0..100.0),
                top_pct: rng.gen_range(0.0..100.0),
                drift: DVec2::new(
                    rng.gen_range(-MESH_DRIFT_RANGE_PX..MESH_DRIFT_RANGE_PX),
                    rng.gen_range(-MESH_DRIFT_RANGE_PX..MESH_DRIFT_RANGE_PX),
                ),
                duration_ms: MESH_DURATION_MIN_MS + rng.gen::<f64>() * MESH_DURATION_SPAN_MS,
                delay_ms: rng.gen::<f64>() * MESH_DELAY_MAX_MS,
            })
            .collect();
        Self { dots }
    }

    #[inline]
    pub fn dots(&self) -> &[MeshDot] {
        &self.dots
    }
}
