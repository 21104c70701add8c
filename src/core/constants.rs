// Motion tuning constants.
//
// Thresholds, delays and radii used by the animation code.

// Visibility
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element that must be on screen
pub const STAGGER_ROOT_MARGIN_PX: f64 = -100.0; // shrinks the viewport for stagger groups

// Entrances (milliseconds / pixels)
pub const DEFAULT_ENTRANCE_DURATION_MS: f64 = 800.0;
pub const FADE_UP_OFFSET_PX: f64 = 30.0;
pub const FADE_DOWN_OFFSET_PX: f64 = -20.0;
pub const SLIDE_OFFSET_PX: f64 = 50.0;
pub const SCALE_IN_FROM: f64 = 0.9;
pub const RISE_OFFSET_PX: f64 = 20.0;
pub const RISE_SCALE_FROM: f64 = 0.95;

// Stagger
pub const DEFAULT_STAGGER_DELAY_MS: f64 = 100.0;
pub const DEFAULT_INITIAL_DELAY_MS: f64 = 0.0;
pub const METER_INITIAL_DELAY_MS: f64 = 300.0;
pub const METER_STAGGER_DELAY_MS: f64 = 100.0;
pub const METER_FILL_DURATION_MS: f64 = 1000.0;

// Parallax
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const PARALLAX_DISTANCE_PER_SPEED_PX: f64 = 100.0;

// Pointer glow and particle swarm
pub const POINTER_SMOOTHING: f64 = 0.1; // fraction of the remaining distance covered per frame
pub const PARTICLE_COUNT: usize = 8;
pub const PARTICLE_ORBIT_RADIUS_PX: f64 = 20.0;
pub const PARTICLE_PHASE_RATE_PER_MS: f64 = 0.001;
pub const PARTICLE_BASE_OPACITY: f64 = 0.6;
pub const PARTICLE_OPACITY_STEP: f64 = 0.07; // 8 particles stay above zero
pub const GLOW_HALF_SIZE_PX: f64 = 100.0;
pub const PARTICLE_HALF_SIZE_PX: f64 = 10.0;

// Ambient mesh
pub const MESH_DOT_COUNT: usize = 50;
pub const MESH_DRIFT_RANGE_PX: f64 = 50.0;
pub const MESH_DURATION_MIN_MS: f64 = 2000.0;
pub const MESH_DURATION_SPAN_MS: f64 = 3000.0;
pub const MESH_DELAY_MAX_MS: f64 = 2000.0;
pub const MESH_OPACITY_LOW: f64 = 0.2;
pub const MESH_OPACITY_HIGH: f64 = 0.8;
pub const MESH_SCALE_PEAK: f64 = 1.5;

// Navigation
pub const NAV_SCROLLED_AFTER_PX: f64 = 50.0;
pub const NAV_PROBE_LINE_PX: f64 = 100.0;
