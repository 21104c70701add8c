// DOM contract between the page markup and the motion layer.

// Section reveals
pub const REVEAL_SECTION_SELECTOR: &str = "[data-reveal-section]";
pub const REVEAL_ITEM_SELECTOR: &str = "[data-reveal]";
pub const ATTR_REVEAL: &str = "data-reveal";
pub const ATTR_REVEAL_DELAY: &str = "data-reveal-delay";
pub const ATTR_REVEAL_DURATION: &str = "data-reveal-duration";
pub const ATTR_REVEAL_THRESHOLD: &str = "data-reveal-threshold";
pub const ATTR_REVEAL_ONCE: &str = "data-reveal-once";

// Stagger groups and meters
pub const STAGGER_SELECTOR: &str = "[data-stagger]";
pub const ATTR_STAGGER: &str = "data-stagger";
pub const ATTR_STAGGER_DELAY: &str = "data-stagger-delay";
pub const ATTR_STAGGER_INITIAL: &str = "data-stagger-initial";
pub const METER_SELECTOR: &str = "[data-meter]";
pub const ATTR_METER: &str = "data-meter";

// Parallax
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const ATTR_PARALLAX: &str = "data-parallax";
pub const ATTR_PARALLAX_DIRECTION: &str = "data-parallax-direction";
pub const ATTR_PARALLAX_OFFSET_START: &str = "data-parallax-offset-start";
pub const ATTR_PARALLAX_OFFSET_END: &str = "data-parallax-offset-end";

// Ambient background
pub const AMBIENT_CONTAINER_ID: &str = "ambient-background";
pub const GLOW_CLASS: &str = "ambient-glow";
pub const PARTICLE_CLASS: &str = "ambient-particle";
pub const MESH_DOT_CLASS: &str = "ambient-dot";

// Navigation
pub const NAV_SELECTOR: &str = "[data-nav]";
pub const NAV_LINK_SELECTOR: &str = "[data-nav-link]";
pub const SCROLLED_CLASS: &str = "is-scrolled";
pub const ACTIVE_CLASS: &str = "is-active";

// Marker added once an element's entrance has been triggered
pub const REVEALED_CLASS: &str = "is-revealed";
