use std::time::Duration;

// Timing and geometry constants shared with the web frontend.

// Particle field
pub const PARTICLE_AREA_PER_PARTICLE: f64 = 9000.0; // px² of viewport per particle
pub const PARTICLE_SPEED_MAX: f64 = 0.2; // px per tick, per axis
pub const PARTICLE_SIZE_MIN: f64 = 1.0;
pub const PARTICLE_SIZE_MAX: f64 = 3.0;
pub const PARTICLE_COLOR: &str = "rgba(0,0,0,0.5)";

// Typing effect
pub const TYPE_INTERVAL: Duration = Duration::from_millis(200);
pub const DELETE_INTERVAL: Duration = Duration::from_millis(100);
pub const HOLD_BEFORE_DELETE: Duration = Duration::from_millis(2000);

// Scroll effects
pub const HEADER_SCROLLED_AFTER_PX: f64 = 50.0;
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.85; // trigger line, from the viewport top
pub const REVEAL_INTERSECTION_RATIO: f64 = 0.1;
pub const NAV_PROBE_OFFSET_PX: f64 = 150.0; // roughly the fixed header height

// Project showcase
pub const CATALOG_LIMIT: usize = 6;
pub const MODAL_ENTER_DELAY: Duration = Duration::from_millis(50);
pub const MODAL_EXIT_DELAY: Duration = Duration::from_millis(300);
pub const PLACEHOLDER_COLOR_SPAN: u32 = 0xFF_FFFF;

// Contact form
pub const CONTACT_SEND_DELAY: Duration = Duration::from_millis(1000);
pub const CONTACT_CLEAR_DELAY: Duration = Duration::from_millis(5000);
