// Shared tuning constants for the landing page effects.

// Scramble text
pub const SCRAMBLE_GLYPHS: &str = "!<>-_\\/[]{}=+*^?#";
pub const SCRAMBLE_START_SPAN: u32 = 40; // start frame drawn from [0, span)
pub const SCRAMBLE_LENGTH_SPAN: u32 = 40; // end = start + [0, span)
pub const SCRAMBLE_REROLL_PROBABILITY: f64 = 0.28;
pub const SCRAMBLE_ACCENT_STYLE: &str = "color:var(--accent)";

// Counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_THOUSAND: i64 = 1_000;
pub const COUNTER_MILLION: i64 = 1_000_000;

// Magnetic buttons
pub const MAGNETIC_PULL_STRENGTH: f32 = 0.2;
pub const MAGNETIC_LABEL_FACTOR: f32 = 0.5;

// Card tilt
pub const TILT_DIVISOR: f32 = 25.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_SCALE: f32 = 1.02;

// Header
pub const HEADER_SCROLLED_AFTER_PX: f64 = 50.0;

// Mouse trail dot
pub const TRAIL_SMOOTHING: f32 = 0.1;
pub const TRAIL_DOT_SIZE_PX: f32 = 8.0;
pub const TRAIL_ACTIVE_OPACITY: &str = "0.3";

// Ink trail
pub const INK_COOLDOWN_MS: f64 = 100.0;
pub const INK_MIN_SIZE_PX: f64 = 4.0;
pub const INK_SIZE_SPAN_PX: f64 = 6.0;
pub const INK_OPACITY: f64 = 0.15;
pub const INK_LIFETIME_MS: i32 = 2000;

// Typewriter demo
pub const TYPEWRITER_CHAR_INTERVAL_MS: u32 = 50;
pub const TYPEWRITER_RESULT_DELAY_MS: u32 = 500;
pub const TYPEWRITER_HOLD_MS: u32 = 4000;

// Visibility thresholds (fraction of the element in view)
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const SCRAMBLE_THRESHOLD: f64 = 0.5;
pub const TYPEWRITER_THRESHOLD: f64 = 0.3;
