/// DOM hooks the effects attach to.
///
/// Selectors, ids and class names used by the markup. Numeric tuning lives in
/// `fx::constants` so host-side tests can reach it.
// Hero
pub const HERO_SELECTOR: &str = ".hero";
pub const HERO_SPOTLIGHT_ID: &str = "hero-spotlight";

// Scroll-driven
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_ATTR: &str = "data-parallax";
pub const HEADER_SELECTOR: &str = ".header";
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";
pub const SCROLL_PROGRESS_ID: &str = "scroll-progress";

// Counters
pub const COUNTER_SELECTOR: &str = ".stat-number[data-count]";
pub const COUNTER_ATTR: &str = "data-count";
pub const COUNTING_CLASS: &str = "counting";

// Pointer-driven
pub const MAGNETIC_SELECTOR: &str = ".btn-magnetic";
pub const MAGNETIC_LABEL_SELECTOR: &str = ".btn-text";
pub const TILT_SELECTOR: &str = ".feature-card, .detection-card, .extension-card, .demo-preview-card";

// Reveal-on-scroll
pub const REVEAL_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right, .scale-in, .stagger-children";
pub const VISIBLE_CLASS: &str = "visible";

// Click delegation
pub const FAQ_QUESTION_SELECTOR: &str = ".faq-question";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Text effects
pub const SCRAMBLE_SELECTOR: &str = "[data-scramble]";
pub const TYPEWRITER_DEMO_SELECTOR: &str = ".typewriter-demo";
pub const TYPEWRITER_LINE_SELECTOR: &str = ".line-text";
pub const TYPEWRITER_RESULT_ID: &str = "typewriter-result";

// Page
pub const LOADING_CLASS: &str = "loading";
pub const TRAIL_DOT_CSS: &str = "position: fixed; width: 8px; height: 8px; \
    background: var(--accent); border-radius: 50%; pointer-events: none; \
    z-index: 9999; opacity: 0; transition: opacity 0.3s ease;";
