// Host-side tests for tuning constants, visibility rules and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/fx/mod.rs"]
mod fx;

use fx::constants::*;
use fx::visibility::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    for t in [
        REVEAL_THRESHOLD,
        COUNTER_THRESHOLD,
        SCRAMBLE_THRESHOLD,
        TYPEWRITER_THRESHOLD,
    ] {
        assert!(t > 0.0 && t <= 1.0);
    }
    assert!(SCRAMBLE_REROLL_PROBABILITY > 0.0 && SCRAMBLE_REROLL_PROBABILITY < 1.0);
    assert!(TRAIL_SMOOTHING > 0.0 && TRAIL_SMOOTHING <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(COUNTER_DURATION_MS > 0.0);
    assert!(INK_COOLDOWN_MS > 0.0);
    assert!(INK_LIFETIME_MS > 0);
    assert!(TYPEWRITER_CHAR_INTERVAL_MS > 0);
    assert!(TYPEWRITER_HOLD_MS > TYPEWRITER_RESULT_DELAY_MS);
    assert!(SCRAMBLE_START_SPAN > 0 && SCRAMBLE_LENGTH_SPAN > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(COUNTER_MILLION > COUNTER_THOUSAND);
    // a dot lives long enough for many spawns to overlap
    assert!(INK_LIFETIME_MS as f64 > INK_COOLDOWN_MS);
    assert!(MAGNETIC_LABEL_FACTOR < 1.0);
    assert!(!SCRAMBLE_GLYPHS.is_empty());
}

#[test]
fn one_shot_rule_fires_once() {
    let mut latch = VisibilityLatch::new(COUNTER_RULE);
    assert!(!latch.observe(false));
    assert!(!latch.is_spent());
    assert!(latch.observe(true));
    assert!(latch.is_spent());
    assert!(!latch.observe(false));
    assert!(!latch.observe(true));
}

#[test]
fn repeating_rule_fires_whenever_visible() {
    let mut latch = VisibilityLatch::new(REVEAL_RULE);
    assert!(latch.observe(true));
    assert!(!latch.observe(false));
    assert!(latch.observe(true));
    assert!(!latch.is_spent());
}

#[test]
fn rules_match_their_effects() {
    assert_eq!(REVEAL_RULE.threshold, 0.1);
    assert_eq!(COUNTER_RULE.threshold, 0.5);
    assert_eq!(SCRAMBLE_RULE.threshold, 0.5);
    assert_eq!(TYPEWRITER_RULE.threshold, 0.3);
    assert!(COUNTER_RULE.once && SCRAMBLE_RULE.once && TYPEWRITER_RULE.once);
    assert!(!REVEAL_RULE.once);
}
