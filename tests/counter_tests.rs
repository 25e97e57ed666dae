// Host-side tests for the animated counters.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/fx/mod.rs"]
mod fx;

use fx::counter::*;

#[test]
fn compact_format_uses_k_and_m_with_rounding() {
    let cfg = CounterConfig::default();
    assert_eq!(format_compact(2_500_000, &cfg), "3M");
    assert_eq!(format_compact(1_000_000, &cfg), "1M");
    assert_eq!(format_compact(1500, &cfg), "2K");
    assert_eq!(format_compact(1000, &cfg), "1K");
    assert_eq!(format_compact(999, &cfg), "999");
    assert_eq!(format_compact(42, &cfg), "42");
    assert_eq!(format_compact(0, &cfg), "0");
}

#[test]
fn compact_format_respects_custom_thresholds() {
    let cfg = CounterConfig {
        thousand: 10_000,
        ..CounterConfig::default()
    };
    assert_eq!(format_compact(5_000, &cfg), "5000");
    assert_eq!(format_compact(25_000, &cfg), "3K");
}

#[test]
fn ease_out_cubic_endpoints_and_monotonic() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(0.5), 0.875);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_out_cubic(i as f64 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn animation_ends_on_formatted_target() {
    for (target, expected) in [(2_500_000, "3M"), (1500, "2K"), (42, "42")] {
        let anim = CounterAnimation::new(target, "", CounterConfig::default());
        let frame = anim.sample(2000.0);
        assert!(frame.done);
        assert_eq!(frame.text, expected);
        // overshooting the duration clamps to the same final frame
        assert_eq!(anim.sample(5000.0), frame);
    }
}

#[test]
fn animation_follows_easing_and_keeps_suffix() {
    let anim = CounterAnimation::new(1000, "+", CounterConfig::default());
    assert_eq!(anim.sample(0.0).text, "0+");
    let mid = anim.sample(1000.0);
    assert_eq!(mid.text, "875+");
    assert!(!mid.done);
    assert_eq!(anim.sample(2000.0).text, "1K+");
}

#[test]
fn values_never_decrease_over_time() {
    let anim = CounterAnimation::new(12_345, "", CounterConfig::default());
    let mut prev = 0;
    for ms in (0..=2000).step_by(16) {
        let v = anim.value_at(ms as f64);
        assert!(v >= prev);
        prev = v;
    }
    assert_eq!(anim.value_at(2000.0), 12_345);
}

#[test]
fn zero_duration_jumps_to_target() {
    let cfg = CounterConfig {
        duration_ms: 0.0,
        ..CounterConfig::default()
    };
    let anim = CounterAnimation::new(77, "%", cfg);
    let frame = anim.sample(0.0);
    assert!(frame.done);
    assert_eq!(frame.text, "77%");
}

#[test]
fn suffix_strips_digits_and_commas() {
    assert_eq!(counter_suffix("10,000+"), "+");
    assert_eq!(counter_suffix("99%"), "%");
    assert_eq!(counter_suffix("1,234"), "");
    assert_eq!(counter_suffix(""), "");
}

#[test]
fn count_attribute_parsing() {
    assert_eq!(parse_count(Some("2500000")), 2_500_000);
    assert_eq!(parse_count(Some(" 42 ")), 42);
    assert_eq!(parse_count(Some("lots")), 0);
    assert_eq!(parse_count(None), 0);
}

#[test]
fn count_attribute_reads_leading_integer() {
    assert_eq!(parse_count(Some("98.6")), 98);
    assert_eq!(parse_count(Some("500+")), 500);
    assert_eq!(parse_count(Some("-7 apples")), -7);
    assert_eq!(parse_count(Some("+12")), 12);
    assert_eq!(parse_count(Some("-")), 0);
    assert_eq!(parse_count(Some("k10")), 0);
}
