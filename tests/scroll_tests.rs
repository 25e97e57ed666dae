// Host-side tests for scroll-driven effects and frame coalescing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/fx/mod.rs"]
mod fx;

use fx::gate::*;
use fx::motion::*;

#[test]
fn burst_of_requests_queues_one_frame() {
    let mut gate = FrameGate::default();
    let queued = (0..100).filter(|_| gate.request()).count();
    assert_eq!(queued, 1);
    assert!(gate.is_pending());

    gate.begin();
    assert!(!gate.is_pending());
    assert!(gate.request());
}

#[test]
fn tracker_hands_latest_offset_to_frame() {
    let mut tracker = ScrollTracker::default();
    let mut frames = 0;
    for y in 0..100 {
        if tracker.on_scroll(y as f64 * 3.0) {
            frames += 1;
        }
    }
    assert_eq!(frames, 1);
    assert_eq!(tracker.take(), 297.0);
    assert!(!tracker.is_pending());
    assert!(tracker.on_scroll(300.0));
}

#[test]
fn parallax_scales_scroll_by_speed() {
    assert_eq!(parallax_offset(200.0, 0.5), 100.0);
    assert_eq!(parallax_offset(200.0, -0.25), -50.0);
    assert_eq!(parallax_offset(0.0, 3.0), 0.0);
    assert_eq!(translate_y_css(100.0), "translateY(100px)");
}

#[test]
fn parallax_speed_defaults_to_still() {
    assert_eq!(parse_parallax_speed(Some("0.3")), 0.3);
    assert_eq!(parse_parallax_speed(Some("-1")), -1.0);
    assert_eq!(parse_parallax_speed(Some("fast")), 0.0);
    assert_eq!(parse_parallax_speed(Some("NaN")), 0.0);
    assert_eq!(parse_parallax_speed(None), 0.0);
}

#[test]
fn parallax_speed_reads_leading_number() {
    assert_eq!(parse_parallax_speed(Some("0.5px")), 0.5);
    assert_eq!(parse_parallax_speed(Some(" .25 ")), 0.25);
    assert_eq!(parse_parallax_speed(Some("-0.2rem")), -0.2);
    assert_eq!(parse_parallax_speed(Some("2.")), 2.0);
    assert_eq!(parse_parallax_speed(Some("1e-1x")), 0.1);
    assert_eq!(parse_parallax_speed(Some("3e")), 3.0);
    assert_eq!(parse_parallax_speed(Some(".")), 0.0);
    assert_eq!(parse_parallax_speed(Some("1e999")), 0.0);
}

#[test]
fn scroll_percent_over_scrollable_range() {
    assert_eq!(scroll_percent(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_percent(1000.0, 3000.0, 1000.0), 50.0);
    assert_eq!(scroll_percent(2000.0, 3000.0, 1000.0), 100.0);
}

#[test]
fn scroll_percent_is_zero_when_page_fits() {
    assert_eq!(scroll_percent(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_percent(10.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn header_marks_scrolled_past_threshold() {
    assert!(!header_scrolled(0.0));
    assert!(!header_scrolled(50.0));
    assert!(header_scrolled(50.5));
}
