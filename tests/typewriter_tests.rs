// Host-side tests for the typewriter demo loop.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/fx/mod.rs"]
mod fx;

use fx::typewriter::*;

const SAMPLES: &[TypewriterSample] = &[
    TypewriterSample {
        text: "hi",
        is_ai: true,
        result: "AI",
    },
    TypewriterSample {
        text: "",
        is_ai: false,
        result: "Human",
    },
];

fn step(action: TypewriterAction, delay_ms: u32) -> Option<TypewriterStep> {
    Some(TypewriterStep { action, delay_ms })
}

#[test]
fn types_then_shows_result_then_advances() {
    let mut tw = Typewriter::new(SAMPLES, TypewriterConfig::default());
    assert_eq!(tw.advance(), step(TypewriterAction::Begin, 50));
    assert_eq!(tw.advance(), step(TypewriterAction::Type('h'), 50));
    assert_eq!(tw.advance(), step(TypewriterAction::Type('i'), 550));
    assert_eq!(
        tw.advance(),
        step(
            TypewriterAction::ShowResult {
                text: "AI",
                is_ai: true
            },
            4000
        )
    );
    assert_eq!(tw.current_index(), 1);
}

#[test]
fn empty_sample_goes_straight_to_result() {
    let mut tw = Typewriter::new(SAMPLES, TypewriterConfig::default());
    for _ in 0..4 {
        tw.advance();
    }
    assert_eq!(tw.advance(), step(TypewriterAction::Begin, 550));
    assert_eq!(
        tw.advance(),
        step(
            TypewriterAction::ShowResult {
                text: "Human",
                is_ai: false
            },
            4000
        )
    );
    // wraps back to the first sample
    assert_eq!(tw.current_index(), 0);
    assert_eq!(tw.advance(), step(TypewriterAction::Begin, 50));
}

#[test]
fn demo_samples_cycle_in_order() {
    let mut tw = Typewriter::new(DEMO_SAMPLES, TypewriterConfig::default());
    let mut shown = Vec::new();
    while shown.len() < DEMO_SAMPLES.len() + 1 {
        if let Some(TypewriterStep {
            action: TypewriterAction::ShowResult { text, .. },
            ..
        }) = tw.advance()
        {
            shown.push(text);
        }
    }
    assert_eq!(shown[0], DEMO_SAMPLES[0].result);
    assert_eq!(shown[3], DEMO_SAMPLES[3].result);
    assert_eq!(shown[4], DEMO_SAMPLES[0].result);
}

#[test]
fn typed_characters_rebuild_the_line() {
    let mut tw = Typewriter::new(DEMO_SAMPLES, TypewriterConfig::default());
    let mut line = String::new();
    loop {
        match tw.advance().map(|s| s.action) {
            Some(TypewriterAction::Begin) => line.clear(),
            Some(TypewriterAction::Type(c)) => line.push(c),
            _ => break,
        }
    }
    assert_eq!(line, DEMO_SAMPLES[0].text);
}

#[test]
fn custom_timing_is_honoured() {
    let cfg = TypewriterConfig {
        char_interval_ms: 10,
        result_delay_ms: 90,
        hold_ms: 1000,
    };
    let mut tw = Typewriter::new(SAMPLES, cfg);
    assert_eq!(tw.advance().map(|s| s.delay_ms), Some(10));
    assert_eq!(tw.advance().map(|s| s.delay_ms), Some(10));
    assert_eq!(tw.advance().map(|s| s.delay_ms), Some(100));
    assert_eq!(tw.advance().map(|s| s.delay_ms), Some(1000));
}

#[test]
fn no_samples_means_no_steps() {
    let mut tw = Typewriter::new(&[], TypewriterConfig::default());
    assert_eq!(tw.advance(), None);
}

#[test]
fn result_banner_classes() {
    assert_eq!(result_class(None), "typewriter-result");
    assert_eq!(result_class(Some(true)), "typewriter-result visible ai");
    assert_eq!(result_class(Some(false)), "typewriter-result visible human");
}
