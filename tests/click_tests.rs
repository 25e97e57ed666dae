// Host-side tests for delegated click handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/fx/mod.rs"]
mod fx;

use fx::click::*;
use std::collections::BTreeSet;

#[derive(Default)]
struct FakeClasses(BTreeSet<String>);

impl ClassToggle for FakeClasses {
    fn toggle_class(&mut self, class: &str) -> bool {
        if self.0.remove(class) {
            false
        } else {
            self.0.insert(class.to_string());
            true
        }
    }
}

#[test]
fn faq_question_wins_over_anchor() {
    assert_eq!(classify_click(true, Some("#pricing")), ClickAction::ToggleFaq);
    assert_eq!(classify_click(true, None), ClickAction::ToggleFaq);
}

#[test]
fn in_page_anchor_scrolls_to_target() {
    assert_eq!(
        classify_click(false, Some("#features")),
        ClickAction::ScrollTo("#features".to_string())
    );
}

#[test]
fn bare_hash_and_plain_clicks_are_ignored() {
    assert_eq!(classify_click(false, Some("#")), ClickAction::Ignore);
    assert_eq!(classify_click(false, Some("/pricing")), ClickAction::Ignore);
    assert_eq!(classify_click(false, None), ClickAction::Ignore);
}

#[test]
fn faq_item_toggles_on_alternating_clicks() {
    let mut item = FakeClasses::default();
    assert!(toggle_open(&mut item));
    assert!(item.0.contains(OPEN_CLASS));
    assert!(!toggle_open(&mut item));
    assert!(!item.0.contains(OPEN_CLASS));
    assert!(toggle_open(&mut item));
}

#[test]
fn toggling_leaves_other_classes_alone() {
    let mut item = FakeClasses::default();
    item.0.insert("faq-item".to_string());
    toggle_open(&mut item);
    toggle_open(&mut item);
    assert_eq!(item.0.len(), 1);
    assert!(item.0.contains("faq-item"));
}
