use crate::constants::*;
use crate::dom;
use crate::fx::click::{classify_click, toggle_open, ClassToggle, ClickAction};
use wasm_bindgen::JsCast;
use web_sys as web;

struct DomClasses(web::DomTokenList);

impl ClassToggle for DomClasses {
    fn toggle_class(&mut self, class: &str) -> bool {
        self.0.toggle(class).unwrap_or(false)
    }
}

#[inline]
fn closest(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.closest(selector).ok().flatten()
}

/// One document-level listener for FAQ toggles and in-page anchor scrolling.
pub fn wire_document_clicks(document: &web::Document) {
    let doc = document.clone();
    dom::listen(document, "click", move |ev: web::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let faq = closest(&target, FAQ_QUESTION_SELECTOR);
        let href = match faq {
            Some(_) => None,
            None => closest(&target, ANCHOR_SELECTOR).and_then(|a| a.get_attribute("href")),
        };

        match classify_click(faq.is_some(), href.as_deref()) {
            ClickAction::ToggleFaq => {
                if let Some(item) = faq.and_then(|q| q.parent_element()) {
                    let open = toggle_open(&mut DomClasses(item.class_list()));
                    log::debug!("[click] faq open={}", open);
                }
            }
            ClickAction::ScrollTo(href) => {
                ev.prevent_default();
                if let Some(dest) = dom::query_one(&doc, &href) {
                    let opts = web::ScrollIntoViewOptions::new();
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    opts.set_block(web::ScrollLogicalPosition::Start);
                    dest.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            }
            ClickAction::Ignore => {}
        }
    });
}
