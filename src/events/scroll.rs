use crate::constants::*;
use crate::dom;
use crate::frame;
use crate::fx::gate::{FrameGate, ScrollTracker};
use crate::fx::motion;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Translate `[data-parallax]` shapes by `scrollY * speed`, at most once per frame.
pub fn wire_parallax(window: &web::Window, document: &web::Document) {
    let shapes: Rc<Vec<(web::HtmlElement, f64)>> = Rc::new(
        dom::query_all(document, PARALLAX_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let speed = motion::parse_parallax_speed(el.get_attribute(PARALLAX_ATTR).as_deref());
                dom::as_html(&el).map(|h| (h, speed))
            })
            .collect(),
    );
    if shapes.is_empty() {
        log::debug!("[scroll] no parallax targets");
        return;
    }
    log::info!("[scroll] parallax targets={}", shapes.len());

    let tracker = Rc::new(RefCell::new(ScrollTracker::default()));
    let w = window.clone();
    dom::listen_passive(window, "scroll", move |_: web::Event| {
        if !tracker.borrow_mut().on_scroll(scroll_y(&w)) {
            return;
        }
        let (tracker, shapes) = (tracker.clone(), shapes.clone());
        frame::next_frame(move || {
            let y = tracker.borrow_mut().take();
            for (el, speed) in shapes.iter() {
                let offset = motion::parallax_offset(y, *speed);
                dom::set_style(el, "transform", &motion::translate_y_css(offset));
            }
        });
    });
}

/// Header `scrolled` class and the scroll progress bar, sharing one gate.
pub fn wire_header_and_progress(window: &web::Window, document: &web::Document) {
    let header = dom::query_one(document, HEADER_SELECTOR);
    let progress = document
        .get_element_by_id(SCROLL_PROGRESS_ID)
        .and_then(|el| dom::as_html(&el));
    if header.is_none() && progress.is_none() {
        log::debug!("[scroll] no header or progress bar");
        return;
    }

    let gate = Rc::new(RefCell::new(FrameGate::default()));
    let (w, doc) = (window.clone(), document.clone());
    dom::listen_passive(window, "scroll", move |_: web::Event| {
        if !gate.borrow_mut().request() {
            return;
        }
        let (gate, w, doc) = (gate.clone(), w.clone(), doc.clone());
        let (header, progress) = (header.clone(), progress.clone());
        frame::next_frame(move || {
            gate.borrow_mut().begin();
            let y = scroll_y(&w);
            if let Some(h) = &header {
                _ = h
                    .class_list()
                    .toggle_with_force(HEADER_SCROLLED_CLASS, motion::header_scrolled(y));
            }
            if let Some(bar) = &progress {
                let doc_height = doc
                    .document_element()
                    .map(|el| el.scroll_height() as f64)
                    .unwrap_or(0.0);
                let viewport = w
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                let pct = motion::scroll_percent(y, doc_height, viewport);
                dom::set_style(bar, "width", &format!("{}%", pct));
            }
        });
    });
}
