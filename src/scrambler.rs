use crate::constants::SCRAMBLE_SELECTOR;
use crate::dom::{self, JsRandom};
use crate::fx::scramble::{
    segments_to_html, FrameId, FrameScheduler, ScrambleConfig, ScrambleDriver, Segment,
    TextSurface,
};
use crate::fx::visibility::SCRAMBLE_RULE;
use crate::fx::constants::SCRAMBLE_ACCENT_STYLE;
use crate::observe;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        let w = web::window()?;
        let cb = self.callback.borrow();
        let cb = cb.as_ref()?;
        w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(id);
        }
    }
}

struct HtmlSurface {
    el: web::Element,
}

impl TextSurface for HtmlSurface {
    fn text(&self) -> String {
        match dom::as_html(&self.el) {
            Some(h) => h.inner_text(),
            None => self.el.text_content().unwrap_or_default(),
        }
    }

    fn write(&mut self, segments: &[Segment]) {
        self.el
            .set_inner_html(&segments_to_html(segments, SCRAMBLE_ACCENT_STYLE));
    }
}

type WebDriver = ScrambleDriver<RafScheduler, HtmlSurface, JsRandom>;

/// Scramble-reveal bound to one element.
#[derive(Clone)]
pub struct TextScrambler {
    driver: Rc<RefCell<WebDriver>>,
}

impl TextScrambler {
    pub fn new(el: web::Element, config: ScrambleConfig) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let driver = Rc::new(RefCell::new(ScrambleDriver::new(
            config,
            RafScheduler {
                callback: callback.clone(),
            },
            HtmlSurface { el },
            JsRandom,
        )));
        let weak = Rc::downgrade(&driver);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(d) = weak.upgrade() {
                d.borrow_mut().on_frame();
            }
        }) as Box<dyn FnMut()>));
        Self { driver }
    }

    /// Start revealing `text`; the promise resolves when every character has settled.
    /// A later call supersedes this one and its promise never resolves.
    pub fn set_text(&self, text: &str) -> js_sys::Promise {
        let driver = self.driver.clone();
        js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject| {
            driver.borrow_mut().set_text(text, move || {
                _ = resolve.call0(&JsValue::UNDEFINED);
            });
        })
    }
}

/// Reveal every `[data-scramble]` heading the first time it is half visible.
pub fn wire_scramble_headings(document: &web::Document) {
    let targets = dom::query_all(document, SCRAMBLE_SELECTOR);
    let wired = observe::observe_all(&targets, SCRAMBLE_RULE, |el| {
        let scrambler = TextScrambler::new(el.clone(), ScrambleConfig::default());
        let original = el.text_content().unwrap_or_default();
        Box::new(move |_: &web::Element| {
            _ = scrambler.set_text(&original);
        }) as Box<dyn FnMut(&web::Element)>
    });
    log::info!("[scramble] targets={}", wired);
}
