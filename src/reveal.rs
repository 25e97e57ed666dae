use crate::constants::*;
use crate::dom;
use crate::frame;
use crate::fx::counter::{counter_suffix, parse_count, CounterAnimation, CounterConfig};
use crate::fx::visibility::{COUNTER_RULE, REVEAL_RULE};
use crate::observe;
use instant::Instant;
use web_sys as web;

/// Add the `visible` marker class to animated sections once they scroll in.
pub fn wire_reveal_on_scroll(document: &web::Document) {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    // wait a frame so initial layout has settled before the first observation
    frame::next_frame(move || {
        let wired = observe::observe_all(&targets, REVEAL_RULE, |_| {
            Box::new(|el: &web::Element| {
                _ = el.class_list().add_1(VISIBLE_CLASS);
            }) as Box<dyn FnMut(&web::Element)>
        });
        log::info!("[reveal] targets={}", wired);
    });
}

pub fn wire_counters(document: &web::Document, config: CounterConfig) {
    let targets = dom::query_all(document, COUNTER_SELECTOR);
    let wired = observe::observe_all(&targets, COUNTER_RULE, move |_| {
        Box::new(move |el: &web::Element| start_counter(el, config)) as Box<dyn FnMut(&web::Element)>
    });
    log::info!("[counter] targets={}", wired);
}

fn start_counter(el: &web::Element, config: CounterConfig) {
    let target = parse_count(el.get_attribute(COUNTER_ATTR).as_deref());
    let suffix = counter_suffix(&el.text_content().unwrap_or_default());
    let anim = CounterAnimation::new(target, suffix, config);
    log::debug!("[counter] animating to {}", anim.target());

    _ = el.class_list().add_1(COUNTING_CLASS);
    let el = el.clone();
    let started = Instant::now();
    frame::run_frames(move || {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let frame = anim.sample(elapsed_ms);
        el.set_text_content(Some(&frame.text));
        if frame.done {
            _ = el.class_list().remove_1(COUNTING_CLASS);
        }
        !frame.done
    });
}
