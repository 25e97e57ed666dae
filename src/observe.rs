use crate::fx::visibility::{VisibilityLatch, VisibilityRule};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Call `on_visible` when `el` crosses `rule.threshold`.
///
/// One observer per element; a one-shot rule disconnects its observer after
/// the first fire.
pub fn observe(
    el: &web::Element,
    rule: VisibilityRule,
    mut on_visible: impl FnMut(&web::Element) + 'static,
) -> anyhow::Result<()> {
    let mut latch = VisibilityLatch::new(rule);
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if latch.observe(entry.is_intersecting()) {
                    on_visible(&target);
                }
                if latch.is_spent() {
                    observer.unobserve(&target);
                    observer.disconnect();
                    return;
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(rule.threshold));
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    observer.observe(el);
    closure.forget();
    Ok(())
}

/// [`observe`] every element, logging (not failing) on per-element errors.
pub fn observe_all<F>(targets: &[web::Element], rule: VisibilityRule, make_handler: F) -> usize
where
    F: Fn(&web::Element) -> Box<dyn FnMut(&web::Element)>,
{
    let mut wired = 0;
    for el in targets {
        match observe(el, rule, make_handler(el)) {
            Ok(()) => wired += 1,
            Err(e) => log::warn!("[observe] {:?}", e),
        }
    }
    wired
}
