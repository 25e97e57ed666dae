use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `f` on the next display refresh.
pub fn next_frame(f: impl FnOnce() + 'static) -> Option<i32> {
    let w = web::window()?;
    let cb = Closure::once_into_js(f);
    w.request_animation_frame(cb.unchecked_ref()).ok()
}

/// Call `tick` once per frame for as long as it returns `true`.
pub fn run_frames<F>(tick: F)
where
    F: FnMut() -> bool + 'static,
{
    schedule(Rc::new(RefCell::new(tick)));
}

fn schedule<F>(tick: Rc<RefCell<F>>)
where
    F: FnMut() -> bool + 'static,
{
    next_frame(move || {
        let again = (&mut *tick.borrow_mut())();
        if again {
            schedule(tick);
        }
    });
}

/// Endless per-frame loop; the closure is kept alive for the page lifetime.
pub fn start_loop(mut frame: impl FnMut() + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    let first = tick.borrow();
    if let (Some(w), Some(cb)) = (web::window(), first.as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}
