use crate::constants::*;
use crate::dom;
use crate::fx::typewriter::{
    result_class, Typewriter, TypewriterAction, TypewriterConfig, DEMO_SAMPLES,
};
use crate::fx::visibility::TYPEWRITER_RULE;
use crate::observe;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct DemoTargets {
    line: web::Element,
    result: Option<web::Element>,
}

/// Start the typewriter demo loop once `.typewriter-demo` scrolls into view.
pub fn wire_typewriter_demo(document: &web::Document, config: TypewriterConfig) {
    let Some(demo) = dom::query_one(document, TYPEWRITER_DEMO_SELECTOR) else {
        log::debug!("[typewriter] no demo section");
        return;
    };
    let Some(line) = dom::query_one(document, TYPEWRITER_LINE_SELECTOR) else {
        log::debug!("[typewriter] no line element");
        return;
    };
    let targets = DemoTargets {
        line,
        result: document.get_element_by_id(TYPEWRITER_RESULT_ID),
    };

    let mut started = false;
    let res = observe::observe(&demo, TYPEWRITER_RULE, move |_| {
        if started {
            return;
        }
        started = true;
        let tw = Rc::new(RefCell::new(Typewriter::new(DEMO_SAMPLES, config)));
        run_step(tw, targets.clone());
    });
    if let Err(e) = res {
        log::warn!("[typewriter] {:?}", e);
    }
}

fn run_step(tw: Rc<RefCell<Typewriter>>, targets: DemoTargets) {
    let Some(step) = tw.borrow_mut().advance() else {
        return;
    };
    match step.action {
        TypewriterAction::Begin => {
            targets.line.set_text_content(Some(""));
            if let Some(r) = &targets.result {
                r.set_class_name(&result_class(None));
            }
        }
        TypewriterAction::Type(c) => {
            let mut text = targets.line.text_content().unwrap_or_default();
            text.push(c);
            targets.line.set_text_content(Some(&text));
        }
        TypewriterAction::ShowResult { text, is_ai } => {
            if let Some(r) = &targets.result {
                r.set_text_content(Some(text));
                r.set_class_name(&result_class(Some(is_ai)));
            }
        }
    }
    dom::set_timeout(step.delay_ms as i32, move || run_step(tw, targets));
}
