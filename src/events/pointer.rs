use crate::constants::*;
use crate::dom::{self, JsRandom};
use crate::frame;
use crate::fx::constants::*;
use crate::fx::cooldown::Cooldown;
use crate::fx::ink::{InkDot, INK_FADE_KEYFRAMES};
use crate::fx::motion::{self, TrailFollower};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_hero_spotlight(document: &web::Document) {
    let (Some(spot), Some(hero)) = (
        document
            .get_element_by_id(HERO_SPOTLIGHT_ID)
            .and_then(|el| dom::as_html(&el)),
        dom::query_one(document, HERO_SELECTOR),
    ) else {
        log::debug!("[pointer] no hero spotlight");
        return;
    };
    let hero_for_listener = hero.clone();
    dom::listen(&hero_for_listener, "mousemove", move |ev: web::MouseEvent| {
        let at = motion::spotlight_offset(client_pos(&ev), &dom::bounds(&hero));
        dom::set_style(&spot, "left", &format!("{}px", at.x));
        dom::set_style(&spot, "top", &format!("{}px", at.y));
        dom::set_style(&spot, "transform", "translate(-50%, -50%)");
    });
}

pub fn wire_magnetic_buttons(document: &web::Document) {
    let buttons = dom::query_all(document, MAGNETIC_SELECTOR);
    let mut wired = 0;
    for btn in buttons {
        let Some(el) = dom::as_html(&btn) else {
            continue;
        };
        let label = btn
            .query_selector(MAGNETIC_LABEL_SELECTOR)
            .ok()
            .flatten()
            .and_then(|l| dom::as_html(&l));

        let (el_move, label_move) = (el.clone(), label.clone());
        dom::listen(&el, "mousemove", move |ev: web::MouseEvent| {
            let (pull, label_pull) =
                motion::magnetic_pull(client_pos(&ev), &dom::bounds(&el_move), MAGNETIC_PULL_STRENGTH);
            dom::set_style(&el_move, "transform", &motion::translate_css(pull));
            if let Some(l) = &label_move {
                dom::set_style(l, "transform", &motion::translate_css(label_pull));
            }
        });

        let el_leave = el.clone();
        dom::listen(&el, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&el_leave, "transform", "");
            if let Some(l) = &label {
                dom::set_style(l, "transform", "");
            }
        });
        wired += 1;
    }
    log::info!("[pointer] magnetic buttons={}", wired);
}

pub fn wire_card_tilt(document: &web::Document) {
    let cards = dom::query_all(document, TILT_SELECTOR);
    let mut wired = 0;
    for card in cards {
        let Some(el) = dom::as_html(&card) else {
            continue;
        };
        let el_move = el.clone();
        dom::listen(&el, "mousemove", move |ev: web::MouseEvent| {
            let tilt = motion::card_tilt(client_pos(&ev), &dom::bounds(&el_move), TILT_DIVISOR);
            dom::set_style(&el_move, "transform", &tilt.to_css());
        });
        let el_leave = el.clone();
        dom::listen(&el, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&el_leave, "transform", "");
        });
        wired += 1;
    }
    log::info!("[pointer] tilt cards={}", wired);
}

/// Persistent dot that trails the cursor with exponential smoothing.
pub fn wire_mouse_trail(document: &web::Document) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let dot = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = dot.set_attribute("style", TRAIL_DOT_CSS);
    body.append_child(&dot)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let follower = Rc::new(RefCell::new(TrailFollower::default()));

    let (f_move, dot_move) = (follower.clone(), dot.clone());
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        f_move.borrow_mut().set_target(client_pos(&ev));
        dom::set_style(&dot_move, "opacity", TRAIL_ACTIVE_OPACITY);
    });
    let dot_leave = dot.clone();
    dom::listen(document, "mouseleave", move |_: web::MouseEvent| {
        dom::set_style(&dot_leave, "opacity", "0");
    });

    frame::start_loop(move || {
        let at = follower.borrow_mut().step(TRAIL_SMOOTHING);
        dom::set_style(&dot, "left", &format!("{}px", at.x));
        dom::set_style(&dot, "top", &format!("{}px", at.y));
    });
    Ok(())
}

/// Fading ink blots behind the cursor over the hero, at most one per cooldown window.
pub fn wire_ink_trail(document: &web::Document) -> anyhow::Result<()> {
    dom::inject_style(document, INK_FADE_KEYFRAMES)?;
    let Some(hero) = dom::query_one(document, HERO_SELECTOR) else {
        log::debug!("[pointer] no hero for ink trail");
        return Ok(());
    };

    let doc = document.clone();
    let container = hero.clone();
    let origin = Instant::now();
    let mut cooldown = Cooldown::new(INK_COOLDOWN_MS);
    let mut rng = JsRandom;
    dom::listen(&hero, "mousemove", move |ev: web::MouseEvent| {
        let now_ms = origin.elapsed().as_secs_f64() * 1000.0;
        if !cooldown.try_acquire(now_ms) {
            return;
        }
        let Ok(ink) = doc.create_element("div") else {
            return;
        };
        let dot = InkDot::spawn(ev.offset_x() as f64, ev.offset_y() as f64, &mut rng);
        _ = ink.set_attribute("style", &dot.css_text());
        if container.append_child(&ink).is_err() {
            return;
        }
        dom::set_timeout(INK_LIFETIME_MS, move || ink.remove());
    });
    Ok(())
}
