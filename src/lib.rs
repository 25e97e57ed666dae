#![cfg(target_arch = "wasm32")]
use crate::fx::counter::CounterConfig;
use crate::fx::typewriter::TypewriterConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod demo;
mod dom;
mod events;
mod frame;
pub mod fx;
mod observe;
mod reveal;
mod scrambler;

pub use scrambler::TextScrambler;

// Drop the `loading` class after two frames so styles are applied before the page shows.
fn reveal_page(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    frame::next_frame(move || {
        frame::next_frame(move || {
            _ = root.class_list().remove_1(constants::LOADING_CLASS);
        });
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    reveal_page(&document);

    // Pointer effects
    events::wire_hero_spotlight(&document);
    events::wire_magnetic_buttons(&document);
    events::wire_card_tilt(&document);
    if let Err(e) = events::wire_mouse_trail(&document) {
        log::warn!("[pointer] mouse trail disabled: {:?}", e);
    }
    if let Err(e) = events::wire_ink_trail(&document) {
        log::warn!("[pointer] ink trail disabled: {:?}", e);
    }

    // Scroll effects
    events::wire_parallax(&window, &document);
    events::wire_header_and_progress(&window, &document);

    // Visibility-triggered effects
    reveal::wire_reveal_on_scroll(&document);
    reveal::wire_counters(&document, CounterConfig::default());
    scrambler::wire_scramble_headings(&document);
    demo::wire_typewriter_demo(&document, TypewriterConfig::default());

    events::wire_document_clicks(&document);

    log::info!("landing-fx ready");
    Ok(())
}
