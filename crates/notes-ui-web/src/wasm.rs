#![forbid(unsafe_code)]

//! `wasm-bindgen` exports over the page-wide [`NotesPage`].
//!
//! Only compiled on `wasm32` targets.

use std::cell::RefCell;

use js_sys::Reflect;
use notes_ui_core::HostError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom::WebDocument;
use crate::page::NotesPage;

thread_local! {
    static PAGE: RefCell<NotesPage<WebDocument>> = RefCell::new(NotesPage::new());
}

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

fn host_error_to_js(err: &HostError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    install_panic_hook();
}

/// Replace any existing suggestions box with a fresh one appended to
/// `<body>`, and return it.
#[wasm_bindgen(js_name = createSuggestionsBox)]
pub fn create_suggestions_box() -> Result<HtmlElement, JsValue> {
    PAGE.with(|page| {
        page.borrow_mut()
            .create_suggestions_box(WebDocument::from_window)
            .map_err(|err| host_error_to_js(&err))
    })
}

/// Hide the suggestions box if one exists. Never throws.
#[wasm_bindgen(js_name = hideSuggestionsBox)]
pub fn hide_suggestions_box() {
    PAGE.with(|page| page.borrow_mut().hide_suggestions_box());
}

/// Replace the events with a JSON array of objects; returns the new count.
#[wasm_bindgen(js_name = loadEvents)]
pub fn load_events(json: &str) -> Result<usize, JsValue> {
    PAGE.with(|page| {
        page.borrow_mut()
            .events_mut()
            .load_json(json)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    })
}

#[wasm_bindgen(js_name = eventCount)]
pub fn event_count() -> usize {
    PAGE.with(|page| page.borrow().events().len())
}

#[wasm_bindgen(js_name = eventsJson)]
pub fn events_json() -> Result<String, JsValue> {
    PAGE.with(|page| {
        page.borrow()
            .events()
            .to_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    })
}

#[wasm_bindgen(js_name = clearEvents)]
pub fn clear_events() {
    PAGE.with(|page| page.borrow_mut().events_mut().clear());
}
