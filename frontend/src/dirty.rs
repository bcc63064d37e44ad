//! Global unsaved-changes flag.
//!
//! Editors publish their dirty state to a `app_dirty` property on the
//! window object; a `beforeunload` listener reads it back so the browser
//! asks for confirmation before a navigation throws away unsaved edits.

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::BeforeUnloadEvent;

pub fn set_dirty(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}

fn is_dirty() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str("app_dirty")).ok())
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

/// Installs the `beforeunload` guard. Call once at startup; the closure is
/// leaked on purpose so it outlives the whole session.
pub fn install_unload_guard() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(BeforeUnloadEvent)>::new(|event: BeforeUnloadEvent| {
        if is_dirty() {
            event.prevent_default();
            event.set_return_value("unsaved changes");
        }
    });
    if window
        .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}
