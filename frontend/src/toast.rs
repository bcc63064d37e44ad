//! DOM-injected toast notifications.
//!
//! Fire-and-forget feedback after create/update/delete/toggle actions.
//! The toast injects a styled `div` into the document body and removes
//! itself after a few seconds.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a temporary notification with a title line and a description.
pub fn show_toast(title: &str, description: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    let html_toast: HtmlElement = toast.unchecked_into();
    html_toast.set_inner_text("");
    if let Ok(title_el) = document.create_element("strong") {
        title_el.set_text_content(Some(title));
        let _ = html_toast.append_child(&title_el);
    }
    if let Ok(desc_el) = document.create_element("div") {
        desc_el.set_text_content(Some(description));
        let _ = html_toast.append_child(&desc_el);
    }

    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();
    style.set_property("text-align", "center").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
