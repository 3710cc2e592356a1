// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners are registered once at startup on elements that live as long as
// the page, so closure.forget() does not accumulate.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, FocusEvent, KeyboardEvent, MouseEvent};

fn listen<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(target, "click", handler)
}

pub fn on_input<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(target, "input", handler)
}

pub fn on_blur<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(FocusEvent) + 'static,
{
    listen(target, "blur", handler)
}

/// Enter pressed inside the target
pub fn on_enter<F>(target: &EventTarget, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(target, "keypress", move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            handler();
        }
    })
}
