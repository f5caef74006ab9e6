// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// - Listeners en elementos del DOM: el navegador los limpia al destruir el
//   elemento, closure.forget() es seguro.
// - Listeners globales (window/document): registrar UNA VEZ al inicio
//   (ver App::start_router).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, MouseEvent};

/// Listener genérico sobre cualquier EventTarget (window, document, elemento)
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// mouseenter / mouseleave sobre un elemento
pub fn on_hover<E, L>(element: &Element, mut enter: E, mut leave: L) -> Result<(), JsValue>
where
    E: FnMut() + 'static,
    L: FnMut() + 'static,
{
    on_event(element, "mouseenter", move |_e| enter())?;
    on_event(element, "mouseleave", move |_e| leave())
}
