pub mod pointer;
pub mod scroll;

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that is removed from its target when dropped.
pub struct Listener<F: ?Sized + WasmClosure> {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<F>,
}

impl Listener<dyn FnMut()> {
    /// Register a passive listener that ignores the event object.
    pub fn passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Listener<dyn FnMut(web::PointerEvent)> {
    pub fn pointer(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl<F: ?Sized + WasmClosure> Drop for Listener<F> {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
