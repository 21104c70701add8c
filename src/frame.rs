use crate::core::FrameGate;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Closure<dyn FnMut(f64)>;

#[inline]
fn request_frame(callback: &FrameCallback) -> Option<i32> {
    web::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

#[inline]
fn cancel_frame(handle: i32) {
    if let Some(w) = web::window() {
        _ = w.cancel_animation_frame(handle);
    }
}

/// A `requestAnimationFrame` loop that reschedules itself every frame until
/// dropped. The callback receives milliseconds elapsed since the loop started.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Option<Self> {
        let started = Instant::now();
        let handle = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        // The closure only holds a weak reference to itself so dropping the
        // loop frees it.
        let tick_weak = Rc::downgrade(&tick);
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            handle_tick.set(None);
            on_frame(started.elapsed().as_secs_f64() * 1000.0);
            if let Some(tick) = tick_weak.upgrade() {
                handle_tick.set(tick.borrow().as_ref().and_then(request_frame));
            }
        }) as Box<dyn FnMut(f64)>));

        let first = tick.borrow().as_ref().and_then(request_frame);
        if first.is_none() {
            log::warn!("[frame] requestAnimationFrame unavailable");
            return None;
        }
        handle.set(first);
        Some(Self { handle, tick })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(h) = self.handle.take() {
            cancel_frame(h);
        }
        self.tick.borrow_mut().take();
    }
}

struct FrameRequestInner {
    gate: Cell<FrameGate>,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<FrameCallback>>,
}

/// Runs a callback on the next animation frame, however many times
/// `schedule` is called before it.
pub struct FrameRequest {
    inner: Rc<FrameRequestInner>,
}

impl FrameRequest {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(FrameRequestInner {
            gate: Cell::new(FrameGate::default()),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        *inner.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            let mut gate = inner.gate.get();
            gate.complete();
            inner.gate.set(gate);
            on_frame();
        }) as Box<dyn FnMut(f64)>));
        Self { inner }
    }

    pub fn schedule(&self) {
        let mut gate = self.inner.gate.get();
        if !gate.request() {
            return;
        }
        let handle = {
            let callback = self.inner.callback.borrow();
            callback.as_ref().and_then(request_frame)
        };
        if handle.is_none() {
            gate.complete();
        }
        self.inner.gate.set(gate);
        self.inner.handle.set(handle);
    }
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        if self.inner.gate.get().is_pending() {
            if let Some(h) = self.inner.handle.take() {
                cancel_frame(h);
            }
        }
        self.inner.callback.borrow_mut().take();
    }
}
