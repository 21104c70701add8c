use crate::core::{IntersectionSample, ObserveOptions, Transition, ViewportObservation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// An `IntersectionObserver` bound to one element. Reports visibility
/// transitions through `on_change` and disconnects when dropped.
pub struct VisibilityObserver {
    observer: web::IntersectionObserver,
    state: Rc<RefCell<ViewportObservation>>,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    pub fn observe(
        element: &web::Element,
        options: ObserveOptions,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(ViewportObservation::new(options)));

        let state_cb = state.clone();
        let target = element.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let sample = IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    let (transition, done) = {
                        let mut s = state_cb.borrow_mut();
                        let t = s.on_intersection(sample);
                        if t != Transition::None {
                            log::debug!(
                                "[observer] {:?} at ratio {:.2} (threshold {:.2})",
                                s.phase(),
                                sample.ratio,
                                s.options().threshold()
                            );
                        }
                        (t, s.should_unobserve())
                    };
                    match transition {
                        Transition::Entered => on_change(true),
                        Transition::Exited => on_change(false),
                        Transition::None => {}
                    }
                    if done {
                        observer.unobserve(&target);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold()));
        init.set_root_margin(&options.root_margin_css());
        let callback_fn: &js_sys::Function = callback.as_ref().unchecked_ref();
        let observer = web::IntersectionObserver::new_with_options(callback_fn, &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {e:?}"))?;
        observer.observe(element);
        state.borrow_mut().attach();

        Ok(Self {
            observer,
            state,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.state.borrow_mut().detach();
        self.observer.disconnect();
    }
}
