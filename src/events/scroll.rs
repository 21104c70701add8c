use super::Listener;
use crate::frame::FrameRequest;
use std::rc::Rc;
use web_sys as web;

/// Window `scroll` and `resize` listeners feeding one recomputation per
/// animation frame. Everything is deregistered when dropped.
pub struct ScrollWatch {
    _scroll: Listener<dyn FnMut()>,
    _resize: Listener<dyn FnMut()>,
    _request: Rc<FrameRequest>,
}

impl ScrollWatch {
    /// Start watching. `on_frame` also runs once on the next frame so the
    /// initial layout is picked up without waiting for a scroll.
    pub fn new(on_frame: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let request = Rc::new(FrameRequest::new(on_frame));

        let on_scroll = request.clone();
        let scroll = Listener::passive(&window, "scroll", move || on_scroll.schedule());
        let on_resize = request.clone();
        let resize = Listener::passive(&window, "resize", move || on_resize.schedule());

        request.schedule();
        Some(Self {
            _scroll: scroll,
            _resize: resize,
            _request: request,
        })
    }
}
