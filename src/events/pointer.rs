use super::Listener;
use crate::core::AmbientAnimator;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer position in CSS pixels relative to the container's top-left corner.
#[inline]
pub fn pointer_container_px(ev: &web::PointerEvent, container: &web::Element) -> DVec2 {
    let rect = container.get_bounding_client_rect();
    DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

/// Feed window pointer moves into the animator. The container itself is
/// usually `pointer-events: none`, so the window is the listening target.
pub fn wire_pointermove(
    container: web::Element,
    animator: Rc<RefCell<AmbientAnimator>>,
) -> Option<Listener<dyn FnMut(web::PointerEvent)>> {
    let window = web::window()?;
    Some(Listener::pointer(&window, "pointermove", move |ev| {
        let pos = pointer_container_px(&ev, &container);
        animator.borrow_mut().set_target(pos);
    }))
}
