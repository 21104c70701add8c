use crate::constants::*;
use crate::core::style;
use crate::core::{
    frames_to_settle, AmbientAnimator, MeshDot, MeshField, MESH_DOT_COUNT, PARTICLE_COUNT,
};
use crate::dom;
use crate::events::pointer::wire_pointermove;
use crate::events::Listener;
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Cursor glow, trailing particles and drifting mesh dots inside
/// `#ambient-background`. Styles are written directly every frame.
pub struct AmbientBackground {
    _pointer: Listener<dyn FnMut(web::PointerEvent)>,
    _frames: FrameLoop,
    animator: Rc<RefCell<AmbientAnimator>>,
    _created: CreatedNodes,
}

/// Elements added to the container; removed again when dropped, including
/// when mounting fails halfway.
struct CreatedNodes(Vec<web::HtmlElement>);

impl Drop for CreatedNodes {
    fn drop(&mut self) {
        for el in self.0.drain(..) {
            el.remove();
        }
    }
}

impl AmbientBackground {
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(container) = document.get_element_by_id(AMBIENT_CONTAINER_ID) else {
            return Ok(None);
        };
        let make = |class: &str| {
            dom::append_div(document, &container, class)
                .ok_or_else(|| anyhow::anyhow!("could not create .{class}"))
        };

        let animator = Rc::new(RefCell::new(AmbientAnimator::default()));
        let mut created = CreatedNodes(Vec::with_capacity(1 + PARTICLE_COUNT + MESH_DOT_COUNT));
        let glow = make(GLOW_CLASS)?;
        created.0.push(glow.clone());

        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        for particle in animator.borrow().particles() {
            let el = make(PARTICLE_CLASS)?;
            dom::set_style(&el, "background", &particle_color(particle.index));
            created.0.push(el.clone());
            particles.push(el);
        }

        let mesh = MeshField::generate(MESH_DOT_COUNT, rand::random());
        let mut dots = Vec::with_capacity(mesh.dots().len());
        for dot in mesh.dots() {
            let el = make(MESH_DOT_CLASS)?;
            dom::set_style(&el, "left", &style::percent(dot.left_pct));
            dom::set_style(&el, "top", &style::percent(dot.top_pct));
            created.0.push(el.clone());
            dots.push(el);
        }

        let pointer = wire_pointermove(container, animator.clone())
            .ok_or_else(|| anyhow::anyhow!("no window"))?;

        let animator_cb = animator.clone();
        let frames = FrameLoop::start(move |elapsed_ms| {
            let Some(frame) = animator_cb.borrow_mut().tick(elapsed_ms) else {
                return;
            };
            dom::set_style(&glow, "transform", &style::translate(frame.glow));
            for (el, pose) in particles.iter().zip(frame.particles.iter()) {
                dom::set_style(el, "transform", &style::translate(pose.translate));
                dom::set_style(el, "opacity", &style::opacity(pose.opacity));
            }
            for (el, dot) in dots.iter().zip(mesh.dots()) {
                let pose = dot.sample(elapsed_ms);
                dom::set_style(el, "transform", &MeshDot::transform_css(&pose));
                dom::set_style(el, "opacity", &style::opacity(pose.opacity));
            }
        })
        .ok_or_else(|| anyhow::anyhow!("no animation frame support"))?;

        log::info!(
            "[ambient] mounted glow, {} particles, {} mesh dots",
            PARTICLE_COUNT,
            MESH_DOT_COUNT
        );
        log::debug!(
            "[ambient] glow settles within {} frames",
            frames_to_settle(animator.borrow().config().smoothing_factor(), 0.01)
        );
        Ok(Some(Self {
            _pointer: pointer,
            _frames: frames,
            animator,
            _created: created,
        }))
    }
}

impl Drop for AmbientBackground {
    fn drop(&mut self) {
        let mut animator = self.animator.borrow_mut();
        if animator.is_detached() {
            return;
        }
        animator.detach();
        log::debug!(
            "[ambient] unmounted after {} frames, glow at {:?}",
            animator.frames(),
            animator.pointer().smoothed
        );
    }
}

/// Violet-to-magenta hue ramp, fading with index.
fn particle_color(index: usize) -> String {
    format!(
        "hsl({} 91% 65% / {:.2})",
        270 + index * 10,
        (0.3 - index as f64 * 0.03).max(0.0)
    )
}
