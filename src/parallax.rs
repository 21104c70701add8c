use crate::constants::*;
use crate::core::{ParallaxSpec, ScrollOffset, ScrollTrack, TrackGeometry, DEFAULT_PARALLAX_SPEED};
use crate::dom;
use crate::events::scroll::ScrollWatch;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// An element translated in proportion to its scroll progress through the
/// viewport.
pub struct ParallaxLayer {
    _watch: ScrollWatch,
    track: Rc<RefCell<ScrollTrack>>,
}

impl ParallaxLayer {
    pub fn mount(el: &web::HtmlElement) -> anyhow::Result<Self> {
        let speed = dom::attr_number(el, ATTR_PARALLAX).unwrap_or(DEFAULT_PARALLAX_SPEED);
        let direction = dom::attr_parsed(el, ATTR_PARALLAX_DIRECTION).unwrap_or_default();
        let spec = ParallaxSpec::new(speed, direction);
        let start = offset_attr(el, ATTR_PARALLAX_OFFSET_START).unwrap_or(ScrollOffset::ENTER);
        let end = offset_attr(el, ATTR_PARALLAX_OFFSET_END).unwrap_or(ScrollOffset::EXIT);

        let track = Rc::new(RefCell::new(ScrollTrack::new(start, end)));
        let track_cb = track.clone();
        let target = el.clone();
        let watch = ScrollWatch::new(move || {
            let geom = TrackGeometry {
                element_top: dom::layout_top(&target) - dom::scroll_y(),
                element_size: target.offset_height() as f64,
                viewport_size: dom::viewport_height(),
            };
            let mut track = track_cb.borrow_mut();
            if track.is_detached() {
                return;
            }
            track.update(geom);
            let offset = track.lerp(spec.output_range());
            dom::set_style(&target, "transform", &spec.translate_css(offset));
        })
        .ok_or_else(|| anyhow::anyhow!("no window"))?;

        Ok(Self {
            _watch: watch,
            track,
        })
    }
}

impl Drop for ParallaxLayer {
    fn drop(&mut self) {
        let mut track = self.track.borrow_mut();
        track.detach();
        log::debug!("[parallax] detached at progress {:.2}", track.progress());
    }
}

fn offset_attr(el: &web::Element, name: &str) -> Option<ScrollOffset> {
    let raw = el.get_attribute(name)?;
    raw.parse()
        .map_err(|e| log::warn!("[parallax] {name}: {e}"))
        .ok()
}
