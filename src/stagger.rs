use crate::constants::*;
use crate::core::style;
use crate::core::{
    meter_level, Entrance, EntrancePreset, ObserveOptions, StaggerPlan, StaggerSequencer,
    StaggerTiming, StyleDecls, DEFAULT_INITIAL_DELAY_MS, DEFAULT_STAGGER_DELAY_MS,
    METER_FILL_DURATION_MS, STAGGER_ROOT_MARGIN_PX,
};
use crate::dom;
use crate::observer::VisibilityObserver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A container whose direct children enter one after another once the
/// container scrolls into view.
pub struct StaggerGroup {
    _observer: VisibilityObserver,
    sequencer: Rc<RefCell<StaggerSequencer>>,
}

impl StaggerGroup {
    pub fn mount(container: &web::HtmlElement) -> anyhow::Result<Self> {
        let attr = container.get_attribute(ATTR_STAGGER);
        let preset = match attr.as_deref().map(str::trim) {
            None | Some("") => EntrancePreset::Rise,
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("[stagger] {ATTR_STAGGER}: {e}");
                EntrancePreset::Rise
            }),
        };
        let timing = StaggerTiming::new(
            dom::attr_number(container, ATTR_STAGGER_DELAY).unwrap_or(DEFAULT_STAGGER_DELAY_MS),
            dom::attr_number(container, ATTR_STAGGER_INITIAL).unwrap_or(DEFAULT_INITIAL_DELAY_MS),
        );

        let children = direct_children(container);
        let plan = StaggerPlan::new(children.len(), timing);
        if plan.is_empty() {
            anyhow::bail!("stagger container has no children");
        }
        let hidden = Entrance::new(preset).hidden_css();
        for child in &children {
            dom::apply_styles(child, &hidden);
        }
        let meters = collect_meters(container, Some(container));

        let sequencer = Rc::new(RefCell::new(StaggerSequencer::new(plan)));
        let sequencer_cb = sequencer.clone();
        let options = ObserveOptions::new(0.0, true).with_root_margin(STAGGER_ROOT_MARGIN_PX);
        let observer = VisibilityObserver::observe(container, options, move |visible| {
            if !visible {
                return;
            }
            let steps = {
                let mut seq = sequencer_cb.borrow_mut();
                let steps = seq.on_parent_visible(dom::now_ms()).to_vec();
                if let Some(last) = steps.last() {
                    log::debug!(
                        "[stagger] {} entrances, last starts at {:?}",
                        steps.len(),
                        seq.start_time_of(last.index)
                    );
                }
                steps
            };
            for step in steps {
                if let Some(child) = children.get(step.index) {
                    let shown = Entrance::new(preset).with_delay(step.delay_ms).shown_css();
                    dom::apply_styles(child, &shown);
                    _ = child.class_list().add_1(REVEALED_CLASS);
                }
            }
            fill_meters(&meters);
        })?;

        Ok(Self {
            _observer: observer,
            sequencer,
        })
    }
}

impl Drop for StaggerGroup {
    fn drop(&mut self) {
        let mut seq = self.sequencer.borrow_mut();
        if seq.is_started() {
            log::debug!(
                "[stagger] detached with {}/{} entrances started",
                seq.started_at(dom::now_ms()).count(),
                seq.plan().len()
            );
        }
        seq.detach();
    }
}

fn direct_children(container: &web::HtmlElement) -> Vec<web::HtmlElement> {
    let list = container.children();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Skill meters below `root` together with their target level. Meters that
/// belong to a different stagger group than `owner` are left to that group.
pub fn collect_meters(
    root: &web::HtmlElement,
    owner: Option<&web::HtmlElement>,
) -> Vec<(web::HtmlElement, f64)> {
    dom::query_all(root, METER_SELECTOR)
        .into_iter()
        .filter(|el| {
            let group = el.closest(STAGGER_SELECTOR).ok().flatten();
            match (group, owner) {
                (None, _) => owner.is_none(),
                (Some(g), Some(o)) => g.is_same_node(Some(o.as_ref())),
                (Some(_), None) => false,
            }
        })
        .map(|el| {
            let level = meter_level(dom::attr_number(&el, ATTR_METER).unwrap_or(0.0));
            dom::set_style(&el, "width", "0%");
            (el, level)
        })
        .collect()
}

/// Grow each meter to its level, staggered in document order.
pub fn fill_meters(meters: &[(web::HtmlElement, f64)]) {
    let plan = StaggerPlan::new(meters.len(), StaggerTiming::meter());
    let transition = format!("width {} ease-out", style::millis(METER_FILL_DURATION_MS));
    for (step, (el, level)) in plan.steps().iter().zip(meters) {
        let decls: StyleDecls = vec![
            ("transition", transition.clone()),
            ("transition-delay", style::millis(step.delay_ms)),
            ("width", style::percent(*level)),
        ];
        dom::apply_styles(el, &decls);
    }
}
