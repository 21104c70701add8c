use crate::constants::*;
use crate::core::{Entrance, ObserveOptions, DEFAULT_REVEAL_THRESHOLD};
use crate::dom;
use crate::observer::VisibilityObserver;
use crate::stagger::{collect_meters, fill_meters};
use web_sys as web;

/// A page section whose `[data-reveal]` descendants play their entrance when
/// the section first crosses its visibility threshold.
pub struct RevealSection {
    _observer: VisibilityObserver,
}

impl RevealSection {
    pub fn mount(section: &web::HtmlElement) -> anyhow::Result<Self> {
        let threshold =
            dom::attr_number(section, ATTR_REVEAL_THRESHOLD).unwrap_or(DEFAULT_REVEAL_THRESHOLD);
        let once = dom::attr_flag(section, ATTR_REVEAL_ONCE).unwrap_or(true);

        let mut items: Vec<_> = dom::query_all(section, REVEAL_ITEM_SELECTOR)
            .into_iter()
            .map(|el| {
                let entrance = entrance_for(&el);
                (el, entrance)
            })
            .collect();
        if section.has_attribute(ATTR_REVEAL) {
            items.insert(0, (section.clone(), entrance_for(section)));
        }
        for (el, entrance) in &items {
            dom::apply_styles(el, &entrance.hidden_css());
        }
        let meters = collect_meters(section, None);

        let section_el = section.clone();
        let options = ObserveOptions::new(threshold, once);
        let observer = VisibilityObserver::observe(section, options, move |visible| {
            _ = section_el
                .class_list()
                .toggle_with_force(REVEALED_CLASS, visible);
            for (el, entrance) in &items {
                let decls = if visible {
                    entrance.shown_css()
                } else {
                    entrance.hidden_css()
                };
                dom::apply_styles(el, &decls);
            }
            if visible {
                fill_meters(&meters);
            } else {
                for (el, _) in &meters {
                    dom::set_style(el, "transition", "none");
                    dom::set_style(el, "width", "0%");
                }
            }
        })?;
        log::debug!(
            "[reveal] section #{} threshold={threshold:.2} once={once}",
            section.id()
        );

        Ok(Self {
            _observer: observer,
        })
    }
}

fn entrance_for(el: &web::HtmlElement) -> Entrance {
    let preset = dom::attr_parsed(el, ATTR_REVEAL).unwrap_or_default();
    let mut entrance = Entrance::new(preset);
    if let Some(ms) = dom::attr_number(el, ATTR_REVEAL_DURATION) {
        entrance = entrance.with_duration(ms);
    }
    if let Some(ms) = dom::attr_number(el, ATTR_REVEAL_DELAY) {
        entrance = entrance.with_delay(ms);
    }
    entrance
}
