use crate::constants::*;
use crate::core::{NavState, SectionBounds};
use crate::dom;
use crate::events::scroll::ScrollWatch;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keeps the sticky navigation in sync with the scroll position: a scrolled
/// flag on the nav root and an active marker on the current section's link.
pub struct NavTracker {
    _watch: ScrollWatch,
    state: Rc<RefCell<NavState>>,
}

impl NavTracker {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let nav = dom::query_document(document, NAV_SELECTOR)
            .into_iter()
            .next()?;

        let mut ids: Vec<String> = Vec::new();
        let mut sections: Vec<web::Element> = Vec::new();
        let mut links: FnvHashMap<String, web::HtmlElement> = FnvHashMap::default();
        for link in dom::query_all(&nav, NAV_LINK_SELECTOR) {
            let Some(id) = link
                .get_attribute("href")
                .and_then(|href| href.strip_prefix('#').map(str::to_owned))
            else {
                continue;
            };
            let Some(section) = document.get_element_by_id(&id) else {
                log::warn!("[nav] link to missing section #{id}");
                continue;
            };
            if links.insert(id.clone(), link).is_none() {
                ids.push(id);
                sections.push(section);
            }
        }
        if sections.is_empty() {
            return None;
        }

        let state = Rc::new(RefCell::new(NavState::default()));
        mark_active(&links, &ids[0]);
        let count = ids.len();

        let state_cb = state.clone();
        let watch = ScrollWatch::new(move || {
            let bounds: SmallVec<[SectionBounds; 8]> = sections
                .iter()
                .map(|s| {
                    let rect = s.get_bounding_client_rect();
                    SectionBounds {
                        top: rect.top(),
                        bottom: rect.bottom(),
                    }
                })
                .collect();
            let change = state_cb.borrow_mut().update(dom::scroll_y(), &bounds);
            if change.is_empty() {
                return;
            }
            if let Some(scrolled) = change.scrolled {
                _ = nav.class_list().toggle_with_force(SCROLLED_CLASS, scrolled);
            }
            if let Some(idx) = change.active {
                mark_active(&links, &ids[idx]);
            }
        })?;
        log::info!("[nav] tracking {count} sections");

        Some(Self {
            _watch: watch,
            state,
        })
    }
}

impl Drop for NavTracker {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.detach();
        log::debug!(
            "[nav] detached at section {:?}, scrolled={}",
            state.active(),
            state.is_scrolled()
        );
    }
}

fn mark_active(links: &FnvHashMap<String, web::HtmlElement>, active_id: &str) {
    for (id, link) in links {
        _ = link
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, id == active_id);
    }
}
