#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod ambient;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod nav;
mod observer;
mod parallax;
mod reveal;
mod stagger;

use ambient::AmbientBackground;
use nav::NavTracker;
use parallax::ParallaxLayer;
use reveal::RevealSection;
use stagger::StaggerGroup;

/// Everything mounted on the current page. Dropping it tears down every
/// observer, listener and frame loop.
struct Stage {
    sections: Vec<RevealSection>,
    staggers: Vec<StaggerGroup>,
    parallax: Vec<ParallaxLayer>,
    ambient: Option<AmbientBackground>,
    nav: Option<NavTracker>,
}

thread_local! {
    static STAGE: RefCell<Option<Stage>> = const { RefCell::new(None) };
}

fn mount_each<T>(
    document: &web::Document,
    selector: &str,
    kind: &str,
    mount: impl Fn(&web::HtmlElement) -> anyhow::Result<T>,
) -> Vec<T> {
    dom::query_document(document, selector)
        .iter()
        .filter_map(|el| match mount(el) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("[{kind}] skipped #{}: {:?}", el.id(), e);
                None
            }
        })
        .collect()
}

impl Stage {
    fn build(document: &web::Document) -> Stage {
        let ambient = AmbientBackground::mount(document).unwrap_or_else(|e| {
            log::warn!("[ambient] disabled: {:?}", e);
            None
        });
        Stage {
            sections: mount_each(
                document,
                constants::REVEAL_SECTION_SELECTOR,
                "reveal",
                RevealSection::mount,
            ),
            staggers: mount_each(
                document,
                constants::STAGGER_SELECTOR,
                "stagger",
                StaggerGroup::mount,
            ),
            parallax: mount_each(
                document,
                constants::PARALLAX_SELECTOR,
                "parallax",
                ParallaxLayer::mount,
            ),
            ambient,
            nav: NavTracker::mount(document),
        }
    }
}

fn mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    unmount_motion();
    let stage = Stage::build(&document);
    log::info!(
        "[stage] sections={} staggers={} parallax={} ambient={} nav={}",
        stage.sections.len(),
        stage.staggers.len(),
        stage.parallax.len(),
        stage.ambient.is_some(),
        stage.nav.is_some()
    );
    STAGE.with(|s| *s.borrow_mut() = Some(stage));
    Ok(())
}

/// Discover annotated elements and start their animations, replacing any
/// previously mounted set.
#[wasm_bindgen]
pub fn mount_motion() -> Result<(), JsValue> {
    mount().map_err(|e| JsValue::from_str(&format!("{e:?}")))
}

/// Stop every animation and deregister every callback.
#[wasm_bindgen]
pub fn unmount_motion() {
    // Take first so teardown runs without the thread-local borrowed.
    let previous = STAGE.with(|s| s.borrow_mut().take());
    if let Some(stage) = previous {
        drop(stage);
        log::info!("[stage] unmounted");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-motion starting");

    if let Err(e) = mount() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}
