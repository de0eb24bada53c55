#![cfg(target_arch = "wasm32")]
use folio_core::{Catalog, SiteConfig};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod scroll;
mod showcase;
mod timer;
mod typing;
mod ui;

/// Long-lived handles for the page's repeating work. Nothing stops them
/// today; they are kept so the loops have an owner.
#[derive(Default)]
#[allow(dead_code)]
struct Running {
    particles: Option<frame::FrameLoop>,
    typing: Option<timer::RepeatingTask>,
    modal: Option<showcase::ModalController>,
}

thread_local! {
    static RUNNING: RefCell<Running> = RefCell::new(Running::default());
}

fn report<T>(feature: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[{}] disabled: {:?}", feature, e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SiteConfig::default();
    if let Err(e) = config.validate() {
        log::error!("[config] {}", e);
    }

    // Cards carry the reveal class, so they must exist before scroll effects
    // collect reveal targets.
    let particles = report("particles", frame::wire_particles(&document, rand::random()));
    let typing = report("typing", typing::wire_typing(&document, config.phrases.clone()));
    let modal = report(
        "showcase",
        showcase::wire_showcase(&document, Catalog::new(config.projects), config.catalog_limit),
    );
    report("scroll", scroll::wire_scroll_effects(&document));
    ui::wire_mobile_menu(&document);
    report("contact", contact::wire_contact_form(&document));

    RUNNING.with(|r| {
        *r.borrow_mut() = Running {
            particles,
            typing,
            modal,
        };
    });
    Ok(())
}
