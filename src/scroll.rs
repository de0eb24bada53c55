//! Header style, reveal-on-scroll and nav highlighting.
//!
//! Reveals use an `IntersectionObserver` when the browser offers one. Only if
//! constructing it fails does the scroll listener fall back to checking each
//! element's bounding box against the viewport.

use crate::constants::*;
use crate::dom;
use folio_core::{
    active_section, header_scrolled, nav_link_states, RevealSignal, RevealTracker, SectionBounds,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct RevealTargets {
    elements: Vec<web::Element>,
    tracker: RevealTracker,
}

impl RevealTargets {
    fn reveal(&mut self, index: usize, signal: RevealSignal) -> Option<&web::Element> {
        if self.tracker.observe(index, signal) {
            let el = self.elements.get(index)?;
            dom::set_classes(el, &REVEALED_CLASSES, true);
            return Some(el);
        }
        None
    }

    fn check_positions(&mut self, viewport_height: f64) {
        for i in 0..self.elements.len() {
            if self.tracker.is_revealed(i) {
                continue;
            }
            let top = self.elements[i].get_bounding_client_rect().top();
            self.reveal(
                i,
                RevealSignal::Position {
                    top,
                    viewport_height,
                },
            );
        }
    }
}

struct ScrollView {
    window: web::Window,
    header: Option<web::Element>,
    sections: Vec<web::HtmlElement>,
    nav_links: Vec<web::Element>,
    /// Present only when reveals are driven by scroll position.
    reveal_fallback: Option<Rc<RefCell<RevealTargets>>>,
}

impl ScrollView {
    fn update(&self) {
        let scroll_y = dom::scroll_y(&self.window);
        if let Some(header) = &self.header {
            _ = header
                .class_list()
                .toggle_with_force(HEADER_SCROLLED_CLASS, header_scrolled(scroll_y));
        }
        self.highlight_nav(scroll_y);
        if let Some(targets) = &self.reveal_fallback {
            targets
                .borrow_mut()
                .check_positions(dom::viewport_height(&self.window));
        }
    }

    fn highlight_nav(&self, scroll_y: f64) {
        if self.nav_links.is_empty() {
            return;
        }
        let bounds: Vec<SectionBounds> = self
            .sections
            .iter()
            .map(|s| SectionBounds {
                id: s.id(),
                top: s.offset_top() as f64,
                height: s.offset_height() as f64,
            })
            .collect();
        let active = active_section(&bounds, scroll_y);
        let hrefs: Vec<String> = self
            .nav_links
            .iter()
            .map(|a| a.get_attribute("href").unwrap_or_default())
            .collect();
        let states = nav_link_states(hrefs.iter().map(String::as_str), active);
        for (link, on) in self.nav_links.iter().zip(states) {
            _ = link.class_list().toggle_with_force(NAV_ACTIVE_CLASS, on);
        }
    }
}

/// Observe every reveal target; each is unobserved once revealed.
fn observe_reveals(targets: Rc<RefCell<RevealTargets>>) -> Result<(), JsValue> {
    let cb_targets = targets.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let mut t = cb_targets.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(REVEAL_INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                let signal = RevealSignal::Intersection {
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if t.reveal(index, signal).is_some() {
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(folio_core::constants::REVEAL_INTERSECTION_RATIO));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    for el in &targets.borrow().elements {
        observer.observe(el);
    }
    Ok(())
}

pub fn wire_scroll_effects(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let header = document.get_element_by_id(HEADER_ID);
    if header.is_none() {
        log::warn!("[scroll] missing #{}; header style disabled", HEADER_ID);
    }

    let elements = dom::query_all_in_document(document, REVEAL_SELECTOR);
    for (i, el) in elements.iter().enumerate() {
        _ = el.set_attribute(REVEAL_INDEX_ATTR, &i.to_string());
    }
    let targets = Rc::new(RefCell::new(RevealTargets {
        tracker: RevealTracker::new(elements.len()),
        elements,
    }));
    let reveal_fallback = match observe_reveals(targets.clone()) {
        Ok(()) => None,
        Err(e) => {
            log::warn!("[scroll] IntersectionObserver unavailable ({:?}); using scroll position", e);
            Some(targets.clone())
        }
    };

    let sections = dom::query_all_in_document(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|s| s.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let nav_links = dom::query_all_in_document(document, NAV_LINK_SELECTOR);

    let view = ScrollView {
        window: window.clone(),
        header,
        sections,
        nav_links,
        reveal_fallback,
    };
    log::info!(
        "[scroll] {} reveal targets, {} sections, {} nav links",
        targets.borrow().elements.len(),
        view.sections.len(),
        view.nav_links.len()
    );
    view.update();
    dom::add_listener(&window, "scroll", move |_: web::Event| view.update());
    Ok(())
}
