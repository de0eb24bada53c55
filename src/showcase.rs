use crate::constants::*;
use crate::dom;
use crate::timer;
use folio_core::constants::{MODAL_ENTER_DELAY, MODAL_EXIT_DELAY};
use folio_core::{card_html, modal_html, placeholder_color, Catalog, Showcase, CARD_CLASS};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Modal elements plus the state that decides what they show.
#[derive(Clone)]
pub struct ModalController {
    pub showcase: Rc<RefCell<Showcase>>,
    pub modal: web::Element,
    pub content: web::Element,
}

impl ModalController {
    pub fn open(&self, project_id: &str) {
        let html = match self.showcase.borrow_mut().open(project_id) {
            Some(project) => modal_html(project),
            None => return,
        };
        self.content.set_inner_html(&html);
        _ = self.modal.class_list().remove_1(HIDDEN_CLASS);
        log::info!("[showcase] open {}", project_id);

        let this = self.clone();
        timer::set_timeout(MODAL_ENTER_DELAY, move || {
            if this.showcase.borrow().is_open() {
                dom::set_classes(&this.content, &MODAL_COLLAPSED_CLASSES, false);
            }
        });
    }

    pub fn close(&self) {
        if !self.showcase.borrow_mut().close() {
            return;
        }
        dom::set_classes(&self.content, &MODAL_COLLAPSED_CLASSES, true);
        let this = self.clone();
        timer::set_timeout(MODAL_EXIT_DELAY, move || {
            // Reopened while shrinking: keep it visible.
            if !this.showcase.borrow().is_open() {
                _ = this.modal.class_list().add_1(HIDDEN_CLASS);
            }
        });
    }

    pub fn is_open(&self) -> bool {
        self.showcase.borrow().is_open()
    }
}

/// Append one card per project (up to `limit`) to `grid`. Placeholder colors
/// are drawn fresh on every call.
pub fn render_catalog<R: Rng>(
    document: &web::Document,
    grid: &web::Element,
    catalog: &Catalog,
    limit: usize,
    rng: &mut R,
) -> anyhow::Result<Vec<web::Element>> {
    let mut cards = Vec::new();
    for project in catalog.first(limit) {
        let card = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        card.set_class_name(CARD_CLASS);
        _ = card.set_attribute(PROJECT_ID_ATTR, project.id);
        card.set_inner_html(&card_html(project, &placeholder_color(rng)));
        _ = grid.append_child(&card);
        cards.push(card);
    }
    Ok(cards)
}

pub fn wire_showcase(
    document: &web::Document,
    catalog: Catalog,
    limit: usize,
) -> anyhow::Result<ModalController> {
    let grid: web::Element = dom::element_by_id(document, PROJECTS_GRID_ID)?;
    let modal: web::Element = dom::element_by_id(document, MODAL_ID)?;
    let content: web::Element = dom::element_by_id(document, MODAL_CONTENT_ID)?;

    let cards = render_catalog(document, &grid, &catalog, limit, &mut rand::thread_rng())?;
    log::info!("[showcase] rendered {} of {} projects", cards.len(), catalog.len());

    let controller = ModalController {
        showcase: Rc::new(RefCell::new(Showcase::new(catalog))),
        modal,
        content,
    };
    crate::events::wire_card_clicks(&cards, &controller);
    crate::events::wire_modal_dismiss(&controller);
    crate::events::wire_escape_closes_modal(document, &controller);
    Ok(controller)
}
