use crate::constants::ESCAPE_KEY;
use crate::dom;
use crate::showcase::ModalController;
use web_sys as web;

#[inline]
pub fn closes_modal(key: &str, modal_open: bool) -> bool {
    modal_open && key == ESCAPE_KEY
}

pub fn wire_escape_closes_modal(document: &web::Document, controller: &ModalController) {
    let controller = controller.clone();
    dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        if closes_modal(&ev.key(), controller.is_open()) {
            controller.close();
        }
    });
}
