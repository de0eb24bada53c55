use crate::constants::{MODAL_CLOSE_SELECTOR, PROJECT_ID_ATTR};
use crate::dom;
use crate::showcase::ModalController;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_card_clicks(cards: &[web::Element], controller: &ModalController) {
    for card in cards {
        let Some(id) = card.get_attribute(PROJECT_ID_ATTR) else {
            continue;
        };
        let controller = controller.clone();
        dom::add_click_listener(card, move || controller.open(&id));
    }
}

/// Close on a click on the backdrop itself or anywhere inside the close
/// button. Clicks inside the content do nothing.
pub fn wire_modal_dismiss(controller: &ModalController) {
    let modal = controller.modal.clone();
    let controller = controller.clone();
    dom::add_listener(&modal, "click", move |ev: web::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let on_backdrop = target == controller.modal;
        let on_close = matches!(target.closest(MODAL_CLOSE_SELECTOR), Ok(Some(_)));
        if on_backdrop || on_close {
            controller.close();
        }
    });
}
