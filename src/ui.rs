use crate::constants::{HIDDEN_CLASS, MENU_BUTTON_ID, MOBILE_MENU_ID, MOBILE_MENU_LINK_SELECTOR};
use crate::dom;
use folio_core::MobileMenu;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn apply(panel: &web::Element, menu: &MobileMenu) {
    _ = panel
        .class_list()
        .toggle_with_force(HIDDEN_CLASS, !menu.is_open());
}

/// Mobile menu toggle. Both anchors are optional; without them this does nothing.
pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(button), Some(panel)) = (
        document.get_element_by_id(MENU_BUTTON_ID),
        document.get_element_by_id(MOBILE_MENU_ID),
    ) else {
        log::info!("[menu] no mobile menu on this page");
        return;
    };
    let menu = Rc::new(RefCell::new(MobileMenu::new(
        !panel.class_list().contains(HIDDEN_CLASS),
    )));

    {
        let menu = menu.clone();
        let panel_toggle = panel.clone();
        dom::add_click_listener(&button, move || {
            let mut m = menu.borrow_mut();
            m.toggle();
            apply(&panel_toggle, &m);
        });
    }

    for link in dom::query_all(&panel, MOBILE_MENU_LINK_SELECTOR) {
        let menu = menu.clone();
        let panel_link = panel.clone();
        dom::add_click_listener(&link, move || {
            let mut m = menu.borrow_mut();
            m.close();
            apply(&panel_link, &m);
        });
    }
}
