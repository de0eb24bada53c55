use crate::constants::{CONTACT_FORM_ID, FORM_STATUS_ID};
use crate::timer;
use folio_core::{ContactForm, FormStatus};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn show_status(status_el: &web::Element, form: &web::HtmlFormElement, status: FormStatus) {
    status_el.set_text_content(Some(status.message()));
    if let Some(class) = status.class_name() {
        status_el.set_class_name(class);
    }
    if status.resets_fields() {
        form.reset();
    }
}

/// Fake submission: the form never talks to a server.
pub fn wire_contact_form(document: &web::Document) -> anyhow::Result<()> {
    let Some(form_el) = document.get_element_by_id(CONTACT_FORM_ID) else {
        log::info!("[contact] no contact form on this page");
        return Ok(());
    };
    let form = form_el
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a form: {:?}", CONTACT_FORM_ID, e))?;
    let status_el = document
        .get_element_by_id(FORM_STATUS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", FORM_STATUS_ID))?;

    let state = Rc::new(RefCell::new(ContactForm::default()));
    let form_submit = form.clone();
    crate::dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let ticket = state.borrow_mut().submit();
        log::info!("[contact] submission {}", ticket);
        let state = state.clone();
        let form = form_submit.clone();
        let status_el = status_el.clone();
        spawn_local(async move {
            let steps = state.borrow().steps();
            for step in steps {
                timer::sleep(step.after).await;
                if !state.borrow().is_current(ticket) {
                    return;
                }
                show_status(&status_el, &form, step.status);
            }
        });
    });
    Ok(())
}
