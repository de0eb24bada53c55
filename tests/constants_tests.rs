// Host-side tests for the DOM anchor names.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_unique_and_bare() {
    let ids = [
        CANVAS_ID,
        HEADER_ID,
        TYPING_TEXT_ID,
        PROJECTS_GRID_ID,
        MODAL_ID,
        MODAL_CONTENT_ID,
        MENU_BUTTON_ID,
        MOBILE_MENU_ID,
        CONTACT_FORM_ID,
        FORM_STATUS_ID,
    ];
    for (i, id) in ids.iter().enumerate() {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{id} should be a bare id");
        assert!(!id.contains(' '), "{id} should not contain spaces");
        for other in &ids[i + 1..] {
            assert_ne!(id, other);
        }
    }
}

#[test]
fn selectors_and_attributes_are_well_formed() {
    assert!(REVEAL_SELECTOR.starts_with('.'));
    assert!(MODAL_CLOSE_SELECTOR.starts_with('#'));
    assert!(REVEAL_INDEX_ATTR.starts_with("data-"));
    assert!(PROJECT_ID_ATTR.starts_with("data-"));
    assert_eq!(SECTION_SELECTOR, "section[id]");
    assert_eq!(NAV_LINK_SELECTOR, "nav a");
}

#[test]
fn class_lists_have_no_duplicates() {
    assert_ne!(REVEALED_CLASSES[0], REVEALED_CLASSES[1]);
    assert_ne!(MODAL_COLLAPSED_CLASSES[0], MODAL_COLLAPSED_CLASSES[1]);
    assert!(!MODAL_COLLAPSED_CLASSES.contains(&HIDDEN_CLASS));
}
