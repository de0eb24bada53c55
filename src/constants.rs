/// DOM anchors and class names the page markup provides.
///
/// Ids are looked up with `getElementById`; selectors go through
/// `querySelectorAll`. Missing optional anchors disable their feature only.
// Canvas and header
pub const CANVAS_ID: &str = "particle-canvas";
pub const HEADER_ID: &str = "header";
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";

// Typing effect
pub const TYPING_TEXT_ID: &str = "typing-text";

// Scroll reveal and nav
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";
pub const REVEALED_CLASSES: [&str; 2] = ["visible", "active"];
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = "nav a";
pub const NAV_ACTIVE_CLASS: &str = "active";

// Projects and modal
pub const PROJECTS_GRID_ID: &str = "projects-grid";
pub const PROJECT_ID_ATTR: &str = "data-project-id";
pub const MODAL_ID: &str = "project-modal";
pub const MODAL_CONTENT_ID: &str = "modal-content";
pub const MODAL_CLOSE_SELECTOR: &str = "#close-modal";
pub const HIDDEN_CLASS: &str = "hidden";
pub const MODAL_COLLAPSED_CLASSES: [&str; 2] = ["scale-95", "opacity-0"];

// Mobile menu (optional)
pub const MENU_BUTTON_ID: &str = "menu-btn";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_MENU_LINK_SELECTOR: &str = "a";

// Contact form (optional)
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";

pub const ESCAPE_KEY: &str = "Escape";
