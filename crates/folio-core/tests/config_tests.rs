// Host-side tests for configuration, constants and small UI state.

use folio_core::constants::*;
use folio_core::{ConfigError, MobileMenu, SiteConfig};

#[test]
fn default_config_is_valid() {
    let config = SiteConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(
        config.phrases,
        vec!["Frontend Developer", "UI/UX Designer", "Web Developer"]
    );
    assert_eq!(config.projects.len(), 5);
    assert_eq!(config.catalog_limit, 6);
}

#[test]
fn validate_rejects_broken_config() {
    let mut config = SiteConfig::default();
    config.phrases.clear();
    assert_eq!(config.validate(), Err(ConfigError::EmptyPhraseList));

    let mut config = SiteConfig::default();
    config.catalog_limit = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroCatalogLimit));

    let mut config = SiteConfig::default();
    let dup = config.projects[2].clone();
    config.projects.push(dup);
    assert_eq!(config.validate(), Err(ConfigError::DuplicateProjectId("3")));
}

#[test]
fn config_errors_render_readably() {
    assert_eq!(ConfigError::EmptyPhraseList.to_string(), "phrase list is empty");
    assert_eq!(
        ConfigError::DuplicateProjectId("7").to_string(),
        "duplicate project id \"7\""
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_have_logical_relationships() {
    // deleting is faster than typing, and the hold is longer than both
    assert!(DELETE_INTERVAL < TYPE_INTERVAL);
    assert!(HOLD_BEFORE_DELETE > TYPE_INTERVAL);
    assert!(MODAL_ENTER_DELAY < MODAL_EXIT_DELAY);
    assert!(CONTACT_SEND_DELAY < CONTACT_CLEAR_DELAY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_AREA_PER_PARTICLE > 0.0);
    assert!(PARTICLE_SIZE_MIN > 0.0 && PARTICLE_SIZE_MIN < PARTICLE_SIZE_MAX);
    assert!(PARTICLE_SPEED_MAX > 0.0);
    assert!(REVEAL_VIEWPORT_FRACTION > 0.0 && REVEAL_VIEWPORT_FRACTION <= 1.0);
    assert!(REVEAL_INTERSECTION_RATIO > 0.0 && REVEAL_INTERSECTION_RATIO <= 1.0);
    assert!(NAV_PROBE_OFFSET_PX > HEADER_SCROLLED_AFTER_PX);
}

#[test]
fn mobile_menu_toggles_and_links_force_close() {
    let mut menu = MobileMenu::new(false);
    assert!(menu.toggle());
    assert!(!menu.toggle());
    menu.close();
    assert!(!menu.is_open());
    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
    assert_eq!(MobileMenu::default(), MobileMenu::new(false));
}
