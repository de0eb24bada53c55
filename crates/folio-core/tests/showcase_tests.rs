// Host-side tests for the project catalog and modal state.

use folio_core::content::PROJECTS;
use folio_core::{
    card_html, modal_html, placeholder_color, placeholder_image_url, Catalog, ModalState,
    Project, Showcase,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn showcase() -> Showcase {
    Showcase::new(Catalog::new(PROJECTS.to_vec()))
}

#[test]
fn catalog_keeps_declaration_order() {
    let catalog = Catalog::new(PROJECTS.to_vec());
    let ids: Vec<&str> = catalog.first(6).map(|p| p.id).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    let ids: Vec<&str> = catalog.first(2).map(|p| p.id).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(catalog.first(0).count(), 0);
}

#[test]
fn catalog_lookup_by_id() {
    let catalog = Catalog::new(PROJECTS.to_vec());
    assert_eq!(catalog.get("3").map(|p| p.title), Some("Landing-Page"));
    assert!(catalog.get("999").is_none());
    assert!(catalog.get("").is_none());
}

#[test]
fn duplicate_ids_resolve_to_first_entry() {
    let mut projects = PROJECTS.to_vec();
    projects.push(Project {
        title: "Shadow",
        ..PROJECTS[0].clone()
    });
    let catalog = Catalog::new(projects);
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.get("1").map(|p| p.title), Some("Hotels"));
}

#[test]
fn unknown_id_leaves_closed_modal_closed() {
    let mut s = showcase();
    assert!(s.open("999").is_none());
    assert_eq!(*s.modal(), ModalState::Closed);
    assert!(!s.is_open());
}

#[test]
fn unknown_id_leaves_open_modal_on_prior_project() {
    let mut s = showcase();
    assert_eq!(s.open("2").map(|p| p.title), Some("Net-clone"));
    assert!(s.open("999").is_none());
    assert_eq!(*s.modal(), ModalState::Open("2"));
}

#[test]
fn opening_while_open_replaces_project() {
    let mut s = showcase();
    s.open("1");
    s.open("5");
    assert_eq!(*s.modal(), ModalState::Open("5"));
}

#[test]
fn close_reports_previous_state() {
    let mut s = showcase();
    assert!(!s.close());
    s.open("4");
    assert!(s.close());
    assert_eq!(*s.modal(), ModalState::Closed);
    assert!(!s.close());
}

#[test]
fn placeholder_colors_are_six_hex_digits_and_vary() {
    let mut rng = StdRng::seed_from_u64(8);
    let colors: Vec<String> = (0..20).map(|_| placeholder_color(&mut rng)).collect();
    for c in &colors {
        assert_eq!(c.len(), 6, "{c}");
        assert!(c.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
    }
    assert!(colors.iter().any(|c| c != &colors[0]));
}

#[test]
fn placeholder_colors_repeat_for_same_seed() {
    let mut a = StdRng::seed_from_u64(1);
    let mut b = StdRng::seed_from_u64(1);
    assert_eq!(placeholder_color(&mut a), placeholder_color(&mut b));
}

#[test]
fn placeholder_url_encodes_spaces() {
    assert_eq!(
        placeholder_image_url("EDigital Design", "0a0b0c"),
        "https://placehold.co/600x400/0a0b0c/ffffff?text=EDigital+Design"
    );
    assert_eq!(
        placeholder_image_url("Hotels", "ffffff"),
        "https://placehold.co/600x400/ffffff/ffffff?text=Hotels"
    );
}

#[test]
fn card_markup_shows_title_and_image() {
    let html = card_html(&PROJECTS[4], "123abc");
    assert!(html.contains("https://placehold.co/600x400/123abc/ffffff?text=EDigital+Design"));
    assert!(html.contains("alt=\"EDigital Design\""));
    assert!(html.contains(">EDigital Design</h3>"));
}

#[test]
fn modal_markup_lists_everything_about_the_project() {
    let project = &PROJECTS[0];
    let html = modal_html(project);
    assert!(html.contains("id=\"close-modal\""));
    assert!(html.contains(project.title));
    assert!(html.contains(project.description));
    for tag in project.tech {
        assert!(html.contains(&format!(">{tag}</span>")), "missing tag {tag}");
    }
    assert!(html.contains(&format!("href=\"{}\"", project.live_url)));
    assert!(html.contains(&format!("href=\"{}\"", project.code_url)));
    assert!(html.contains("View Live"));
    assert!(html.contains("View Code"));
}
