//! Project catalog, card/modal markup, and the single-modal state.

use crate::constants::PLACEHOLDER_COLOR_SPAN;
use fnv::FnvHashMap;
use rand::Rng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub live_url: &'static str,
    pub code_url: &'static str,
}

/// Projects in display order, indexed by id. A repeated id keeps its first entry.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    by_id: FnvHashMap<&'static str, usize>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        let mut by_id = FnvHashMap::default();
        for (i, p) in projects.iter().enumerate() {
            by_id.entry(p.id).or_insert(i);
        }
        Self { projects, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.by_id.get(id).map(|&i| &self.projects[i])
    }

    /// First `limit` projects in catalog order.
    pub fn first(&self, limit: usize) -> impl Iterator<Item = &Project> {
        self.projects.iter().take(limit)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(&'static str),
}

pub struct Showcase {
    catalog: Catalog,
    modal: ModalState,
}

impl Showcase {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            modal: ModalState::Closed,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn is_open(&self) -> bool {
        matches!(self.modal, ModalState::Open(_))
    }

    /// Show `id` in the modal, replacing whatever was open. Unknown ids leave
    /// the state untouched and return `None`.
    pub fn open(&mut self, id: &str) -> Option<&Project> {
        let Some(project) = self.catalog.get(id) else {
            log::debug!("[showcase] ignoring unknown project id {:?}", id);
            return None;
        };
        self.modal = ModalState::Open(project.id);
        Some(project)
    }

    /// Returns whether the modal was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.modal = ModalState::Closed;
        was_open
    }
}

/// Random opaque color as six lowercase hex digits.
pub fn placeholder_color<R: Rng>(rng: &mut R) -> String {
    format!("{:06x}", rng.gen_range(0..PLACEHOLDER_COLOR_SPAN))
}

pub fn placeholder_image_url(title: &str, color_hex: &str) -> String {
    format!(
        "https://placehold.co/600x400/{}/ffffff?text={}",
        color_hex,
        title.replace(' ', "+")
    )
}

pub const CARD_CLASS: &str = "project-card card-hover reveal cursor-pointer group h-full flex flex-col";

/// Inner markup of a project card.
pub fn card_html(project: &Project, color_hex: &str) -> String {
    format!(
        "<div class=\"relative rounded-lg overflow-hidden shadow-lg flex-1 bg-blue\">\
<img src=\"{src}\" alt=\"{title}\" class=\"w-full h-full object-cover transition-transform duration-500\">\
<div class=\"card-overlay absolute inset-0 bg-black bg-opacity-70 flex items-center justify-center opacity-0 transition-opacity duration-500\">\
<h3 class=\"text- text-2xl font-bold\">{title}</h3>\
</div>\
</div>",
        src = placeholder_image_url(project.title, color_hex),
        title = project.title,
    )
}

/// Modal body for a project, including the `#close-modal` button.
pub fn modal_html(project: &Project) -> String {
    let tags: String = project
        .tech
        .iter()
        .map(|t| {
            format!(
                "<span class=\"bg-white/20 dark:bg-gray-700 text-white dark:text-gray-200 \
text-sm font-medium px-4 py-2 rounded-full backdrop-blur-sm\">{}</span>",
                t
            )
        })
        .collect();
    format!(
        "<div class=\"p-6 sm:p-8 relative bg-gradient-to-r from-indigo-500 via-purple-500 to-pink-500 \
text-white dark:from-gray-800 dark:via-gray-900 dark:to-black rounded-2xl shadow-xl \
transition-colors duration-300 w-full max-w-2xl mx-auto overflow-y-auto max-h-[90vh]\">\
<button id=\"close-modal\" class=\"absolute top-4 right-4 text-gray-200 hover:text-white dark:hover:text-gray-300 transition\">\
<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"h-8 w-8\" fill=\"none\" viewBox=\"0 0 24 24\" stroke=\"currentColor\">\
<path stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-width=\"2\" d=\"M6 18L18 6M6 6l12 12\" />\
</svg>\
</button>\
<h2 class=\"text-2xl sm:text-4xl font-bold mb-4\">{title}</h2>\
<p class=\"text-white/90 dark:text-gray-300 mb-6 text-base sm:text-lg\">{description}</p>\
<div class=\"flex flex-wrap gap-3 mb-8\">{tags}</div>\
<div class=\"flex flex-col sm:flex-row sm:space-x-4 gap-4 sm:gap-0\">\
<a href=\"{live}\" target=\"_blank\" class=\"bg-white text-indigo-700 hover:bg-gray-100 font-bold py-3 px-6 rounded-full text-lg text-center transition-transform transform hover:scale-105\">View Live</a>\
<a href=\"{code}\" target=\"_blank\" class=\"bg-gray-900 text-white hover:bg-gray-800 font-bold py-3 px-6 rounded-full text-lg text-center transition-transform transform hover:scale-105\">View Code</a>\
</div>\
</div>",
        title = project.title,
        description = project.description,
        tags = tags,
        live = project.live_url,
        code = project.code_url,
    )
}
