//! Scroll-driven page state: header style, one-way reveals, nav highlighting.

use crate::constants::{
    HEADER_SCROLLED_AFTER_PX, NAV_PROBE_OFFSET_PX, REVEAL_INTERSECTION_RATIO,
    REVEAL_VIEWPORT_FRACTION,
};

#[inline]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER_PX
}

/// What the page reported about a reveal target on this pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealSignal {
    /// Distance of the element's top edge from the viewport top.
    Position { top: f64, viewport_height: f64 },
    /// An intersection observer entry.
    Intersection { intersecting: bool, ratio: f64 },
}

impl RevealSignal {
    pub fn triggers(self) -> bool {
        match self {
            RevealSignal::Position {
                top,
                viewport_height,
            } => top < viewport_height * REVEAL_VIEWPORT_FRACTION,
            RevealSignal::Intersection {
                intersecting,
                ratio,
            } => intersecting && ratio >= REVEAL_INTERSECTION_RATIO,
        }
    }
}

/// Tracks which reveal targets have been shown. Once revealed, an element
/// stays revealed.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Returns true only on the pass that reveals `index`.
    pub fn observe(&mut self, index: usize, signal: RevealSignal) -> bool {
        match self.revealed.get_mut(index) {
            Some(done) if !*done && signal.triggers() => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}

/// Vertical extent of a `section[id]` in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section under the header-offset probe. When sections overlap the
/// last one in document order wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + NAV_PROBE_OFFSET_PX;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at the section `id`.
#[inline]
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Active flag for each link, in order. No active section clears them all.
pub fn nav_link_states<'a>(
    hrefs: impl IntoIterator<Item = &'a str>,
    active: Option<&str>,
) -> Vec<bool> {
    hrefs
        .into_iter()
        .map(|href| active.is_some_and(|id| link_targets(href, id)))
        .collect()
}
