//! Mount Surfaces
//!
//! A mount surface is the collection of render targets for one page. The
//! orchestration core never touches a display directly: it hands
//! [`SectionUpdate`]s and nav state to a surface, which resolves the actual
//! target for each [`Section`] lazily by id. That keeps the core free of
//! display dependencies and lets tests mount an in-memory surface instead
//! of a real one.
//!
//! # Replace semantics
//!
//! Every call fully replaces the target's content. A section is a single
//! mutable render target owned by its most recent update; there is no
//! incremental patching.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::view::{NavItem, Section, SectionUpdate};

/// A render-target collection resolved lazily by section id.
pub trait MountSurface: Send + Sync {
    /// Replace one section's entire content.
    fn replace_section(&self, update: SectionUpdate);

    /// Replace the bottom-navigation state.
    fn replace_nav(&self, items: Vec<NavItem>);
}

/// In-memory surface recording the latest state of every render target.
///
/// Used as the test double for display surfaces and for headless runs.
#[derive(Default)]
pub struct InMemorySurface {
    sections: Mutex<HashMap<Section, SectionUpdate>>,
    nav: Mutex<Vec<NavItem>>,
}

impl InMemorySurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently applied update for a section, if any.
    #[must_use]
    pub fn section(&self, section: Section) -> Option<SectionUpdate> {
        self.sections.lock().get(&section).cloned()
    }

    /// The most recently applied nav state.
    #[must_use]
    pub fn nav(&self) -> Vec<NavItem> {
        self.nav.lock().clone()
    }
}

impl MountSurface for InMemorySurface {
    fn replace_section(&self, update: SectionUpdate) {
        self.sections.lock().insert(update.section, update);
    }

    fn replace_nav(&self, items: Vec<NavItem>) {
        *self.nav.lock() = items;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::view::SectionBody;

    fn update(section: Section, label: &str) -> SectionUpdate {
        SectionUpdate {
            section,
            title: None,
            body: SectionBody::Placeholder(label.to_string()),
        }
    }

    #[test]
    fn test_replace_overwrites_prior_content() {
        let surface = InMemorySurface::new();

        surface.replace_section(update(Section::Categories, "first"));
        surface.replace_section(update(Section::Categories, "second"));

        assert_eq!(
            surface.section(Section::Categories).unwrap().body,
            SectionBody::Placeholder("second".to_string())
        );
    }

    #[test]
    fn test_sections_are_independent_targets() {
        let surface = InMemorySurface::new();

        surface.replace_section(update(Section::Categories, "categories"));
        surface.replace_section(update(Section::Destinations, "destinations"));

        assert_eq!(
            surface.section(Section::Categories).unwrap().body,
            SectionBody::Placeholder("categories".to_string())
        );
        assert_eq!(
            surface.section(Section::Destinations).unwrap().body,
            SectionBody::Placeholder("destinations".to_string())
        );
        assert_eq!(surface.section(Section::Recommended), None);
    }
}
