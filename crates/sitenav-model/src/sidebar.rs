//! Sidebar trees keyed by route prefix.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::nav::NavItem;

/// Titled, ordered collection of page links within one sidebar section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Group heading shown above the links.
    pub text: String,
    /// Links in on-page rendering order.
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

/// Ordered mapping from route-prefix keys (e.g. `/guide/`) to the sidebar
/// groups shown for routes under that prefix.
///
/// Insertion order is preserved because the consuming framework renders
/// sections and groups exactly as authored. Inserting an existing key
/// overwrites its groups in place (last definition wins); this mirrors the
/// object-literal merge behavior the authored data historically relied on
/// and is intentional rather than an accident of the backing store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebar {
    sections: Vec<(String, Vec<SidebarGroup>)>,
}

impl Sidebar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, overwriting the groups of an existing key.
    ///
    /// On overwrite the key keeps the position of its first insertion.
    pub fn insert(&mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) {
        let prefix = prefix.into();
        match self.sections.iter_mut().find(|(key, _)| *key == prefix) {
            Some((_, existing)) => *existing = groups,
            None => self.sections.push((prefix, groups)),
        }
    }

    /// Groups for a route-prefix key, in authored order.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.sections
            .iter()
            .find(|(key, _)| key == prefix)
            .map(|(_, groups)| groups.as_slice())
    }

    /// Sections in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarGroup])> {
        self.sections
            .iter()
            .map(|(key, groups)| (key.as_str(), groups.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<SidebarGroup>)> for Sidebar {
    fn from_iter<I: IntoIterator<Item = (K, Vec<SidebarGroup>)>>(iter: I) -> Self {
        let mut sidebar = Self::new();
        for (prefix, groups) in iter {
            sidebar.insert(prefix, groups);
        }
        sidebar
    }
}

impl Serialize for Sidebar {
    /// Serializes as a JSON object keyed by route prefix, preserving
    /// authored section order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (prefix, groups) in &self.sections {
            map.serialize_entry(prefix, groups)?;
        }
        map.end()
    }
}
