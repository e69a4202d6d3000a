//! Top navigation bar entries.

use serde::Serialize;

/// One entry in the top navigation bar: a direct link or a dropdown group.
///
/// A *link item* carries `text` and `link`; a *group item* carries `text`
/// and child `items` (and may additionally carry a `link` when the group
/// label itself is clickable). Groups nest one level: a group's children
/// may be categories that hold their own items.
///
/// `active_match`, when present, is a regular-expression source the
/// consuming framework matches against the current route to decide
/// highlighting.
///
/// Serializes in the shape the consuming framework expects: camelCase
/// field names, absent fields omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display text.
    pub text: String,
    /// Link target: absolute URL or site-relative path starting with `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Route-matching pattern for highlighting (regular-expression source).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
    /// Child items. Empty for direct-link entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavItem {
    /// Direct-link entry.
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            active_match: None,
            items: Vec::new(),
        }
    }

    /// Direct-link entry with a route-matching pattern for highlighting.
    pub fn link_matching(
        text: impl Into<String>,
        link: impl Into<String>,
        active_match: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            active_match: Some(active_match.into()),
            items: Vec::new(),
        }
    }

    /// Dropdown group with a route-matching pattern for highlighting.
    pub fn group(
        text: impl Into<String>,
        active_match: impl Into<String>,
        items: Vec<NavItem>,
    ) -> Self {
        Self {
            text: text.into(),
            link: None,
            active_match: Some(active_match.into()),
            items,
        }
    }

    /// Titled category inside a dropdown group (one level of nesting).
    pub fn category(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            link: None,
            active_match: None,
            items,
        }
    }

    /// True if this entry holds child items rather than linking directly.
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.items.is_empty()
    }
}
