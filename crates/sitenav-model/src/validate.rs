//! Advisory structural checks for authored navigation data.
//!
//! The navigation and sidebar literals are author-time content, not
//! external input, so nothing here runs during normal construction.
//! These checks exist for the test suite and for authors: they catch the
//! structural mistakes that would otherwise ship silently (empty labels,
//! unresolvable links, duplicated sidebar entries).
//!
//! Findings carry a [`Severity`]: [`Severity::Error`] marks a defect,
//! [`Severity::Note`] marks something worth a look that may be deliberate
//! (a sidebar section linking outside its own route prefix).

use std::collections::HashSet;
use std::fmt;

use crate::nav::NavItem;
use crate::sidebar::Sidebar;

/// Whether a finding is a defect or an observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Structural mistake in the authored data.
    Error,
    /// Possibly deliberate; flagged for author review.
    Note,
}

/// One structural observation about the authored data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "error: {}", self.message),
            Severity::Note => write!(f, "note: {}", self.message),
        }
    }
}

/// Collected findings from one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

/// Aggregated error-severity findings, for callers that want authoring
/// mistakes to be fatal at startup.
#[derive(Debug, thiserror::Error)]
#[error("invalid navigation data: {0}")]
pub struct ValidationError(String);

impl ValidationReport {
    fn error(&mut self, message: String) {
        self.findings.push(Finding {
            severity: Severity::Error,
            message,
        });
    }

    fn note(&mut self, message: String) {
        self.findings.push(Finding {
            severity: Severity::Note,
            message,
        });
    }

    /// All findings, in discovery order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Error-severity findings only.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    /// Note-severity findings only.
    pub fn notes(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Note)
    }

    /// True when no error-severity findings were recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Merge another report's findings into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.findings.extend(other.findings);
    }

    /// Convert into a hard error when any error-severity finding exists.
    pub fn into_result(self) -> Result<(), ValidationError> {
        let errors: Vec<String> = self.errors().map(|f| f.message.clone()).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(errors.join("; ")))
        }
    }
}

/// True for link targets the site can resolve: absolute `http(s)` URLs or
/// site-relative paths starting with `/`.
#[must_use]
pub fn is_resolvable_link(link: &str) -> bool {
    link.starts_with('/') || link.starts_with("http://") || link.starts_with("https://")
}

/// Check a top navigation tree.
///
/// Walks the tree checking that every entry has non-empty display text,
/// every leaf has a resolvable link, and every `active_match` pattern
/// compiles as a regular expression.
#[must_use]
pub fn validate_nav(items: &[NavItem]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for item in items {
        check_nav_item(item, "nav", &mut report);
    }
    report
}

fn check_nav_item(item: &NavItem, context: &str, report: &mut ValidationReport) {
    if item.text.is_empty() {
        report.error(format!("{context}: entry with empty text"));
    }
    let label = if item.text.is_empty() {
        "<unnamed>"
    } else {
        item.text.as_str()
    };

    if let Some(pattern) = &item.active_match
        && let Err(e) = regex::Regex::new(pattern)
    {
        report.error(format!(
            "{context} '{label}': activeMatch '{pattern}' is not a valid pattern: {e}"
        ));
    }

    match &item.link {
        Some(link) if !is_resolvable_link(link) => {
            report.error(format!(
                "{context} '{label}': link '{link}' is neither an absolute URL nor a /-path"
            ));
        }
        None if !item.is_group() => {
            report.error(format!("{context} '{label}': leaf entry without a link"));
        }
        _ => {}
    }

    for child in &item.items {
        check_nav_item(child, &format!("{context} '{label}'"), report);
    }
}

/// Check a sidebar map.
///
/// Beyond the per-item checks of [`validate_nav`], verifies that route
/// prefixes are `/`-delimited, that no link is repeated within a section,
/// and notes in-site links that leave their section's route prefix.
#[must_use]
pub fn validate_sidebar(sidebar: &Sidebar) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (prefix, groups) in sidebar.iter() {
        let context = format!("sidebar '{prefix}'");

        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            report.error(format!(
                "{context}: route prefix must start and end with '/'"
            ));
        }

        let mut seen_links = HashSet::new();
        for group in groups {
            if group.text.is_empty() {
                report.error(format!("{context}: group with empty heading"));
            }
            for item in &group.items {
                check_nav_item(item, &format!("{context} group '{}'", group.text), &mut report);

                let Some(link) = &item.link else { continue };
                if !seen_links.insert(link.as_str()) {
                    report.error(format!(
                        "{context}: duplicate link '{link}' within the section"
                    ));
                }
                if link.starts_with('/') && !link.starts_with(prefix) {
                    report.note(format!(
                        "{context}: '{link}' links outside the section prefix"
                    ));
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sidebar::SidebarGroup;

    #[test]
    fn test_clean_nav_produces_no_findings() {
        let nav = vec![
            NavItem::group(
                "Docs",
                "^/(guide|examples)/",
                vec![
                    NavItem::link("Guide", "/guide/introduction"),
                    NavItem::link("Legacy Docs", "https://v2.example.org"),
                ],
            ),
            NavItem::link_matching("API", "/api/", "^/api/"),
        ];
        let report = validate_nav(&nav);
        assert!(report.is_clean());
        assert_eq!(report.findings().len(), 0);
    }

    #[test]
    fn test_empty_text_is_an_error() {
        let nav = vec![NavItem::link("", "/guide/")];
        let report = validate_nav(&nav);
        assert!(!report.is_clean());
        assert!(report.errors().next().unwrap().message.contains("empty text"));
    }

    #[test]
    fn test_relative_link_is_an_error() {
        let nav = vec![NavItem::link("Guide", "guide/introduction")];
        let report = validate_nav(&nav);
        assert!(!report.is_clean());
        assert!(
            report
                .errors()
                .next()
                .unwrap()
                .message
                .contains("guide/introduction")
        );
    }

    #[test]
    fn test_leaf_without_link_is_an_error() {
        let nav = vec![NavItem {
            text: "Dangling".to_owned(),
            link: None,
            active_match: None,
            items: Vec::new(),
        }];
        let report = validate_nav(&nav);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_group_without_link_is_fine() {
        let nav = vec![NavItem::group(
            "About",
            "^/about/",
            vec![NavItem::link("FAQ", "/about/faq")],
        )];
        assert!(validate_nav(&nav).is_clean());
    }

    #[test]
    fn test_broken_active_match_pattern_is_an_error() {
        let nav = vec![NavItem::link_matching("API", "/api/", "^/(api/")];
        let report = validate_nav(&nav);
        assert!(!report.is_clean());
        assert!(report.errors().next().unwrap().message.contains("activeMatch"));
    }

    #[test]
    fn test_findings_name_the_nesting_context() {
        let nav = vec![NavItem::group(
            "Ecosystem",
            "^/ecosystem/",
            vec![NavItem::category(
                "Resources",
                vec![NavItem::link("", "/partners/")],
            )],
        )];
        let report = validate_nav(&nav);
        let message = &report.errors().next().unwrap().message;
        assert!(message.contains("Ecosystem"), "{message}");
        assert!(message.contains("Resources"), "{message}");
    }

    #[test]
    fn test_duplicate_link_within_section_is_an_error() {
        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "/guide/",
            vec![SidebarGroup::new(
                "Essentials",
                vec![
                    NavItem::link("Lifecycle", "/guide/essentials/lifecycle"),
                    NavItem::link("Lifecycle Hooks", "/guide/essentials/lifecycle"),
                ],
            )],
        );
        let report = validate_sidebar(&sidebar);
        assert!(!report.is_clean());
        assert!(
            report
                .errors()
                .next()
                .unwrap()
                .message
                .contains("duplicate link")
        );
    }

    #[test]
    fn test_duplicate_link_across_groups_in_one_section_is_an_error() {
        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "/guide/",
            vec![
                SidebarGroup::new(
                    "First",
                    vec![NavItem::link("Overview", "/guide/introduction")],
                ),
                SidebarGroup::new(
                    "Second",
                    vec![NavItem::link("Intro", "/guide/introduction")],
                ),
            ],
        );
        assert!(!validate_sidebar(&sidebar).is_clean());
    }

    #[test]
    fn test_out_of_section_link_is_a_note_not_an_error() {
        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "/guide/",
            vec![SidebarGroup::new(
                "Scaling up",
                vec![NavItem::link("Tooling", "/ecosystem/tooling")],
            )],
        );
        let report = validate_sidebar(&sidebar);
        assert!(report.is_clean());
        assert_eq!(report.notes().count(), 1);
    }

    #[test]
    fn test_external_link_in_section_is_not_noted() {
        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "/guide/",
            vec![SidebarGroup::new(
                "Extras",
                vec![NavItem::link("Upstream", "https://example.org/guide")],
            )],
        );
        let report = validate_sidebar(&sidebar);
        assert!(report.is_clean());
        assert_eq!(report.notes().count(), 0);
    }

    #[test]
    fn test_malformed_route_prefix_is_an_error() {
        let mut sidebar = Sidebar::new();
        sidebar.insert("guide", Vec::new());
        assert!(!validate_sidebar(&sidebar).is_clean());
    }

    #[test]
    fn test_into_result_aggregates_errors() {
        let nav = vec![NavItem::link("", "broken")];
        let err = validate_nav(&nav).into_result().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("empty text"), "{message}");
        assert!(message.contains("broken"), "{message}");
    }

    #[test]
    fn test_into_result_ignores_notes() {
        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "/guide/",
            vec![SidebarGroup::new(
                "Scaling up",
                vec![NavItem::link("Tooling", "/ecosystem/tooling")],
            )],
        );
        assert!(validate_sidebar(&sidebar).into_result().is_ok());
    }
}
