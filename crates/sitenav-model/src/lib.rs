//! Navigation and sidebar data model for the documentation site.
//!
//! Provides the structural types the site configuration is authored in:
//! [`NavItem`] trees for the top navigation bar and [`Sidebar`] maps from
//! route prefixes to ordered [`SidebarGroup`] lists.
//!
//! The literals themselves are author-time content, so construction never
//! fails; structural mistakes are surfaced by the advisory checks in
//! [`validate`], which the test suite runs against the authored data.
//!
//! # Example
//!
//! ```
//! use sitenav_model::{NavItem, Sidebar, SidebarGroup};
//!
//! let nav = vec![
//!     NavItem::link("Guide", "/guide/introduction"),
//!     NavItem::link("Playground", "https://play.example.org"),
//! ];
//! assert!(!nav[0].is_group());
//!
//! let mut sidebar = Sidebar::new();
//! sidebar.insert(
//!     "/guide/",
//!     vec![SidebarGroup::new(
//!         "Getting started",
//!         vec![NavItem::link("Overview", "/guide/introduction")],
//!     )],
//! );
//! assert_eq!(sidebar.get("/guide/").unwrap().len(), 1);
//! ```

mod nav;
mod sidebar;
pub mod validate;

pub use nav::NavItem;
pub use sidebar::{Sidebar, SidebarGroup};
pub use validate::{Finding, Severity, ValidationError, ValidationReport};
