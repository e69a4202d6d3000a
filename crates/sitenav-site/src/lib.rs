//! Composed configuration of the Italian Vue.js documentation site.
//!
//! The site is authored as static literals: the top navigation tree
//! ([`nav`]), the per-section sidebar map ([`sidebar`]), the Italian UI
//! strings ([`i18n`]), the document-head tags ([`head`]) and the
//! pass-through integration and build-tool records. [`site_config`]
//! assembles them into the single immutable [`SiteConfig`] value the
//! external rendering framework consumes for the lifetime of a build or
//! dev-server run.
//!
//! Construction happens once at startup and can fail only while resolving
//! the inlined head scripts from disk; every other input is literal data,
//! checked by the test suite rather than at runtime.

use serde::Serialize;
use sitenav_build::{BundlerOptions, MarkdownOptions};
use sitenav_model::{NavItem, Sidebar};
use sitenav_theme::head::HeadError;
use sitenav_theme::{
    AdsConfig, EditLink, Footer, HeadTag, LocaleLink, LocaleStrings, SearchIndex, Sitemap,
    SocialLink,
};

mod head;
mod i18n;
mod integrations;
mod nav;
mod sidebar;
mod toolchain;

pub use head::head;
pub use i18n::locale_strings;
pub use integrations::{
    algolia, carbon_ads, edit_link, footer, locale_links, sitemap, social_links,
};
pub use nav::nav;
pub use sidebar::sidebar;
pub use toolchain::{bundler_options, markdown_options};

/// Document language.
pub const LANG: &str = "it-IT";
/// Site title.
pub const TITLE: &str = "Vue.js";
/// Site description, also used for social-card metadata.
pub const DESCRIPTION: &str = "Vue.js - The Progressive JavaScript Framework";
/// Markdown source directory, relative to the project root.
pub const SRC_DIR: &str = "src";
/// Year shown in the footer copyright line.
pub const COPYRIGHT_YEAR: u16 = 2026;

/// Theme-level slice of the configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub nav: Vec<NavItem>,
    pub sidebar: Sidebar,
    pub i18n: LocaleStrings,
    pub locale_links: Vec<LocaleLink>,
    pub algolia: SearchIndex,
    pub carbon_ads: AdsConfig,
    pub social_links: Vec<SocialLink>,
    pub edit_link: EditLink,
    pub footer: Footer,
}

/// The complete configuration value handed to the rendering framework.
///
/// Constructed once by [`site_config`]; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub lang: String,
    pub title: String,
    pub description: String,
    pub src_dir: String,
    /// Glob patterns excluded from the markdown source tree.
    pub src_exclude: Vec<String>,
    pub sitemap: Sitemap,
    /// Head tags in document order.
    pub head: Vec<HeadTag>,
    #[serde(rename = "themeConfig")]
    pub theme: ThemeConfig,
    pub markdown: MarkdownOptions,
    /// Bundler pass-through, serialized under the key the framework
    /// forwards to its bundler.
    #[serde(rename = "vite")]
    pub bundler: BundlerOptions,
}

/// Assemble the full site configuration.
///
/// A structural merge of the authored literals; the only work performed
/// is reading the two inlined head scripts from disk.
///
/// # Errors
///
/// Returns [`HeadError`] if an inlined script cannot be read. This is
/// fatal to startup: a configuration without the inlined scripts would
/// silently drop behavior the site depends on.
pub fn site_config() -> Result<SiteConfig, HeadError> {
    let head = head::head()?;
    let nav = nav::nav();
    let sidebar = sidebar::sidebar();

    tracing::debug!(
        nav_entries = nav.len(),
        sidebar_sections = sidebar.len(),
        head_tags = head.len(),
        "Composed site configuration"
    );

    Ok(SiteConfig {
        lang: LANG.to_owned(),
        title: TITLE.to_owned(),
        description: DESCRIPTION.to_owned(),
        src_dir: SRC_DIR.to_owned(),
        src_exclude: vec!["tutorial/**/description.md".to_owned()],
        sitemap: integrations::sitemap(),
        head,
        theme: ThemeConfig {
            nav,
            sidebar,
            i18n: i18n::locale_strings(),
            locale_links: integrations::locale_links(),
            algolia: integrations::algolia(),
            carbon_ads: integrations::carbon_ads(),
            social_links: integrations::social_links(),
            edit_link: integrations::edit_link(),
            footer: integrations::footer(),
        },
        markdown: toolchain::markdown_options(),
        bundler: toolchain::bundler_options(),
    })
}
