//! Pass-through integration records.
//!
//! Externally hosted services and theme affordances the site wires up but
//! never interprets: search indexing and ad credentials are opaque
//! strings handed to the framework untouched.

use serde::Serialize;

/// Hosted search-index credentials (Algolia).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    pub index_name: String,
    pub app_id: String,
    pub api_key: String,
    /// Facet filter expressions forwarded with every query.
    pub search_parameters: SearchParameters,
}

/// Query parameters forwarded to the search service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    pub facet_filters: Vec<String>,
}

/// Ad-network placement credentials (Carbon).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdsConfig {
    pub code: String,
    pub placement: String,
}

/// One icon link in the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

/// "Edit this page" affordance: repository slug plus link text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditLink {
    pub repo: String,
    pub text: String,
}

/// Page footer: license line and copyright.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub license: FooterLicense,
    pub copyright: String,
}

/// License name and link shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLicense {
    pub text: String,
    pub link: String,
}

/// One entry in the translated-sites switcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleLink {
    pub link: String,
    pub text: String,
    /// Source repository of that translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Marks the "help us translate" entry the theme styles differently.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_translations_desc: bool,
}

impl LocaleLink {
    /// Translated-site entry.
    pub fn site(link: impl Into<String>, text: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            text: text.into(),
            repo: Some(repo.into()),
            is_translations_desc: false,
        }
    }

    /// The "help us translate" entry.
    pub fn translations_help(link: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            text: text.into(),
            repo: None,
            is_translations_desc: true,
        }
    }
}

/// Sitemap generation settings for the framework.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sitemap {
    pub hostname: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_search_index_serializes_with_framework_field_names() {
        let search = SearchIndex {
            index_name: "docs".to_owned(),
            app_id: "APPID".to_owned(),
            api_key: "key".to_owned(),
            search_parameters: SearchParameters {
                facet_filters: vec!["version:v3".to_owned()],
            },
        };
        let json = serde_json::to_value(&search).unwrap();
        assert_eq!(json["indexName"], "docs");
        assert_eq!(json["appId"], "APPID");
        assert_eq!(json["searchParameters"]["facetFilters"][0], "version:v3");
    }

    #[test]
    fn test_site_locale_link_omits_marker_field() {
        let entry = LocaleLink::site("https://vuejs.org", "English", "vuejs/docs");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["repo"], "vuejs/docs");
        assert!(json.get("isTranslationsDesc").is_none());
    }

    #[test]
    fn test_translations_help_entry_keeps_marker_field() {
        let entry = LocaleLink::translations_help("/translations/", "Aiutaci a tradurre!");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["isTranslationsDesc"], true);
        assert!(json.get("repo").is_none());
    }
}
