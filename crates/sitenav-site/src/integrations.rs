//! Integration records: search, ads, social links, edit link, footer,
//! locale switcher, sitemap. All pass-through data.

use sitenav_theme::{
    AdsConfig, EditLink, Footer, FooterLicense, LocaleLink, SearchIndex, SearchParameters, Sitemap,
    SocialLink,
};

use crate::COPYRIGHT_YEAR;

/// Hosted search-index credentials.
#[must_use]
pub fn algolia() -> SearchIndex {
    SearchIndex {
        index_name: "vuejs".to_owned(),
        app_id: "ML0LEBN7FQ".to_owned(),
        api_key: "10e7a8b13e6aec4007343338ab134e05".to_owned(),
        search_parameters: SearchParameters {
            facet_filters: vec!["version:v3".to_owned()],
        },
    }
}

/// Ad-network placement.
#[must_use]
pub fn carbon_ads() -> AdsConfig {
    AdsConfig {
        code: "CEBDT27Y".to_owned(),
        placement: "vuejsorg".to_owned(),
    }
}

/// Navigation-bar icon links.
#[must_use]
pub fn social_links() -> Vec<SocialLink> {
    [
        ("github", "https://github.com/vuejs/"),
        ("twitter", "https://x.com/vuejs"),
        ("discord", "https://discord.com/invite/vue"),
    ]
    .into_iter()
    .map(|(icon, link)| SocialLink {
        icon: icon.to_owned(),
        link: link.to_owned(),
    })
    .collect()
}

/// "Edit this page" affordance.
#[must_use]
pub fn edit_link() -> EditLink {
    EditLink {
        repo: "vuejs-translations/docs-it".to_owned(),
        text: "Modifica questa pagina su GitHub".to_owned(),
    }
}

/// Page footer.
#[must_use]
pub fn footer() -> Footer {
    Footer {
        license: FooterLicense {
            text: "MIT License".to_owned(),
            link: "https://opensource.org/licenses/MIT".to_owned(),
        },
        copyright: format!("Copyright © 2014-{COPYRIGHT_YEAR} Evan You"),
    }
}

/// Translated-sites switcher, ending with the "help us translate" entry.
#[must_use]
pub fn locale_links() -> Vec<LocaleLink> {
    let mut links: Vec<LocaleLink> = [
        ("https://vuejs.org", "English", "vuejs/docs"),
        ("https://cn.vuejs.org", "简体中文", "vuejs-translations/docs-zh-cn"),
        ("https://ja.vuejs.org", "日本語", "vuejs-translations/docs-ja"),
        ("https://ua.vuejs.org", "Українська", "vuejs-translations/docs-uk"),
        ("https://fr.vuejs.org", "Français", "vuejs-translations/docs-fr"),
        ("https://ko.vuejs.org", "한국어", "vuejs-translations/docs-ko"),
        ("https://pt.vuejs.org", "Português", "vuejs-translations/docs-pt"),
        ("https://bn.vuejs.org", "বাংলা", "vuejs-translations/docs-bn"),
        ("https://it.vuejs.org", "Italiano", "vuejs-translations/docs-it"),
        ("https://fa.vuejs.org", "فارسی", "vuejs-translations/docs-fa"),
        ("https://ru.vuejs.org", "Русский", "vuejs-translations/docs-ru"),
        ("https://cs.vuejs.org", "Čeština", "vuejs-translations/docs-cs"),
        ("https://zh-hk.vuejs.org", "繁體中文", "vuejs-translations/docs-zh-hk"),
        ("https://pl.vuejs.org", "Polski", "vuejs-translations/docs-pl"),
    ]
    .into_iter()
    .map(|(link, text, repo)| {
        LocaleLink::site(link, text, format!("https://github.com/{repo}"))
    })
    .collect();
    links.push(LocaleLink::translations_help(
        "/translations/",
        "Aiutaci a tradurre!",
    ));
    links
}

/// Sitemap generation settings.
#[must_use]
pub fn sitemap() -> Sitemap {
    Sitemap {
        hostname: "https://vuejs.org".to_owned(),
    }
}
