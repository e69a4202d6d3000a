//! Localized UI strings with typed fallback to framework defaults.
//!
//! The consuming framework ships English strings for every piece of UI
//! chrome; a locale overrides any subset of them. Partial localization is
//! valid: a missing key means "use the framework default", which the
//! lookups here return as a typed [`UiString::FrameworkDefault`] /
//! [`UiSentence::FrameworkDefault`] value rather than a bare `None`.

use serde::Serialize;

/// UI-string keys with plain-text values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextKey {
    Previous,
    Next,
    Toc,
    Search,
    Menu,
    ReturnToTop,
    Appearance,
    PageNotFound,
    AriaDarkMode,
    AriaSkipToContent,
    AriaMainNav,
    AriaMobileNav,
    AriaSidebarNav,
}

impl TextKey {
    /// All plain-text keys the framework recognizes.
    pub const ALL: [TextKey; 13] = [
        TextKey::Previous,
        TextKey::Next,
        TextKey::Toc,
        TextKey::Search,
        TextKey::Menu,
        TextKey::ReturnToTop,
        TextKey::Appearance,
        TextKey::PageNotFound,
        TextKey::AriaDarkMode,
        TextKey::AriaSkipToContent,
        TextKey::AriaMainNav,
        TextKey::AriaMobileNav,
        TextKey::AriaSidebarNav,
    ];

    /// Key name as the consuming framework spells it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TextKey::Previous => "previous",
            TextKey::Next => "next",
            TextKey::Toc => "toc",
            TextKey::Search => "search",
            TextKey::Menu => "menu",
            TextKey::ReturnToTop => "returnToTop",
            TextKey::Appearance => "appearance",
            TextKey::PageNotFound => "pageNotFound",
            TextKey::AriaDarkMode => "ariaDarkMode",
            TextKey::AriaSkipToContent => "ariaSkipToContent",
            TextKey::AriaMainNav => "ariaMainNav",
            TextKey::AriaMobileNav => "ariaMobileNav",
            TextKey::AriaSidebarNav => "ariaSidebarNav",
        }
    }

    /// Untranslated string the framework falls back to.
    #[must_use]
    pub fn framework_default(self) -> &'static str {
        match self {
            TextKey::Previous => "Previous",
            TextKey::Next => "Next",
            TextKey::Toc => "On this page",
            TextKey::Search => "Search",
            TextKey::Menu => "Menu",
            TextKey::ReturnToTop => "Return to top",
            TextKey::Appearance => "Appearance",
            TextKey::PageNotFound => "Page not found",
            TextKey::AriaDarkMode => "Toggle dark mode",
            TextKey::AriaSkipToContent => "Skip to content",
            TextKey::AriaMainNav => "Main navigation",
            TextKey::AriaMobileNav => "Mobile navigation",
            TextKey::AriaSidebarNav => "Sidebar navigation",
        }
    }
}

/// UI-string keys whose values are sentences with an embedded hyperlink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentenceKey {
    DeadLink,
    DeadLinkReport,
    FooterLicense,
}

impl SentenceKey {
    /// All composite keys the framework recognizes.
    pub const ALL: [SentenceKey; 3] = [
        SentenceKey::DeadLink,
        SentenceKey::DeadLinkReport,
        SentenceKey::FooterLicense,
    ];

    /// Key name as the consuming framework spells it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SentenceKey::DeadLink => "deadLink",
            SentenceKey::DeadLinkReport => "deadLinkReport",
            SentenceKey::FooterLicense => "footerLicense",
        }
    }

    /// Untranslated sentence the framework falls back to.
    #[must_use]
    pub fn framework_default(self) -> &'static DefaultSentence {
        match self {
            SentenceKey::DeadLink => &DefaultSentence {
                before: "You've hit a dead link: ",
                link: None,
                after: "",
            },
            SentenceKey::DeadLinkReport => &DefaultSentence {
                before: "Please ",
                link: Some("let us know"),
                after: " so we can fix it.",
            },
            SentenceKey::FooterLicense => &DefaultSentence {
                before: "Released under the ",
                link: None,
                after: ".",
            },
        }
    }
}

/// Localized sentence with an optional embedded hyperlink: the rendered
/// form is `before` + link text + `after`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LinkedSentence {
    pub before: String,
    /// Clickable text, when the sentence embeds a hyperlink.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub after: String,
}

impl LinkedSentence {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            link: None,
            after: after.into(),
        }
    }

    pub fn with_link(
        before: impl Into<String>,
        link: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            before: before.into(),
            link: Some(link.into()),
            after: after.into(),
        }
    }

    /// Reconstruct the full sentence text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.before.clone();
        if let Some(link) = &self.link {
            out.push_str(link);
        }
        out.push_str(&self.after);
        out
    }
}

/// Framework-default counterpart of [`LinkedSentence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultSentence {
    pub before: &'static str,
    pub link: Option<&'static str>,
    pub after: &'static str,
}

impl DefaultSentence {
    /// Reconstruct the full sentence text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.before.to_owned();
        if let Some(link) = self.link {
            out.push_str(link);
        }
        out.push_str(self.after);
        out
    }
}

/// Result of a plain-text lookup: the locale's string, or the framework's
/// untranslated default when the locale leaves the key unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiString<'a> {
    Translated(&'a str),
    FrameworkDefault(&'static str),
}

impl UiString<'_> {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            UiString::Translated(s) => s,
            UiString::FrameworkDefault(s) => s,
        }
    }
}

/// Result of a composite lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiSentence<'a> {
    Translated(&'a LinkedSentence),
    FrameworkDefault(&'static DefaultSentence),
}

impl UiSentence<'_> {
    /// Reconstruct the full sentence text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            UiSentence::Translated(s) => s.render(),
            UiSentence::FrameworkDefault(s) => s.render(),
        }
    }
}

/// One locale's UI-string table. Unset keys fall back to framework
/// defaults via [`LocaleStrings::text`] and [`LocaleStrings::sentence`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleStrings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_not_found: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead_link: Option<LinkedSentence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead_link_report: Option<LinkedSentence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_license: Option<LinkedSentence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_dark_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_skip_to_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_main_nav: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_mobile_nav: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_sidebar_nav: Option<String>,
}

impl LocaleStrings {
    /// Plain-text lookup with framework-default fallback.
    #[must_use]
    pub fn text(&self, key: TextKey) -> UiString<'_> {
        let value = match key {
            TextKey::Previous => &self.previous,
            TextKey::Next => &self.next,
            TextKey::Toc => &self.toc,
            TextKey::Search => &self.search,
            TextKey::Menu => &self.menu,
            TextKey::ReturnToTop => &self.return_to_top,
            TextKey::Appearance => &self.appearance,
            TextKey::PageNotFound => &self.page_not_found,
            TextKey::AriaDarkMode => &self.aria_dark_mode,
            TextKey::AriaSkipToContent => &self.aria_skip_to_content,
            TextKey::AriaMainNav => &self.aria_main_nav,
            TextKey::AriaMobileNav => &self.aria_mobile_nav,
            TextKey::AriaSidebarNav => &self.aria_sidebar_nav,
        };
        match value {
            Some(s) => UiString::Translated(s),
            None => UiString::FrameworkDefault(key.framework_default()),
        }
    }

    /// Composite lookup with framework-default fallback.
    #[must_use]
    pub fn sentence(&self, key: SentenceKey) -> UiSentence<'_> {
        let value = match key {
            SentenceKey::DeadLink => &self.dead_link,
            SentenceKey::DeadLinkReport => &self.dead_link_report,
            SentenceKey::FooterLicense => &self.footer_license,
        };
        match value {
            Some(s) => UiSentence::Translated(s),
            None => UiSentence::FrameworkDefault(key.framework_default()),
        }
    }

    /// Names of recognized keys this locale leaves untranslated.
    #[must_use]
    pub fn untranslated_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for key in TextKey::ALL {
            if matches!(self.text(key), UiString::FrameworkDefault(_)) {
                missing.push(key.name());
            }
        }
        for key in SentenceKey::ALL {
            if matches!(self.sentence(key), UiSentence::FrameworkDefault(_)) {
                missing.push(key.name());
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_text_lookup_prefers_translation() {
        let strings = LocaleStrings {
            search: Some("Ricerca".to_owned()),
            ..LocaleStrings::default()
        };
        assert_eq!(
            strings.text(TextKey::Search),
            UiString::Translated("Ricerca")
        );
        assert_eq!(strings.text(TextKey::Search).as_str(), "Ricerca");
    }

    #[test]
    fn test_text_lookup_falls_back_to_framework_default() {
        let strings = LocaleStrings::default();
        assert_eq!(
            strings.text(TextKey::ReturnToTop),
            UiString::FrameworkDefault("Return to top")
        );
    }

    #[test]
    fn test_sentence_lookup_falls_back_to_framework_default() {
        let strings = LocaleStrings::default();
        let sentence = strings.sentence(SentenceKey::DeadLinkReport);
        assert!(matches!(sentence, UiSentence::FrameworkDefault(_)));
        assert_eq!(sentence.render(), "Please let us know so we can fix it.");
    }

    #[test]
    fn test_linked_sentence_render_concatenates_around_link() {
        let sentence = LinkedSentence::with_link("Grazie per ", "farcelo sapere", ".");
        assert_eq!(sentence.render(), "Grazie per farcelo sapere.");
    }

    #[test]
    fn test_linked_sentence_render_without_link() {
        let sentence = LinkedSentence::new("Hai trovato un link morto : ", "");
        assert_eq!(sentence.render(), "Hai trovato un link morto : ");
    }

    #[test]
    fn test_untranslated_keys_lists_unset_keys_only() {
        let strings = LocaleStrings {
            previous: Some("Precedente".to_owned()),
            next: Some("Successivo".to_owned()),
            ..LocaleStrings::default()
        };
        let missing = strings.untranslated_keys();
        assert!(!missing.contains(&"previous"));
        assert!(!missing.contains(&"next"));
        assert!(missing.contains(&"toc"));
        assert!(missing.contains(&"deadLinkReport"));
    }

    #[test]
    fn test_fully_translated_locale_has_no_untranslated_keys() {
        let strings = LocaleStrings {
            previous: Some("p".to_owned()),
            next: Some("n".to_owned()),
            toc: Some("t".to_owned()),
            search: Some("s".to_owned()),
            menu: Some("m".to_owned()),
            return_to_top: Some("r".to_owned()),
            appearance: Some("a".to_owned()),
            page_not_found: Some("404".to_owned()),
            dead_link: Some(LinkedSentence::new("b", "a")),
            dead_link_report: Some(LinkedSentence::with_link("b", "l", "a")),
            footer_license: Some(LinkedSentence::new("", "")),
            aria_dark_mode: Some("d".to_owned()),
            aria_skip_to_content: Some("s".to_owned()),
            aria_main_nav: Some("m".to_owned()),
            aria_mobile_nav: Some("m".to_owned()),
            aria_sidebar_nav: Some("s".to_owned()),
        };
        assert_eq!(strings.untranslated_keys(), Vec::<&str>::new());
    }

    #[test]
    fn test_serialization_uses_framework_key_names() {
        let strings = LocaleStrings {
            return_to_top: Some("Torna in cima".to_owned()),
            dead_link: Some(LinkedSentence::new("Hai trovato un link morto : ", "")),
            ..LocaleStrings::default()
        };
        let json = serde_json::to_value(&strings).unwrap();
        assert_eq!(json["returnToTop"], "Torna in cima");
        assert_eq!(json["deadLink"]["before"], "Hai trovato un link morto : ");
        // Unset keys are omitted so the framework applies its defaults
        assert!(json.get("search").is_none());
        assert!(json["deadLink"].get("link").is_none());
    }
}
