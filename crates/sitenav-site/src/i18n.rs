//! Italian UI strings.

use sitenav_theme::{LinkedSentence, LocaleStrings};

/// The Italian locale table. Keys left unset fall back to the theme's
/// English defaults.
#[must_use]
pub fn locale_strings() -> LocaleStrings {
    LocaleStrings {
        previous: Some("Precedente".to_owned()),
        next: Some("Successivo".to_owned()),
        toc: Some("In questa pagina".to_owned()),
        search: Some("Ricerca".to_owned()),
        menu: Some("Menu".to_owned()),
        return_to_top: Some("Torna in cima".to_owned()),
        appearance: Some("Aspetto".to_owned()),
        page_not_found: Some("Pagina non trovata".to_owned()),
        dead_link: Some(LinkedSentence::new("Hai trovato un link morto : ", "")),
        dead_link_report: Some(LinkedSentence::with_link(
            "Grazie per ",
            "farcelo sapere",
            " per aiutarci a risolvere quanto prima.",
        )),
        footer_license: Some(LinkedSentence::new("", "")),
        aria_dark_mode: Some("Modalità scura".to_owned()),
        aria_skip_to_content: Some("Passa al contenuto".to_owned()),
        aria_main_nav: Some("Navigazione principale".to_owned()),
        aria_mobile_nav: Some("Navigazione da mobile".to_owned()),
        aria_sidebar_nav: Some("Navigazione secondaria".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sitenav_theme::{SentenceKey, TextKey, UiString};

    use super::*;

    #[test]
    fn test_every_recognized_key_is_translated() {
        let strings = locale_strings();
        assert_eq!(strings.untranslated_keys(), Vec::<&str>::new());
    }

    #[test]
    fn test_lookups_return_the_italian_strings() {
        let strings = locale_strings();
        assert_eq!(
            strings.text(TextKey::PageNotFound),
            UiString::Translated("Pagina non trovata")
        );
        assert_eq!(
            strings.sentence(SentenceKey::DeadLinkReport).render(),
            "Grazie per farcelo sapere per aiutarci a risolvere quanto prima."
        );
    }

    #[test]
    fn test_linked_sentences_surround_their_link_with_text() {
        let strings = locale_strings();
        for sentence in [&strings.dead_link, &strings.dead_link_report] {
            let sentence = sentence.as_ref().unwrap();
            if sentence.link.is_some() {
                assert!(!sentence.before.is_empty());
                assert!(!sentence.after.is_empty());
            }
        }
    }
}
