//! Theme-level configuration for the documentation site.
//!
//! Everything the theme consumes besides the navigation trees lives here:
//! the localized UI-string table with typed fallback to the theme's own
//! defaults ([`i18n`]), document-head tags including inline-script
//! resolution ([`head`]), and the pass-through integration records for
//! search, analytics, social links, edit links and the locale switcher
//! ([`integrations`]).

pub mod head;
pub mod i18n;
pub mod integrations;

pub use head::{HeadError, HeadTag, inline_script};
pub use i18n::{
    DefaultSentence, LinkedSentence, LocaleStrings, SentenceKey, TextKey, UiSentence, UiString,
};
pub use integrations::{
    AdsConfig, EditLink, Footer, FooterLicense, LocaleLink, SearchIndex, SearchParameters, Sitemap,
    SocialLink,
};
