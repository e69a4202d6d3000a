//! Document-head tags, including the two inlined scripts.

use std::path::{Path, PathBuf};

use sitenav_theme::head::{HeadError, HeadTag, inline_script};

/// Directory holding the scripts embedded verbatim into the head.
fn scripts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/inlined-scripts")
}

/// Head tags in document order.
///
/// # Errors
///
/// Returns [`HeadError`] if an inlined script file is missing or
/// unreadable; the configuration cannot be produced without it.
pub fn head() -> Result<Vec<HeadTag>, HeadError> {
    let scripts = scripts_dir();
    Ok(vec![
        HeadTag::meta(&[("name", "theme-color"), ("content", "#3c8772")]),
        HeadTag::meta(&[("property", "og:url"), ("content", "https://vuejs.org/")]),
        HeadTag::meta(&[("property", "og:type"), ("content", "website")]),
        HeadTag::meta(&[("property", "og:title"), ("content", "Vue.js")]),
        HeadTag::meta(&[
            ("property", "og:description"),
            ("content", "Vue.js - The Progressive JavaScript Framework"),
        ]),
        HeadTag::meta(&[
            ("property", "og:image"),
            ("content", "https://vuejs.org/images/logo.png"),
        ]),
        HeadTag::meta(&[("name", "twitter:site"), ("content", "@vuejs")]),
        HeadTag::meta(&[("name", "twitter:card"), ("content", "summary")]),
        HeadTag::link(&[
            ("rel", "preconnect"),
            ("href", "https://automation.vuejs.org"),
        ]),
        inline_script(&scripts, "restore-preference.js")?,
        inline_script(&scripts, "uwu.js")?,
        HeadTag::script(&[
            ("src", "https://cdn.usefathom.com/script.js"),
            ("data-site", "XNOLWPLB"),
            ("data-spa", "auto"),
            ("defer", ""),
        ]),
        HeadTag::script(&[
            ("src", "https://media.bitterbrains.com/main.js?from=vuejs&type=top"),
            ("async", "true"),
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tags_keep_document_order() {
        let head = head().unwrap();
        assert_eq!(head.len(), 13);
        assert_eq!(head[0].tag, "meta");
        assert_eq!(head[0].attrs[0], ("name".to_owned(), "theme-color".to_owned()));
        assert_eq!(head[8].tag, "link");
        // The two inlined scripts sit between the preconnect link and the
        // external analytics scripts
        assert!(head[9].content.is_some());
        assert!(head[10].content.is_some());
        assert!(head[11].content.is_none());
    }

    #[test]
    fn test_inlined_scripts_embed_the_asset_files() {
        let head = head().unwrap();
        let restore = head[9].content.as_deref().unwrap();
        assert!(restore.contains("localStorage"));
        let uwu = head[10].content.as_deref().unwrap();
        assert!(uwu.contains("uwu"));
    }

    #[test]
    fn test_reading_head_twice_yields_identical_content() {
        let first = head().unwrap();
        let second = head().unwrap();
        assert_eq!(first, second);
    }
}
