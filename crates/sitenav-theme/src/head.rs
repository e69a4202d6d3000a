//! Document-head tags and inline-script resolution.
//!
//! A [`HeadTag`] describes one element injected into the document
//! `<head>`; the sequence the site composes determines document order.
//! Serializes as the `[tag, attributes]` / `[tag, attributes, content]`
//! triple the consuming framework expects.
//!
//! [`inline_script`] reads a local script file and embeds its text
//! verbatim as a script tag body. A missing or unreadable file is fatal
//! to configuration construction: the site would otherwise silently ship
//! without behavior it depends on (e.g. restoring the stored appearance
//! preference before first paint).

use std::io;
use std::path::{Path, PathBuf};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Error resolving an inline-script head tag.
#[derive(Debug, thiserror::Error)]
pub enum HeadError {
    /// Referenced script file does not exist.
    #[error("Inlined script not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the script file.
    #[error("Failed to read inlined script {}: {source}", .path.display())]
    Read {
        /// Path of the script file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// One HTML element to inject into the document head.
///
/// Attributes keep authored order; a hash map would reorder them in the
/// emitted markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    /// Element name (`meta`, `link`, `script`).
    pub tag: String,
    /// Attribute name/value pairs in authored order.
    pub attrs: Vec<(String, String)>,
    /// Inner content, for inline scripts.
    pub content: Option<String>,
}

impl HeadTag {
    /// Element with attributes and no inner content.
    pub fn element(tag: impl Into<String>, attrs: &[(&str, &str)]) -> Self {
        Self {
            tag: tag.into(),
            attrs: attrs
                .iter()
                .map(|&(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
            content: None,
        }
    }

    /// `<meta>` tag.
    pub fn meta(attrs: &[(&str, &str)]) -> Self {
        Self::element("meta", attrs)
    }

    /// `<link>` tag.
    pub fn link(attrs: &[(&str, &str)]) -> Self {
        Self::element("link", attrs)
    }

    /// External `<script>` tag.
    pub fn script(attrs: &[(&str, &str)]) -> Self {
        Self::element("script", attrs)
    }

    /// Inline `<script>` tag with verbatim body.
    pub fn inline_script(content: impl Into<String>) -> Self {
        Self {
            tag: "script".to_owned(),
            attrs: Vec::new(),
            content: Some(content.into()),
        }
    }
}

impl Serialize for HeadTag {
    /// Serializes as `[tag, {attrs}]`, with the inner content appended as
    /// a third element when present.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.tag)?;
        seq.serialize_element(&OrderedAttrs(&self.attrs))?;
        if let Some(content) = &self.content {
            seq.serialize_element(content)?;
        }
        seq.end()
    }
}

struct OrderedAttrs<'a>(&'a [(String, String)]);

impl Serialize for OrderedAttrs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Read `dir/file` and embed its text verbatim as an inline script tag.
///
/// The read is synchronous and idempotent; the file handle is released
/// when the read completes or fails.
///
/// # Errors
///
/// Returns [`HeadError::NotFound`] if the script file is absent, or
/// [`HeadError::Read`] for any other I/O failure. Callers treat either as
/// fatal to startup.
pub fn inline_script(dir: &Path, file: &str) -> Result<HeadTag, HeadError> {
    let path = dir.join(file);
    let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => HeadError::NotFound(path.clone()),
        _ => HeadError::Read {
            path: path.clone(),
            source: e,
        },
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Inlined script");
    Ok(HeadTag::inline_script(content))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_meta_tag_serializes_as_pair() {
        let tag = HeadTag::meta(&[("name", "theme-color"), ("content", "#3c8772")]);
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["meta", { "name": "theme-color", "content": "#3c8772" }])
        );
    }

    #[test]
    fn test_inline_script_serializes_as_triple() {
        let tag = HeadTag::inline_script("window.__x = 1");
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json, serde_json::json!(["script", {}, "window.__x = 1"]));
    }

    #[test]
    fn test_attribute_order_is_preserved() {
        let tag = HeadTag::script(&[
            ("src", "https://cdn.example.com/script.js"),
            ("data-site", "XNOLWPLB"),
            ("defer", ""),
        ]);
        let json = serde_json::to_string(&tag).unwrap();
        let src_pos = json.find("src").unwrap();
        let site_pos = json.find("data-site").unwrap();
        let defer_pos = json.find("defer").unwrap();
        assert!(src_pos < site_pos && site_pos < defer_pos);
    }

    #[test]
    fn test_inline_script_embeds_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let body = "const saved = localStorage.getItem('theme')\n";
        std::fs::write(dir.path().join("restore.js"), body).unwrap();

        let tag = inline_script(dir.path(), "restore.js").unwrap();
        assert_eq!(tag.tag, "script");
        assert!(tag.attrs.is_empty());
        assert_eq!(tag.content.as_deref(), Some(body));
    }

    #[test]
    fn test_inline_script_read_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.js"), "let x = 1\n").unwrap();

        let first = inline_script(dir.path(), "a.js").unwrap();
        let second = inline_script(dir.path(), "a.js").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_script_is_not_found_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = inline_script(dir.path(), "absent.js").unwrap_err();
        assert!(matches!(err, HeadError::NotFound(_)));
        assert!(err.to_string().contains("absent.js"));
    }
}
