//! Bundler and dev-server pass-through options.

use serde::{Serialize, Serializer};

/// Options handed to the bundler/dev-server layer.
///
/// Opaque to the site: nothing here is validated, the bundler interprets
/// every field.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerOptions {
    /// Compile-time constant definitions (name → JSON value).
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "ordered_map")]
    pub define: Vec<(String, serde_json::Value)>,
    /// Dependency pre-optimization lists.
    pub optimize_deps: OptimizeDeps,
    /// Server-side-rendering externalization.
    pub ssr: SsrOptions,
    /// Dev-server settings.
    pub server: DevServerOptions,
    /// Build output settings.
    pub build: BuildOutputOptions,
    /// JSON handling mode.
    pub json: JsonOptions,
    /// Bundler plugin option records.
    pub plugins: BundlerPlugins,
}

/// Dependency pre-optimization lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OptimizeDeps {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Packages kept external to the server-side-rendering bundle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SsrOptions {
    pub external: Vec<String>,
}

/// Dev-server host and filesystem-access settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    /// Listen on all addresses, not just loopback.
    pub host: bool,
    /// Extra directories the dev server may serve files from.
    pub fs_allow: Vec<String>,
}

/// Build output settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOutputOptions {
    /// Chunk size above which the bundler warns.
    pub chunk_size_warning_limit: Limit,
}

/// A numeric threshold that may be switched off entirely.
///
/// Serializes as the number of bytes, or `null` for [`Limit::Unlimited`]
/// (JSON has no infinity; the consuming layer treats null as "no limit").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Limit {
    Bytes(u64),
    #[default]
    Unlimited,
}

impl Serialize for Limit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Limit::Bytes(n) => serializer.serialize_u64(*n),
            Limit::Unlimited => serializer.serialize_none(),
        }
    }
}

/// JSON handling mode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JsonOptions {
    /// Emit imported JSON as parsed-string modules instead of object
    /// literals.
    pub stringify: bool,
}

/// Option records for bundler plugins the site registers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerPlugins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llms_txt: Option<LlmsTxtOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_icons: Option<GroupIconOptions>,
}

/// Options for the llms-txt index generator plugin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmsTxtOptions {
    /// Glob patterns of pages excluded from the generated index.
    pub ignore_files: Vec<String>,
    /// Template for the generated index document.
    pub custom_llms_txt_template: String,
}

/// Options for the code-group icon plugin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupIconOptions {
    /// Label → icon-name overrides, in authored order.
    #[serde(serialize_with = "ordered_string_map")]
    pub custom_icon: Vec<(String, String)>,
}

fn ordered_map<S: Serializer>(
    entries: &[(String, serde_json::Value)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
}

fn ordered_string_map<S: Serializer>(
    entries: &[(String, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unlimited_limit_serializes_as_null() {
        let build = BuildOutputOptions {
            chunk_size_warning_limit: Limit::Unlimited,
        };
        let json = serde_json::to_value(&build).unwrap();
        assert_eq!(json["chunkSizeWarningLimit"], serde_json::Value::Null);
    }

    #[test]
    fn test_byte_limit_serializes_as_number() {
        let json = serde_json::to_value(Limit::Bytes(500_000)).unwrap();
        assert_eq!(json, 500_000);
    }

    #[test]
    fn test_define_serializes_as_object() {
        let options = BundlerOptions {
            define: vec![("__FLAG__".to_owned(), serde_json::Value::Bool(false))],
            ..BundlerOptions::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["define"]["__FLAG__"], false);
    }

    #[test]
    fn test_unset_plugin_records_are_omitted() {
        let json = serde_json::to_value(BundlerPlugins::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_custom_icons_serialize_as_object() {
        let icons = GroupIconOptions {
            custom_icon: vec![("cypress".to_owned(), "file-type-cypress".to_owned())],
        };
        let json = serde_json::to_value(&icons).unwrap();
        assert_eq!(json["customIcon"]["cypress"], "file-type-cypress");
    }
}
