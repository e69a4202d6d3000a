//! Markdown pipeline wiring.

use serde::Serialize;

/// Named reference to a formatting extension registered with the external
/// markdown pipeline. The site supplies handles, not implementations: the
/// pipeline resolves each name to code it owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginHandle {
    name: String,
}

impl PluginHandle {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Options handed to the markdown renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkdownOptions {
    /// Syntax-highlighting theme name.
    pub theme: String,
    /// Extensions to register, in registration order.
    pub plugins: Vec<PluginHandle>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plugins_keep_registration_order() {
        let options = MarkdownOptions {
            theme: "github-dark".to_owned(),
            plugins: vec![
                PluginHandle::named("header-anchors"),
                PluginHandle::named("group-icons"),
            ],
        };
        let names: Vec<_> = options.plugins.iter().map(PluginHandle::name).collect();
        assert_eq!(names, vec!["header-anchors", "group-icons"]);
    }

    #[test]
    fn test_plugin_handle_serializes_as_bare_name() {
        let json = serde_json::to_value(PluginHandle::named("header-anchors")).unwrap();
        assert_eq!(json, "header-anchors");
    }
}
