//! Build-tool wiring handed verbatim to the external toolchain.

use sitenav_build::{
    BuildOutputOptions, BundlerOptions, BundlerPlugins, DevServerOptions, GroupIconOptions,
    JsonOptions, Limit, LlmsTxtOptions, MarkdownOptions, OptimizeDeps, PluginHandle, SsrOptions,
};

/// Template for the generated llms.txt index document.
const LLMS_TXT_TEMPLATE: &str = "\
# Vue.js

Vue.js - The Progressive JavaScript Framework

## Table of Contents

{toc}";

/// Markdown pipeline options: highlighting theme plus the formatting
/// extensions the site registers by name.
#[must_use]
pub fn markdown_options() -> MarkdownOptions {
    MarkdownOptions {
        theme: "github-dark".to_owned(),
        plugins: vec![
            PluginHandle::named("header-anchors"),
            PluginHandle::named("group-icons"),
        ],
    }
}

/// Bundler and dev-server pass-through options.
#[must_use]
pub fn bundler_options() -> BundlerOptions {
    BundlerOptions {
        define: vec![(
            "__VUE_OPTIONS_API__".to_owned(),
            serde_json::Value::Bool(false),
        )],
        optimize_deps: OptimizeDeps {
            include: vec!["gsap".to_owned(), "dynamics.js".to_owned()],
            exclude: vec!["@vue/repl".to_owned()],
        },
        ssr: SsrOptions {
            external: vec!["@vue/repl".to_owned()],
        },
        server: DevServerOptions {
            host: true,
            // for when developing with locally linked theme
            fs_allow: vec!["../..".to_owned()],
        },
        build: BuildOutputOptions {
            chunk_size_warning_limit: Limit::Unlimited,
        },
        json: JsonOptions { stringify: true },
        plugins: BundlerPlugins {
            llms_txt: Some(LlmsTxtOptions {
                ignore_files: vec![
                    "about/team/**/*".to_owned(),
                    "about/team.md".to_owned(),
                    "about/privacy.md".to_owned(),
                    "about/coc.md".to_owned(),
                    "developers/**/*".to_owned(),
                    "ecosystem/themes.md".to_owned(),
                    "examples/**/*".to_owned(),
                    "partners/**/*".to_owned(),
                    "sponsor/**/*".to_owned(),
                    "index.md".to_owned(),
                ],
                custom_llms_txt_template: LLMS_TXT_TEMPLATE.to_owned(),
            }),
            group_icons: Some(GroupIconOptions {
                custom_icon: vec![
                    ("cypress".to_owned(), "vscode-icons:file-type-cypress".to_owned()),
                    ("testing library".to_owned(), "logos:testing-library".to_owned()),
                ],
            }),
        },
    }
}
