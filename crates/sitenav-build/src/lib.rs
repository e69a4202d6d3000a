//! Build-tool pass-through options.
//!
//! Everything here is opaque configuration handed verbatim to the
//! external toolchain: the markdown pipeline gets named plugin handles
//! ([`markdown`]), the bundler/dev-server gets its option records
//! ([`bundler`]). No value in this crate is validated or interpreted.

pub mod bundler;
pub mod markdown;

pub use bundler::{
    BuildOutputOptions, BundlerOptions, BundlerPlugins, DevServerOptions, GroupIconOptions,
    JsonOptions, Limit, LlmsTxtOptions, OptimizeDeps, SsrOptions,
};
pub use markdown::{MarkdownOptions, PluginHandle};
