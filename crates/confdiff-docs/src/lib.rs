//! Built-in documentation for well-known configuration keys.
//!
//! Formatters annotate diff entries with a short blurb when the changed
//! path is a known build-configuration setting. The table covers the
//! common bundler vocabulary (entry points, output, loaders, plugins,
//! optimization) and is compiled in; nothing is read at runtime.
//!
//! # Key Types
//!
//! - [`KeyDoc`] — Documentation record for a single configuration path
//! - [`DocSource`] — Lookup trait implemented by documentation tables
//! - [`ConfigDocs`] — The built-in table

use serde::Serialize;

/// Documentation for one configuration path.
///
/// `key` is the exact human-readable path the record documents, either
/// a top-level name (`devtool`) or a dotted path
/// (`optimization.minimize`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDoc {
    pub key: &'static str,
    /// What the setting configures.
    pub description: &'static str,
    /// What a change to it typically affects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affects: Option<&'static str>,
    /// Default value, when one is well known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<&'static str>,
    /// Upstream reference documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<&'static str>,
}

/// Lookup interface formatters use to annotate entries.
///
/// Lookups are by exact human-readable path; callers decide whether to
/// retry with a parent path when the exact one is unknown.
pub trait DocSource {
    fn doc_for_key(&self, human_path: &str) -> Option<&KeyDoc>;
}

/// The built-in documentation table.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfigDocs;

impl ConfigDocs {
    /// Every documented key, sorted by key.
    pub fn all() -> &'static [KeyDoc] {
        DOCS
    }

    /// Exact-key lookup.
    pub fn lookup(key: &str) -> Option<&'static KeyDoc> {
        DOCS.binary_search_by(|doc| doc.key.cmp(key))
            .ok()
            .map(|index| &DOCS[index])
    }
}

impl DocSource for ConfigDocs {
    fn doc_for_key(&self, human_path: &str) -> Option<&KeyDoc> {
        Self::lookup(human_path)
    }
}

const fn doc(key: &'static str, description: &'static str) -> KeyDoc {
    KeyDoc {
        key,
        description,
        affects: None,
        default_value: None,
        documentation_url: None,
    }
}

const fn full(
    key: &'static str,
    description: &'static str,
    affects: &'static str,
    default_value: &'static str,
    documentation_url: &'static str,
) -> KeyDoc {
    KeyDoc {
        key,
        description,
        affects: Some(affects),
        default_value: Some(default_value),
        documentation_url: Some(documentation_url),
    }
}

const fn with_affects(
    key: &'static str,
    description: &'static str,
    affects: &'static str,
) -> KeyDoc {
    KeyDoc {
        key,
        description,
        affects: Some(affects),
        default_value: None,
        documentation_url: None,
    }
}

// Sorted by key; lookup binary-searches this table.
const DOCS: &[KeyDoc] = &[
    with_affects(
        "bail",
        "Abort the build on the first error instead of tolerating it",
        "Turns tolerated warnings into hard build failures",
    ),
    with_affects(
        "cache",
        "Build cache type and location",
        "Rebuild speed and what survives between runs",
    ),
    with_affects(
        "context",
        "Base directory for resolving entry points and loaders",
        "Every relative path in the configuration",
    ),
    doc(
        "devServer",
        "Development server behavior (port, proxy, hot reload)",
    ),
    full(
        "devServer.port",
        "Port the development server listens on",
        "Local development URLs and proxy setups",
        "8080",
        "https://webpack.js.org/configuration/dev-server/#devserverport",
    ),
    full(
        "devtool",
        "Source map generation style",
        "Build speed and debugging fidelity; some styles are unsafe in production",
        "eval",
        "https://webpack.js.org/configuration/devtool/",
    ),
    full(
        "entry",
        "Entry points where bundling starts",
        "Which bundles are emitted",
        "./src/index.js",
        "https://webpack.js.org/configuration/entry-context/",
    ),
    doc("experiments", "Opt-in experimental features"),
    with_affects(
        "externals",
        "Dependencies excluded from the bundle and resolved at runtime",
        "Bundle size; the target environment must provide the dependency",
    ),
    full(
        "mode",
        "Build mode preset",
        "Minification, environment defines, and other large default groups",
        "production",
        "https://webpack.js.org/configuration/mode/",
    ),
    doc("module", "How different module types are treated"),
    with_affects(
        "module.rules",
        "Loader rules matched against module requests",
        "Which loaders transform which files; order matters",
    ),
    doc("optimization", "Bundle optimization settings"),
    full(
        "optimization.minimize",
        "Whether emitted output is minified",
        "Output size; disabling it in production ships readable source",
        "true",
        "https://webpack.js.org/configuration/optimization/#optimizationminimize",
    ),
    with_affects(
        "optimization.splitChunks",
        "Shared chunk extraction strategy",
        "How many files are emitted and what browsers can cache",
    ),
    doc("output", "Where and how compiled bundles are written"),
    full(
        "output.filename",
        "Template for emitted bundle names",
        "Long-term caching; hash placeholders bust caches on change",
        "[name].js",
        "https://webpack.js.org/configuration/output/#outputfilename",
    ),
    full(
        "output.path",
        "Directory compiled assets are written to",
        "Deploy tooling must agree with this location",
        "./dist",
        "https://webpack.js.org/configuration/output/#outputpath",
    ),
    full(
        "output.publicPath",
        "URL prefix the runtime uses to load assets",
        "Asset loading in deployed environments",
        "auto",
        "https://webpack.js.org/configuration/output/#outputpublicpath",
    ),
    with_affects(
        "performance",
        "Size budgets and the warnings they trigger",
        "Reporting only, never the output itself",
    ),
    with_affects(
        "plugins",
        "Plugins applied to the build pipeline",
        "Anything; each plugin can alter output arbitrarily",
    ),
    doc("resolve", "How module requests map to files"),
    with_affects(
        "resolve.alias",
        "Import path aliases",
        "Which file an aliased import actually loads",
    ),
    full(
        "resolve.extensions",
        "Extensions tried for extension-less imports",
        "Which of several same-named files wins",
        "['.js', '.json', '.wasm']",
        "https://webpack.js.org/configuration/resolve/#resolveextensions",
    ),
    with_affects(
        "stats",
        "Verbosity of build output reporting",
        "What is printed, never what is built",
    ),
    full(
        "target",
        "Runtime environment compiled for",
        "Emitted runtime code and which globals are assumed",
        "web",
        "https://webpack.js.org/configuration/target/",
    ),
    doc("watch", "Rebuild automatically when files change"),
    doc(
        "watchOptions",
        "Polling, debounce, and ignore rules for watch mode",
    ),
];
