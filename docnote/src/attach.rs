//! Attaching configs to symbols.
//!
//! Symbols are identified by dotted paths such as `pkg.module.Class.method`.
//! [`Attachments`] plays the role of the decorator: it stores one shared
//! config per symbol under [`DOCNOTE_CONFIG_ATTR`] and hands back exactly the
//! object that was attached.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{DocnoteConfig, cascade::SymbolChain};

/// Well-known attribute key under which a symbol's config is stored.
pub const DOCNOTE_CONFIG_ATTR: &str = "_docnote_config";

/// Dotted path naming a symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolPath(String);

impl SymbolPath {
    /// Wrap a dotted path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The enclosing symbol, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| Self(parent.to_owned()))
    }

    /// This symbol followed by each enclosing symbol, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self.clone()), Self::parent)
    }
}

impl fmt::Display for SymbolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SymbolPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for SymbolPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Symbol to config associations.
#[derive(Clone, Debug, Default)]
pub struct Attachments {
    configs: HashMap<SymbolPath, Arc<DocnoteConfig>>,
}

impl Attachments {
    /// An empty set of attachments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `config` to `symbol` and return the symbol unchanged.
    ///
    /// Attaching again replaces the previous config.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use docnote::{Attachments, DocnoteConfig, SymbolPath};
    ///
    /// let mut attachments = Attachments::new();
    /// let config = Arc::new(DocnoteConfig::new());
    /// let symbol = attachments.docnote("pkg.Widget", Arc::clone(&config));
    /// assert_eq!(symbol, SymbolPath::from("pkg.Widget"));
    /// assert!(Arc::ptr_eq(attachments.config_for(&symbol).unwrap(), &config));
    /// ```
    pub fn docnote(
        &mut self,
        symbol: impl Into<SymbolPath>,
        config: Arc<DocnoteConfig>,
    ) -> SymbolPath {
        let path = symbol.into();
        if self.configs.insert(path.clone(), config).is_some() {
            tracing::debug!(
                symbol = %path,
                attr = DOCNOTE_CONFIG_ATTR,
                "replaced attached docnote config"
            );
        }
        path
    }

    /// The config attached to `symbol`, if any.
    #[must_use]
    pub fn config_for(&self, symbol: &SymbolPath) -> Option<&Arc<DocnoteConfig>> {
        self.configs.get(symbol)
    }

    /// Whether `symbol` has a config attached.
    #[must_use]
    pub fn is_attached(&self, symbol: &SymbolPath) -> bool {
        self.configs.contains_key(symbol)
    }

    /// Remove and return the config attached to `symbol`.
    pub fn detach(&mut self, symbol: &SymbolPath) -> Option<Arc<DocnoteConfig>> {
        self.configs.remove(symbol)
    }

    /// Number of attached symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Whether nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Collect the configs attached to `symbol` and its ancestors.
    ///
    /// Symbols without an attachment are skipped, so index 0 is the nearest
    /// configured symbol.
    #[must_use]
    pub fn chain_for(&self, symbol: &SymbolPath) -> SymbolChain {
        symbol
            .ancestors()
            .filter_map(|path| self.configs.get(&path).cloned())
            .collect()
    }
}
