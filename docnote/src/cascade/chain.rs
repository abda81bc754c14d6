//! Owned symbol chains.

use std::sync::Arc;

use super::{EffectiveConfig, resolve, resolve_effective};
use crate::{DocnoteConfig, Stackables};

/// Config nodes from a symbol out to its outermost ancestor.
///
/// The chain shares the nodes it holds; building one never copies or
/// changes a config.
#[derive(Clone, Debug, Default)]
pub struct SymbolChain {
    nodes: Vec<Arc<DocnoteConfig>>,
}

impl SymbolChain {
    /// An empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// A chain whose first node is `own`.
    #[must_use]
    pub fn for_symbol(own: Arc<DocnoteConfig>) -> Self {
        Self { nodes: vec![own] }
    }

    /// Append the next enclosing ancestor.
    pub fn push_ancestor(&mut self, node: Arc<DocnoteConfig>) {
        self.nodes.push(node);
    }

    /// Builder-style [`Self::push_ancestor`].
    #[must_use]
    pub fn with_ancestor(mut self, node: Arc<DocnoteConfig>) -> Self {
        self.push_ancestor(node);
        self
    }

    /// The symbol's own node.
    #[must_use]
    pub fn own_node(&self) -> Option<&DocnoteConfig> {
        self.nodes.first().map(Arc::as_ref)
    }

    /// Number of nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the chain holds no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nearest first.
    pub fn iter(&self) -> impl Iterator<Item = &DocnoteConfig> {
        self.nodes.iter().map(Arc::as_ref)
    }

    /// See [`super::resolve`].
    #[must_use]
    pub fn resolve(&self) -> Stackables {
        resolve(self.iter())
    }

    /// See [`super::resolve_effective`].
    #[must_use]
    pub fn resolve_effective(&self) -> EffectiveConfig {
        resolve_effective(self.iter())
    }
}

impl FromIterator<Arc<DocnoteConfig>> for SymbolChain {
    fn from_iter<I: IntoIterator<Item = Arc<DocnoteConfig>>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
