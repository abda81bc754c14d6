//! The cascade resolver.
//!
//! A symbol chain lists config nodes from a symbol (index 0) out to its
//! outermost ancestor. For every stackable field the nearest node that sets
//! it wins; fields no node sets stay absent. Non-stackable fields are never
//! taken from ancestors.
//!
//! # Example
//!
//! ```rust
//! use docnote::{DocnoteConfig, cascade};
//!
//! let method = DocnoteConfig::builder().markup_lang("markdown").build()?;
//! let module = DocnoteConfig::builder()
//!     .markup_lang("rst")
//!     .enforce_known_lang(true)
//!     .build()?;
//!
//! let effective = cascade::resolve([&method, &module]);
//! assert_eq!(effective.markup_lang().map(|l| l.to_string()).as_deref(), Some("markdown"));
//! assert_eq!(effective.enforce_known_lang(), Some(true));
//! # Ok::<_, std::sync::Arc<docnote::DocnoteError>>(())
//! ```

mod chain;

use std::{borrow::Borrow, collections::BTreeMap};

use crate::{ChildGroups, DocnoteConfig, Stackables};

pub use chain::SymbolChain;

/// Compute the effective stackable fields for the first node of `chain`.
///
/// `chain` is ordered nearest first. An empty chain yields an empty mapping.
#[must_use]
pub fn resolve<I>(chain: I) -> Stackables
where
    I: IntoIterator,
    I::Item: Borrow<DocnoteConfig>,
{
    resolve_effective(chain).stackables
}

/// Resolve `chain` and keep the provenance of each field alongside the own
/// node's non-stackable fields.
#[must_use]
pub fn resolve_effective<I>(chain: I) -> EffectiveConfig
where
    I: IntoIterator,
    I::Item: Borrow<DocnoteConfig>,
{
    let mut effective = EffectiveConfig::default();
    for (depth, item) in chain.into_iter().enumerate() {
        let node: &DocnoteConfig = item.borrow();
        if depth == 0 {
            effective.parent_group_name = node.parent_group_name().map(str::to_owned);
            effective.child_groups = node.child_groups().cloned();
        }
        for (field, value) in &node.get_stackables() {
            if effective.stackables.insert_if_absent(field, value) {
                tracing::trace!(field = %field, depth, "resolved stackable field");
                effective.origins.insert(field.clone(), depth);
            }
        }
    }
    effective
}

/// Effective configuration of one symbol.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectiveConfig {
    stackables: Stackables,
    origins: BTreeMap<String, usize>,
    parent_group_name: Option<String>,
    child_groups: Option<ChildGroups>,
}

impl EffectiveConfig {
    /// The resolved stackable fields.
    #[must_use]
    pub const fn stackables(&self) -> &Stackables {
        &self.stackables
    }

    /// Consume the config, keeping only the resolved stackable fields.
    #[must_use]
    pub fn into_stackables(self) -> Stackables {
        self.stackables
    }

    /// Chain index of the node that supplied `field`; `0` means the symbol
    /// set it itself.
    #[must_use]
    pub fn origin(&self, field: &str) -> Option<usize> {
        self.origins.get(field).copied()
    }

    /// Whether `field` was inherited from an ancestor rather than set locally.
    #[must_use]
    pub fn is_inherited(&self, field: &str) -> bool {
        self.origin(field).is_some_and(|depth| depth > 0)
    }

    /// The symbol's own `parent_group_name`.
    #[must_use]
    pub fn parent_group_name(&self) -> Option<&str> {
        self.parent_group_name.as_deref()
    }

    /// The symbol's own `child_groups`.
    #[must_use]
    pub const fn child_groups(&self) -> Option<&ChildGroups> {
        self.child_groups.as_ref()
    }
}
