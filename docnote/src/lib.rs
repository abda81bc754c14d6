//! Cascading documentation metadata for code symbols.
//!
//! A [`DocnoteConfig`] is attached to a symbol (see [`Attachments`]) and
//! records how that symbol's docs are written and grouped. When a
//! documentation pipeline needs the effective settings for a symbol it builds
//! the chain of configs from the symbol out to its outermost ancestor and
//! hands it to [`cascade::resolve`]: stackable fields inherit the nearest
//! explicitly set value, while `parent_group_name` and `child_groups` only
//! ever apply to the node that declares them.

mod attach;
pub mod cascade;
mod config;
mod error;
mod group;
mod markup;
mod note;
mod result_ext;

pub use attach::{Attachments, DOCNOTE_CONFIG_ATTR, SymbolPath};
pub use cascade::{EffectiveConfig, SymbolChain};
pub use config::{
    CONFIG_FILE_NAME, DocnoteConfig, DocnoteConfigBuilder, DocnoteConfigParams, ENV_PREFIX,
    Stackables, schema,
};
pub use error::{AggregatedErrors, DocnoteError};
pub use group::{ChildGroups, DocnoteGroup, OrderedChildren};
pub use markup::{MarkupIdent, MarkupLang, UnknownMarkupLang};
pub use note::Note;
pub use result_ext::{DocnoteResult, DocnoteResultExt};
