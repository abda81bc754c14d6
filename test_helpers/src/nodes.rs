//! Builders for config nodes and chains used across test suites.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use docnote::{DocnoteConfig, SymbolChain};
use serde_json::Value;

/// Build a config from a JSON object.
///
/// # Errors
///
/// Returns an error when the object does not describe a valid config.
pub fn node(value: Value) -> Result<DocnoteConfig> {
    DocnoteConfig::from_value(value).map_err(|err| anyhow!(err.to_string()))
}

/// Build a chain from JSON objects, nearest first.
///
/// # Errors
///
/// Returns an error when any object does not describe a valid config.
pub fn chain<I>(values: I) -> Result<SymbolChain>
where
    I: IntoIterator<Item = Value>,
{
    values
        .into_iter()
        .map(|value| node(value).map(Arc::new))
        .collect()
}
