//! Primary error enum for config construction.

use figment::Error as FigmentError;
use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while building a [`crate::DocnoteConfig`].
///
/// Every variant is a construction failure. Resolving a symbol chain never
/// fails, so nothing here describes a resolution error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocnoteError {
    /// A parameter had the wrong shape for its field.
    #[error("Failed to construct docnote config from params: {source}")]
    Params {
        /// Underlying deserialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// A field was present but its value is not acceptable.
    #[error("Invalid value for '{field}': {message}")]
    InvalidField {
        /// Name of the offending field.
        field: String,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// Two groups in one `child_groups` sequence share a name.
    #[error("duplicate group name '{name}' in child_groups")]
    DuplicateGroup {
        /// The repeated group name.
        name: String,
    },

    /// A figment provider could not be extracted into params.
    #[error("Failed to gather docnote configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// Multiple errors occurred while constructing one config.
    #[error("multiple docnote configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
