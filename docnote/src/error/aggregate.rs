//! Aggregation container for multiple `DocnoteError` values.

use std::{error::Error, fmt, sync::Arc};

use super::DocnoteError;

/// Collection of [`DocnoteError`]s produced by one construction attempt.
///
/// # Examples
///
/// ```
/// use docnote::DocnoteError;
/// let e = DocnoteError::try_aggregate(vec![
///     DocnoteError::DuplicateGroup { name: "api".into() },
///     DocnoteError::InvalidField { field: "tags".into(), message: "not a scalar".into() },
/// ]);
/// if let Some(DocnoteError::Aggregate(agg)) = e {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<DocnoteError>>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<Arc<DocnoteError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &DocnoteError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}
