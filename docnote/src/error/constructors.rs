//! Constructors and aggregation helpers for `DocnoteError`.

use std::sync::Arc;

use figment::Error as FigmentError;

use super::{AggregatedErrors, DocnoteError};

impl DocnoteError {
    /// Tries to build a [`DocnoteError`] from an iterator of errors.
    ///
    /// Returns `None` when the iterator is empty, the error itself when a
    /// single uniquely owned error is supplied, and [`Self::Aggregate`]
    /// otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(arcs))));
        }
        let last = arcs.pop()?;
        Some(match Arc::try_unwrap(last) {
            Ok(err) => err,
            Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
        })
    }

    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use docnote::DocnoteError;
    /// let fe = figment::Error::from("boom");
    /// let e = DocnoteError::gathering(fe);
    /// assert!(matches!(e, DocnoteError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Construct an [`Self::InvalidField`] error.
    #[must_use]
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DocnoteError {
    fn from(source: serde_json::Error) -> Self {
        Self::Params { source }
    }
}

impl From<FigmentError> for DocnoteError {
    fn from(e: FigmentError) -> Self {
        Self::gathering(e)
    }
}
