//! Extensions for mapping errors to `DocnoteResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(e.into()))`
//! patterns when converting external error types into the crate's
//! `DocnoteResult<T>` alias (`Result<T, Arc<DocnoteError>>`).
//!
//! # Examples
//!
//! ```
//! use docnote::{DocnoteResult, DocnoteResultExt};
//!
//! fn parse() -> DocnoteResult<Vec<String>> {
//!     // serde_json::Error implements Into<DocnoteError>
//!     serde_json::from_str(r#"["intro", "api"]"#).into_docnote()
//! }
//! # assert_eq!(parse().unwrap().len(), 2);
//! ```

use std::sync::Arc;

use crate::DocnoteError;

/// Result alias used throughout the crate.
pub type DocnoteResult<T> = Result<T, Arc<DocnoteError>>;

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<DocnoteError>` into a `DocnoteResult<T>`.
pub trait DocnoteResultExt<T, E> {
    /// Convert `Result<T, E>` into `DocnoteResult<T>` using `Into<DocnoteError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<DocnoteError>`.
    fn into_docnote(self) -> DocnoteResult<T>;
}

impl<T, E> DocnoteResultExt<T, E> for Result<T, E>
where
    E: Into<DocnoteError>,
{
    fn into_docnote(self) -> DocnoteResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
