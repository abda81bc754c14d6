//! Doc text wrappers.

use std::sync::Arc;

use crate::{DocnoteConfig, MarkupLang};

/// A piece of doc text, optionally carrying its own config.
#[derive(Clone, Debug, PartialEq)]
pub struct Note {
    value: String,
    config: Option<Arc<DocnoteConfig>>,
}

impl Note {
    /// A note without a config.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            config: None,
        }
    }

    /// A note carrying `config`.
    #[must_use]
    pub fn with_config(value: impl Into<String>, config: Arc<DocnoteConfig>) -> Self {
        Self {
            value: value.into(),
            config: Some(config),
        }
    }

    /// A note written in Cleancopy.
    ///
    /// ```
    /// use docnote::{MarkupIdent, MarkupLang, Note};
    ///
    /// let note = Note::cleancopy("Some doc note here");
    /// let lang = note.config().and_then(|config| config.markup_lang());
    /// assert_eq!(lang, Some(&MarkupIdent::Known(MarkupLang::Cleancopy)));
    /// ```
    #[must_use]
    pub fn cleancopy(value: impl Into<String>) -> Self {
        let config = DocnoteConfig::from_markup_lang(MarkupLang::Cleancopy);
        Self::with_config(value, Arc::new(config))
    }

    /// The doc text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The note's config, if any.
    #[must_use]
    pub fn config(&self) -> Option<&DocnoteConfig> {
        self.config.as_deref()
    }
}
