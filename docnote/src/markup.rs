//! Markup-language identifiers.
//!
//! The registry of known dialects is consumed by renderers that honour
//! `enforce_known_lang`. Nothing in this crate validates against it.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Markup dialects known to docnote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum MarkupLang {
    /// Cleancopy, the default dialect for [`crate::Note::cleancopy`].
    Cleancopy,
    /// `CommonMark` flavoured Markdown.
    Markdown,
    /// reStructuredText.
    Rst,
    /// Unformatted text.
    Plaintext,
}

impl MarkupLang {
    /// Every known dialect, in declaration order.
    pub const ALL: [Self; 4] = [Self::Cleancopy, Self::Markdown, Self::Rst, Self::Plaintext];

    /// Canonical identifier for the dialect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cleancopy => "cleancopy",
            Self::Markdown => "markdown",
            Self::Rst => "rst",
            Self::Plaintext => "plaintext",
        }
    }
}

impl fmt::Display for MarkupLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`MarkupLang`] identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown markup language '{0}'")]
pub struct UnknownMarkupLang(pub String);

impl FromStr for MarkupLang {
    type Err = UnknownMarkupLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMarkupLang(s.to_owned()))
    }
}

/// The value of a `markup_lang` field: a known dialect or a free-form name.
///
/// Only the canonical spelling of a dialect maps to [`MarkupIdent::Known`].
/// Every other name, including a differently cased dialect, is kept verbatim
/// so a renderer can decide, based on `enforce_known_lang`, whether to
/// reject it.
///
/// ```
/// use docnote::{MarkupIdent, MarkupLang};
///
/// assert_eq!(MarkupIdent::from("markdown"), MarkupIdent::Known(MarkupLang::Markdown));
/// assert_eq!(MarkupIdent::from("Markdown").as_str(), "Markdown");
/// assert!(!MarkupIdent::from("asciidoc").is_known());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkupIdent {
    /// A dialect from the registry.
    Known(MarkupLang),
    /// Any other identifier.
    Other(String),
}

impl MarkupIdent {
    /// The identifier as written in configuration.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(lang) => lang.as_str(),
            Self::Other(name) => name,
        }
    }

    /// Whether the identifier names a registered dialect.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<MarkupLang> for MarkupIdent {
    fn from(lang: MarkupLang) -> Self {
        Self::Known(lang)
    }
}

impl From<String> for MarkupIdent {
    fn from(name: String) -> Self {
        MarkupLang::ALL
            .into_iter()
            .find(|lang| lang.as_str() == name)
            .map_or_else(|| Self::Other(name), Self::Known)
    }
}

impl From<&str> for MarkupIdent {
    fn from(name: &str) -> Self {
        Self::from(name.to_owned())
    }
}

impl From<MarkupIdent> for String {
    fn from(ident: MarkupIdent) -> Self {
        match ident {
            MarkupIdent::Known(lang) => lang.as_str().to_owned(),
            MarkupIdent::Other(name) => name,
        }
    }
}

impl fmt::Display for MarkupIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use std::sync::Arc;

    use serde_json::json;

    use super::{MarkupIdent, MarkupLang};
    use crate::{DocnoteConfig, DocnoteError};

    #[rstest]
    #[case("cleancopy", MarkupLang::Cleancopy)]
    #[case("Markdown", MarkupLang::Markdown)]
    #[case("RST", MarkupLang::Rst)]
    #[case("plaintext", MarkupLang::Plaintext)]
    fn parses_known_dialects(#[case] input: &str, #[case] expected: MarkupLang) {
        assert_eq!(input.parse::<MarkupLang>(), Ok(expected));
    }

    #[rstest]
    fn unknown_dialect_is_kept_verbatim() {
        let ident = MarkupIdent::from("AsciiDoc");
        assert_eq!(ident, MarkupIdent::Other("AsciiDoc".to_owned()));
        assert_eq!(ident.as_str(), "AsciiDoc");
        assert!(!ident.is_known());
    }

    #[rstest]
    #[case("markdown", true)]
    #[case("Markdown", false)]
    #[case("RST", false)]
    fn only_canonical_spelling_is_known(#[case] input: &str, #[case] known: bool) {
        let ident = MarkupIdent::from(input);
        assert_eq!(ident.is_known(), known);
        assert_eq!(ident.as_str(), input);
    }

    #[rstest]
    #[case("Markdown")]
    #[case("foo")]
    #[case("rst")]
    fn markup_lang_round_trips_through_stackables(
        #[case] input: &str,
    ) -> Result<(), Arc<DocnoteError>> {
        let config = DocnoteConfig::from_value(json!({ "markup_lang": input }))?;
        assert_eq!(
            config.get_stackables().get("markup_lang"),
            Some(&json!(input))
        );
        Ok(())
    }
}
