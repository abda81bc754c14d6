//! Plain input record for building a [`super::DocnoteConfig`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DocnoteGroup, MarkupIdent};

/// Every option accepted by [`super::DocnoteConfig::from_params`].
///
/// Fields mirror the config one-for-one; leaving a field as `None` keeps it
/// unset on the built node. Unrecognised keys land in [`Self::extra`] and
/// become additional stackable fields.
///
/// ```
/// use docnote::{DocnoteConfig, DocnoteConfigParams};
///
/// let params = DocnoteConfigParams {
///     enforce_known_lang: Some(false),
///     ..DocnoteConfigParams::default()
/// };
/// let config = DocnoteConfig::from_params(params)?;
/// assert_eq!(config.enforce_known_lang(), Some(false));
/// # Ok::<_, std::sync::Arc<docnote::DocnoteError>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocnoteConfigParams {
    /// See [`super::DocnoteConfig::enforce_known_lang`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_known_lang: Option<bool>,
    /// See [`super::DocnoteConfig::markup_lang`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup_lang: Option<MarkupIdent>,
    /// See [`super::DocnoteConfig::parent_group_name`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_group_name: Option<String>,
    /// See [`super::DocnoteConfig::child_groups`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_groups: Option<Vec<DocnoteGroup>>,
    /// Additional fields, stackable unless the schema says otherwise.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DocnoteConfigParams {
    /// Names of the fields that are set, declared fields first.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        let declared = [
            self.enforce_known_lang.is_some(),
            self.markup_lang.is_some(),
            self.parent_group_name.is_some(),
            self.child_groups.is_some(),
        ];
        let mut names: Vec<&str> = super::schema::DECLARED_FIELDS
            .into_iter()
            .zip(declared)
            .filter_map(|(name, set)| set.then_some(name))
            .collect();
        names.extend(self.extra.keys().map(String::as_str));
        names
    }
}
