//! The per-symbol configuration record.
//!
//! A [`DocnoteConfig`] is built once, when it is attached to a symbol, and
//! never changes afterwards. Fields left out of construction stay unset,
//! which is distinct from any falsy value: `enforce_known_lang = false` is
//! set, omitting it is not.

mod load;
mod params;
pub mod schema;
mod stackables;

use std::{collections::BTreeMap, sync::Arc};

use serde::Serialize;
use serde_json::Value;

use crate::{
    ChildGroups, DocnoteError, DocnoteGroup, DocnoteResult, DocnoteResultExt, MarkupIdent,
};

pub use load::{CONFIG_FILE_NAME, ENV_PREFIX};
pub use params::DocnoteConfigParams;
pub use stackables::Stackables;

/// Documentation metadata attached to one symbol.
///
/// `enforce_known_lang`, `markup_lang` and any extra scalar field are
/// stackable: descendants that leave them unset inherit them through
/// [`crate::cascade::resolve`]. `parent_group_name` and `child_groups` apply
/// only to this node.
///
/// ```
/// use docnote::{DocnoteConfig, MarkupLang};
///
/// let config = DocnoteConfig::builder()
///     .markup_lang(MarkupLang::Markdown)
///     .parent_group_name("api")
///     .build()?;
/// let stackables = config.get_stackables();
/// assert_eq!(stackables.len(), 1);
/// assert!(stackables.contains("markup_lang"));
/// # Ok::<_, std::sync::Arc<docnote::DocnoteError>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DocnoteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    enforce_known_lang: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    markup_lang: Option<MarkupIdent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    child_groups: Option<ChildGroups>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl DocnoteConfig {
    /// A config with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A config that sets only `markup_lang`.
    #[must_use]
    pub fn from_markup_lang(lang: impl Into<MarkupIdent>) -> Self {
        Self {
            markup_lang: Some(lang.into()),
            ..Self::default()
        }
    }

    /// Start building a config field by field.
    #[must_use]
    pub fn builder() -> DocnoteConfigBuilder {
        DocnoteConfigBuilder::default()
    }

    /// Build a config from `params`.
    ///
    /// Either the whole node is built or nothing is: every problem found is
    /// reported together.
    ///
    /// # Errors
    ///
    /// Returns [`DocnoteError::DuplicateGroup`] when two child groups share a
    /// name and [`DocnoteError::InvalidField`] when an extra field is not a
    /// scalar or shadows a declared field. Several failures are reported as
    /// [`DocnoteError::Aggregate`].
    pub fn from_params(params: DocnoteConfigParams) -> DocnoteResult<Self> {
        let DocnoteConfigParams {
            enforce_known_lang,
            markup_lang,
            parent_group_name,
            child_groups,
            extra,
        } = params;

        let mut errors: Vec<Arc<DocnoteError>> = Vec::new();
        let groups = match child_groups.map(ChildGroups::new).transpose() {
            Ok(groups) => groups,
            Err(err) => {
                errors.push(err);
                None
            }
        };
        let scalars = validate_extra(extra, &mut errors);

        if let Some(err) = DocnoteError::try_aggregate(errors) {
            return Err(Arc::new(err));
        }
        Ok(Self {
            enforce_known_lang,
            markup_lang,
            parent_group_name,
            child_groups: groups,
            extra: scalars,
        })
    }

    /// Build a config from a dynamic JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`DocnoteError::Params`] when `value` is not an object or a
    /// field has the wrong shape (for example a string `child_groups`), plus
    /// every error documented on [`Self::from_params`].
    pub fn from_value(value: Value) -> DocnoteResult<Self> {
        let params: DocnoteConfigParams = serde_json::from_value(value).into_docnote()?;
        Self::from_params(params)
    }

    /// Whether renderers must reject unknown markup languages.
    #[must_use]
    pub const fn enforce_known_lang(&self) -> Option<bool> {
        self.enforce_known_lang
    }

    /// Markup dialect of the associated doc text.
    #[must_use]
    pub const fn markup_lang(&self) -> Option<&MarkupIdent> {
        self.markup_lang.as_ref()
    }

    /// Group this symbol belongs to among its siblings.
    #[must_use]
    pub fn parent_group_name(&self) -> Option<&str> {
        self.parent_group_name.as_deref()
    }

    /// Ordered groups for this symbol's direct children.
    #[must_use]
    pub const fn child_groups(&self) -> Option<&ChildGroups> {
        self.child_groups.as_ref()
    }

    /// Value of an extra field.
    #[must_use]
    pub fn extra_field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Every explicitly set field, stackable or not, as JSON values.
    ///
    /// Declared fields come first in schema order, followed by extras in
    /// name order. Groups are listed by name.
    #[must_use]
    pub fn explicit_fields(&self) -> Vec<(&str, Value)> {
        let declared = [
            self.enforce_known_lang.map(Value::Bool),
            self.markup_lang
                .as_ref()
                .map(|lang| Value::String(lang.as_str().to_owned())),
            self.parent_group_name.clone().map(Value::String),
            self.child_groups.as_ref().map(|groups| {
                groups
                    .names()
                    .map(|name| Value::String(name.to_owned()))
                    .collect()
            }),
        ];
        let mut fields: Vec<(&str, Value)> = schema::DECLARED_FIELDS
            .into_iter()
            .zip(declared)
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect();
        fields.extend(
            self.extra
                .iter()
                .map(|(name, value)| (name.as_str(), value.clone())),
        );
        fields
    }

    /// The stackable fields explicitly set on this node.
    ///
    /// Unset and non-stackable fields are left out entirely.
    #[must_use]
    pub fn get_stackables(&self) -> Stackables {
        self.explicit_fields()
            .into_iter()
            .filter(|(name, _)| schema::is_stackable(name))
            .map(|(name, value)| (name.to_owned(), value))
            .collect()
    }

    /// Copy the node back into the params it could be rebuilt from.
    #[must_use]
    pub fn to_params(&self) -> DocnoteConfigParams {
        DocnoteConfigParams {
            enforce_known_lang: self.enforce_known_lang,
            markup_lang: self.markup_lang.clone(),
            parent_group_name: self.parent_group_name.clone(),
            child_groups: self
                .child_groups
                .as_ref()
                .map(|groups| groups.iter().cloned().collect()),
            extra: self.extra.clone(),
        }
    }
}

fn validate_extra(
    extra: BTreeMap<String, Value>,
    errors: &mut Vec<Arc<DocnoteError>>,
) -> BTreeMap<String, Value> {
    extra
        .into_iter()
        .filter(|(name, value)| {
            if schema::is_declared(name) {
                errors.push(Arc::new(DocnoteError::invalid_field(
                    name.as_str(),
                    "declared fields cannot be supplied as extras",
                )));
                return false;
            }
            match value {
                Value::Null => false,
                Value::Bool(_) | Value::Number(_) | Value::String(_) => true,
                Value::Array(_) | Value::Object(_) => {
                    errors.push(Arc::new(DocnoteError::invalid_field(
                        name.as_str(),
                        "extra fields must be booleans, numbers or strings",
                    )));
                    false
                }
            }
        })
        .collect()
}

/// Builder for [`DocnoteConfig`].
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct DocnoteConfigBuilder {
    params: DocnoteConfigParams,
}

impl DocnoteConfigBuilder {
    /// Set `enforce_known_lang`.
    pub fn enforce_known_lang(mut self, enforce: bool) -> Self {
        self.params.enforce_known_lang = Some(enforce);
        self
    }

    /// Set `markup_lang`.
    pub fn markup_lang(mut self, lang: impl Into<MarkupIdent>) -> Self {
        self.params.markup_lang = Some(lang.into());
        self
    }

    /// Set `parent_group_name`.
    pub fn parent_group_name(mut self, name: impl Into<String>) -> Self {
        self.params.parent_group_name = Some(name.into());
        self
    }

    /// Set `child_groups`, in the order given.
    pub fn child_groups(mut self, groups: impl IntoIterator<Item = DocnoteGroup>) -> Self {
        self.params.child_groups = Some(groups.into_iter().collect());
        self
    }

    /// Set an extra stackable field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.extra.insert(name.into(), value.into());
        self
    }

    /// Finish the config.
    ///
    /// # Errors
    ///
    /// See [`DocnoteConfig::from_params`].
    pub fn build(self) -> DocnoteResult<DocnoteConfig> {
        DocnoteConfig::from_params(self.params)
    }
}
