//! Field classification for [`super::DocnoteConfig`].
//!
//! Every field is stackable unless it is named in [`NON_STACKABLE_FIELDS`].
//! The classification belongs to the schema, so it is the same for every
//! node and for any extra field a caller supplies.

/// Renderers must reject unknown markup languages when this is `true`.
pub const ENFORCE_KNOWN_LANG: &str = "enforce_known_lang";
/// Markup dialect of the associated doc text.
pub const MARKUP_LANG: &str = "markup_lang";
/// Group the symbol belongs to among its siblings.
pub const PARENT_GROUP_NAME: &str = "parent_group_name";
/// Ordered groups for the symbol's direct children.
pub const CHILD_GROUPS: &str = "child_groups";

/// Fields with a typed slot on the config.
pub const DECLARED_FIELDS: [&str; 4] =
    [ENFORCE_KNOWN_LANG, MARKUP_LANG, PARENT_GROUP_NAME, CHILD_GROUPS];

/// Fields that apply only to the node they are set on.
pub const NON_STACKABLE_FIELDS: [&str; 2] = [PARENT_GROUP_NAME, CHILD_GROUPS];

/// Whether `field` cascades to descendants that leave it unset.
#[must_use]
pub fn is_stackable(field: &str) -> bool {
    !NON_STACKABLE_FIELDS.contains(&field)
}

/// Whether `field` has a typed slot rather than living in the extras table.
#[must_use]
pub fn is_declared(field: &str) -> bool {
    DECLARED_FIELDS.contains(&field)
}
