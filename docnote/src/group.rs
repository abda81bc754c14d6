//! Named groups and the ordering model for a symbol's documented children.

use std::{collections::HashSet, fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{DocnoteError, DocnoteResult};

/// A named bucket for documented children.
///
/// Groups compare by identity. Cloning a group yields the same group;
/// two groups created separately are distinct even when their names match.
///
/// ```
/// use docnote::DocnoteGroup;
///
/// let api = DocnoteGroup::new("api");
/// assert_eq!(api, api.clone());
/// assert_ne!(api, DocnoteGroup::new("api"));
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DocnoteGroup {
    name: Arc<str>,
}

impl DocnoteGroup {
    /// Create a new, distinct group.
    ///
    /// The name is always copied into a fresh allocation, so no two calls
    /// return the same group.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
        }
    }

    /// The group's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `self` and `other` are the same group.
    #[must_use]
    pub fn same_group(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl PartialEq for DocnoteGroup {
    fn eq(&self, other: &Self) -> bool {
        self.same_group(other)
    }
}

impl Eq for DocnoteGroup {}

impl fmt::Debug for DocnoteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DocnoteGroup").field(&self.name()).finish()
    }
}

impl From<String> for DocnoteGroup {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<DocnoteGroup> for String {
    fn from(group: DocnoteGroup) -> Self {
        group.name().to_owned()
    }
}

/// The complete, ordered set of groups a node's direct children may use.
///
/// Order is exactly the declaration order; nothing is sorted, merged or
/// renamed. Names are unique within one sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChildGroups(Vec<DocnoteGroup>);

impl ChildGroups {
    /// Build a sequence, rejecting repeated names.
    ///
    /// # Errors
    ///
    /// Returns [`DocnoteError::DuplicateGroup`] for the first name that
    /// appears twice, or an aggregate when several names repeat.
    pub fn new(groups: impl IntoIterator<Item = DocnoteGroup>) -> DocnoteResult<Self> {
        let groups: Vec<DocnoteGroup> = groups.into_iter().collect();
        let mut seen = HashSet::with_capacity(groups.len());
        let mut reported = HashSet::new();
        let duplicates: Vec<DocnoteError> = groups
            .iter()
            .map(DocnoteGroup::name)
            .filter(|name| !seen.insert(*name) && reported.insert(*name))
            .map(|name| DocnoteError::DuplicateGroup {
                name: name.to_owned(),
            })
            .collect();
        match DocnoteError::try_aggregate(duplicates) {
            Some(err) => Err(Arc::new(err)),
            None => Ok(Self(groups)),
        }
    }

    /// Number of declared groups.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no groups are declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the groups in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocnoteGroup> {
        self.0.iter()
    }

    /// Borrow the groups as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[DocnoteGroup] {
        &self.0
    }

    /// Group names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(DocnoteGroup::name)
    }

    /// Position of the group called `name`.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|group| group.name() == name)
    }

    /// The group called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DocnoteGroup> {
        self.0.iter().find(|group| group.name() == name)
    }

    /// Arrange children by the position of their assigned group.
    ///
    /// Each child is paired with its `parent_group_name`. Children keep their
    /// relative order within a group. Children without a name, or naming a
    /// group that is not declared here, are returned in
    /// [`OrderedChildren::unmatched`] for the caller to report.
    pub fn order_children<'g, T>(
        &self,
        children: impl IntoIterator<Item = (Option<&'g str>, T)>,
    ) -> OrderedChildren<'g, T> {
        let mut placed = Vec::new();
        let mut unmatched = Vec::new();
        for (group_name, child) in children {
            match group_name.and_then(|name| self.position_of(name)) {
                Some(position) => placed.push((position, child)),
                None => unmatched.push((group_name, child)),
            }
        }
        placed.sort_by_key(|(position, _)| *position);
        OrderedChildren {
            ordered: placed
                .into_iter()
                .filter_map(|(position, child)| {
                    self.0.get(position).map(|group| (group.clone(), child))
                })
                .collect(),
            unmatched,
        }
    }
}

impl<'a> IntoIterator for &'a ChildGroups {
    type Item = &'a DocnoteGroup;
    type IntoIter = std::slice::Iter<'a, DocnoteGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Children arranged by [`ChildGroups::order_children`].
#[derive(Debug)]
pub struct OrderedChildren<'g, T> {
    /// Children with a declared group, in group order.
    pub ordered: Vec<(DocnoteGroup, T)>,
    /// Children whose group name is missing or undeclared, in input order.
    pub unmatched: Vec<(Option<&'g str>, T)>,
}
