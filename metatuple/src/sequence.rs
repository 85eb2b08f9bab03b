use std::iter::FromIterator;
use std::{slice, vec};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::list::{EachEntry, EachRestore, NonEmpty};
use crate::tuple::Tuple;
use crate::{EntryKind, ShapeError, TupleMetadata};

/// A metadata entry whose kind is only known at runtime: either a leaf item `L` or a group `G`.
///
/// With the `serde` feature, this is (de)serialized as `{"kind": "leaf", "value": ...}` or
/// `{"kind": "group", "value": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        tag = "kind",
        content = "value",
        rename_all = "snake_case"
    )
)]
pub enum AnyEntry<L, G> {
    /// A single, atomic metadata item.
    Leaf(L),
    /// A pre-formed collection of metadata.
    Group(G),
}

impl<L, G> AnyEntry<L, G> {
    /// The kind of this entry.
    pub fn kind(&self) -> EntryKind {
        match self {
            AnyEntry::Leaf(_) => EntryKind::Leaf,
            AnyEntry::Group(_) => EntryKind::Group,
        }
    }

    /// Is this a leaf item?
    pub fn is_leaf(&self) -> bool {
        matches!(self, AnyEntry::Leaf(_))
    }

    /// Is this a group?
    pub fn is_group(&self) -> bool {
        matches!(self, AnyEntry::Group(_))
    }

    /// Borrow the leaf item, if this is one.
    pub fn as_leaf(&self) -> Option<&L> {
        match self {
            AnyEntry::Leaf(leaf) => Some(leaf),
            AnyEntry::Group(_) => None,
        }
    }

    /// Borrow the group, if this is one.
    pub fn as_group(&self) -> Option<&G> {
        match self {
            AnyEntry::Group(group) => Some(group),
            AnyEntry::Leaf(_) => None,
        }
    }

    /// Take the leaf item, if this is one.
    pub fn into_leaf(self) -> Option<L> {
        match self {
            AnyEntry::Leaf(leaf) => Some(leaf),
            AnyEntry::Group(_) => None,
        }
    }

    /// Take the group, if this is one.
    pub fn into_group(self) -> Option<G> {
        match self {
            AnyEntry::Group(group) => Some(group),
            AnyEntry::Leaf(_) => None,
        }
    }

    /// Transform a leaf item, leaving a group untouched.
    pub fn map_leaf<M>(self, f: impl FnOnce(L) -> M) -> AnyEntry<M, G> {
        match self {
            AnyEntry::Leaf(leaf) => AnyEntry::Leaf(f(leaf)),
            AnyEntry::Group(group) => AnyEntry::Group(group),
        }
    }

    /// Transform a group, leaving a leaf item untouched.
    pub fn map_group<H>(self, f: impl FnOnce(G) -> H) -> AnyEntry<L, H> {
        match self {
            AnyEntry::Leaf(leaf) => AnyEntry::Leaf(leaf),
            AnyEntry::Group(group) => AnyEntry::Group(f(group)),
        }
    }
}

/// An ordered sequence of [`AnyEntry`]s: the runtime counterpart of a
/// [`TupleMetadata`].
///
/// A sequence is immutable once built, like its typed counterpart, but its length and kinds are
/// only known at runtime. Any length is representable, including zero.
///
/// # Examples
///
/// ```
/// use metatuple::prelude::*;
///
/// let sequence: Sequence<&str, Vec<&str>> = vec![
///     AnyEntry::Leaf("summary"),
///     AnyEntry::Group(vec!["users", "admin"]),
/// ]
/// .into();
///
/// assert_eq!(sequence.kinds(), [EntryKind::Leaf, EntryKind::Group]);
///
/// let meta: TupleMetadata<(Leaf<&str>, Group<Vec<&str>>)> = sequence.try_into_metadata()?;
/// assert_eq!(meta.into_inner(), (Leaf("summary"), Group(vec!["users", "admin"])));
/// # Ok::<(), ShapeError>(())
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = "L: std::fmt::Debug, G: std::fmt::Debug"),
    Clone(bound = "L: Clone, G: Clone"),
    PartialEq(bound = "L: PartialEq, G: PartialEq"),
    Eq(bound = "L: Eq, G: Eq"),
    Hash(bound = "L: std::hash::Hash, G: std::hash::Hash"),
    Default(bound = "")
)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct Sequence<L, G> {
    entries: Vec<AnyEntry<L, G>>,
}

/// Compose an ordered run of runtime entries into a [`Sequence`].
///
/// This is the runtime counterpart of [`compose`](fn@crate::compose): one function for any number
/// of entries and any mix of kinds.
///
/// ```
/// use metatuple::prelude::*;
///
/// let sequence = compose_all((0..3).map(|i| {
///     if i == 1 {
///         AnyEntry::Group(vec![i])
///     } else {
///         AnyEntry::Leaf(i)
///     }
/// }));
/// assert_eq!(sequence.kinds(), [EntryKind::Leaf, EntryKind::Group, EntryKind::Leaf]);
/// ```
pub fn compose_all<L, G, I>(entries: I) -> Sequence<L, G>
where
    I: IntoIterator<Item = AnyEntry<L, G>>,
{
    entries.into_iter().collect()
}

impl<L, G> Sequence<L, G> {
    /// Wrap a vector of entries, keeping their order.
    pub fn new(entries: Vec<AnyEntry<L, G>>) -> Self {
        Sequence { entries }
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Are there no entries?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the entry at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&AnyEntry<L, G>> {
        self.entries.get(index)
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> slice::Iter<'_, AnyEntry<L, G>> {
        self.entries.iter()
    }

    /// The kind of each entry, in order.
    pub fn kinds(&self) -> Vec<EntryKind> {
        self.entries.iter().map(AnyEntry::kind).collect()
    }

    /// Take the entries out, in order.
    pub fn into_entries(self) -> Vec<AnyEntry<L, G>> {
        self.entries
    }

    /// Recover a typed [`TupleMetadata`] from this sequence.
    ///
    /// The sequence must have exactly as many entries as the tuple `T`, and the entry at each
    /// position must be of the kind `T` has there. Leaf items are converted from `L` and groups
    /// from `G` into the content of the corresponding entry type.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ArityMismatch`] if the lengths differ, or
    /// [`ShapeError::KindMismatch`] naming the first position whose kind differs.
    ///
    /// ```
    /// use metatuple::prelude::*;
    ///
    /// let sequence = compose_all(vec![AnyEntry::<u8, u8>::Leaf(1), AnyEntry::Leaf(2)]);
    ///
    /// let wrong_kind = sequence.clone().try_into_metadata::<(Leaf<u8>, Group<u8>)>();
    /// assert_eq!(
    ///     wrong_kind,
    ///     Err(ShapeError::KindMismatch {
    ///         position: 1,
    ///         expected: EntryKind::Group,
    ///         found: EntryKind::Leaf,
    ///     }),
    /// );
    ///
    /// let wrong_arity = sequence.try_into_metadata::<(Leaf<u8>,)>();
    /// assert_eq!(wrong_arity, Err(ShapeError::ArityMismatch { expected: 1, found: 2 }));
    /// ```
    pub fn try_into_metadata<T>(self) -> Result<TupleMetadata<T>, ShapeError>
    where
        T: Tuple,
        T::AsList: EachEntry + NonEmpty + EachRestore<L, G>,
    {
        let expected = TupleMetadata::<T>::LEN;
        let found = self.entries.len();
        if found != expected {
            tracing::debug!(expected, found, "sequence has the wrong number of entries");
            return Err(ShapeError::ArityMismatch { expected, found });
        }

        let mut entries = self.entries.into_iter();
        match <T::AsList as EachRestore<L, G>>::restore_from(&mut entries, 0) {
            Ok(list) => {
                tracing::trace!(len = expected, "restored metadata tuple from a sequence");
                Ok(TupleMetadata::from_list(list))
            }
            Err(error) => {
                tracing::debug!(%error, "sequence does not match the metadata tuple");
                Err(error)
            }
        }
    }
}

impl<L, G> From<Vec<AnyEntry<L, G>>> for Sequence<L, G> {
    fn from(entries: Vec<AnyEntry<L, G>>) -> Self {
        Sequence::new(entries)
    }
}

impl<L, G> From<Sequence<L, G>> for Vec<AnyEntry<L, G>> {
    fn from(sequence: Sequence<L, G>) -> Self {
        sequence.entries
    }
}

impl<L, G> FromIterator<AnyEntry<L, G>> for Sequence<L, G> {
    fn from_iter<I: IntoIterator<Item = AnyEntry<L, G>>>(iter: I) -> Self {
        Sequence::new(iter.into_iter().collect())
    }
}

impl<L, G> IntoIterator for Sequence<L, G> {
    type Item = AnyEntry<L, G>;
    type IntoIter = vec::IntoIter<AnyEntry<L, G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, L, G> IntoIterator for &'a Sequence<L, G> {
    type Item = &'a AnyEntry<L, G>;
    type IntoIter = slice::Iter<'a, AnyEntry<L, G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
