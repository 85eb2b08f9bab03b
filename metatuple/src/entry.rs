#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::kind::{GroupKind, Kind, LeafKind};
use crate::EntryKind;

/// Anything which can occupy a position in a [`TupleMetadata`](crate::TupleMetadata).
///
/// Every entry has a static [`Kind`], and some `Content`: the value it carries. The two
/// conversions between an entry and its content are inverse to each other and do nothing else.
///
/// The wrappers [`Leaf`](struct@Leaf) and [`Group`](struct@Group) implement this trait for any
/// content. To make a type of your own an entry, derive [`Leaf`](macro@crate::Leaf) or
/// [`Group`](macro@crate::Group) on it, which makes the type its own content.
///
/// # Examples
///
/// ```
/// use metatuple::prelude::*;
///
/// #[derive(Debug, PartialEq, Group)]
/// struct Tags(Vec<&'static str>);
///
/// let meta = compose!(Leaf("get /users"), Tags(vec!["users", "admin"]));
/// assert_eq!(meta.kinds(), [EntryKind::Leaf, EntryKind::Group]);
/// assert_eq!(meta.get::<1>(), &Tags(vec!["users", "admin"]));
/// ```
pub trait Entry: Sized {
    /// Whether this is a leaf item or a group.
    type Kind: Kind;

    /// The value this entry carries.
    type Content;

    /// Unwrap the content.
    fn into_content(self) -> Self::Content;

    /// Wrap some content.
    fn from_content(content: Self::Content) -> Self;

    /// The runtime tag of this entry's kind.
    fn kind(&self) -> EntryKind {
        <Self::Kind as Kind>::KIND
    }
}

/// An opaque, atomic metadata item.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct Leaf<T>(pub T);

/// An opaque, pre-formed collection of metadata.
///
/// What a group contains and how a consumer treats it are outside the concern of this crate; in
/// particular, a group may itself hold a [`TupleMetadata`](crate::TupleMetadata) (see
/// [`into_group`](crate::TupleMetadata::into_group)), and no flattening takes place.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct Group<G>(pub G);

impl<T> Leaf<T> {
    /// Get the wrapped item.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<G> Group<G> {
    /// Get the wrapped group.
    pub fn into_inner(self) -> G {
        self.0
    }
}

impl<T> From<T> for Leaf<T> {
    fn from(item: T) -> Self {
        Leaf(item)
    }
}

impl<G> From<G> for Group<G> {
    fn from(group: G) -> Self {
        Group(group)
    }
}

impl<T> Entry for Leaf<T> {
    type Kind = LeafKind;
    type Content = T;

    #[inline]
    fn into_content(self) -> T {
        self.0
    }

    #[inline]
    fn from_content(content: T) -> Self {
        Leaf(content)
    }
}

impl<G> Entry for Group<G> {
    type Kind = GroupKind;
    type Content = G;

    #[inline]
    fn into_content(self) -> G {
        self.0
    }

    #[inline]
    fn from_content(content: G) -> Self {
        Group(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn wrappers_report_their_kind() {
        assert_eq!(Leaf(()).kind(), EntryKind::Leaf);
        assert_eq!(Group(()).kind(), EntryKind::Group);
    }

    #[test]
    fn content_is_passed_through_untouched() {
        let shared = Rc::new("description");
        let leaf = Leaf::from_content(Rc::clone(&shared));
        assert!(Rc::ptr_eq(&leaf.into_content(), &shared));

        let group: Group<Vec<u8>> = vec![1, 2, 3].into();
        assert_eq!(group.into_inner(), vec![1, 2, 3]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wrappers_serialize_transparently() {
        assert_eq!(serde_json::to_string(&Leaf(5)).unwrap(), "5");
        assert_eq!(
            serde_json::from_str::<Group<Vec<u8>>>("[1,2]").unwrap(),
            Group(vec![1, 2])
        );
    }
}
